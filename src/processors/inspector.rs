use crate::error::Result;
use crate::models::TimelineRecord;
use crate::utils::timestamps::{format_instant, parse_instant, Instant};

/// Offline overview of an export: what a conversion would look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineSummary {
    pub timeline_objects: usize,
    pub activity_segments: usize,
    pub first_start: Option<Instant>,
    pub last_start: Option<Instant>,
}

impl TimelineSummary {
    /// Every segment costs two reverse-geocoding lookups.
    pub fn lookups_required(&self) -> usize {
        self.activity_segments * 2
    }

    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Timeline objects: {}\nActivity segments: {}\nLookups required: {}",
            self.timeline_objects,
            self.activity_segments,
            self.lookups_required()
        );
        if let (Some(first), Some(last)) = (&self.first_start, &self.last_start) {
            summary.push_str(&format!(
                "\nFirst segment starts: {}\nLast segment starts: {}",
                format_instant(first),
                format_instant(last)
            ));
        }
        summary
    }
}

pub fn inspect_record(record: &TimelineRecord) -> Result<TimelineSummary> {
    let mut first_start = None;
    let mut last_start = None;

    for segment in record
        .timeline_objects
        .iter()
        .filter_map(|object| object.activity_segment.as_ref())
    {
        let start = parse_instant(&segment.duration.start_timestamp)?;
        parse_instant(&segment.duration.end_timestamp)?;

        if first_start.is_none() {
            first_start = Some(start);
        }
        last_start = Some(start);
    }

    Ok(TimelineSummary {
        timeline_objects: record.timeline_objects.len(),
        activity_segments: record.activity_segment_count(),
        first_start,
        last_start,
    })
}
