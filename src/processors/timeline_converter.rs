use tracing::debug;

use crate::error::Result;
use crate::geocoding::CityLookup;
use crate::models::{ActivitySegment, ConversionResult, MaskedSegment, TimelineRecord};
use crate::utils::timestamps::{format_instant, parse_instant};

/// Turns a timeline record into masked segments, one per activity segment.
pub struct TimelineConverter<'a, L: CityLookup + ?Sized> {
    lookup: &'a L,
}

impl<'a, L: CityLookup + ?Sized> TimelineConverter<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    /// Any timestamp that fails to parse aborts the whole record.
    pub fn convert(&self, record: TimelineRecord) -> Result<ConversionResult> {
        let mut output = Vec::with_capacity(record.activity_segment_count());

        for segment in record.into_activity_segments() {
            output.push(self.mask_segment(segment)?);
        }

        debug!("Masked {} activity segments", output.len());
        Ok(output)
    }

    pub fn mask_segment(&self, segment: ActivitySegment) -> Result<MaskedSegment> {
        let start_time = parse_instant(&segment.duration.start_timestamp)?;
        let end_time = parse_instant(&segment.duration.end_timestamp)?;

        // Start and end are looked up separately even when identical
        let start_city = self.lookup.resolve(segment.start_location.to_geo_point());
        let end_city = self.lookup.resolve(segment.end_location.to_geo_point());

        Ok(MaskedSegment::new(
            format_instant(&start_time),
            format_instant(&end_time),
            start_city,
            end_city,
        ))
    }
}
