//! Input side of a Semantic Location History export.
//!
//! Only the fields the masker reads are modelled; everything else in a
//! timeline object (`placeVisit`, `activityType`, `waypointPath`, ...) is
//! ignored by serde.

use serde::{Deserialize, Serialize};

use super::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineRecord {
    #[serde(rename = "timelineObjects")]
    pub timeline_objects: Vec<TimelineObject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineObject {
    #[serde(rename = "activitySegment", skip_serializing_if = "Option::is_none")]
    pub activity_segment: Option<ActivitySegment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySegment {
    pub duration: SegmentDuration,

    #[serde(rename = "startLocation")]
    pub start_location: E7Location,

    #[serde(rename = "endLocation")]
    pub end_location: E7Location,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentDuration {
    #[serde(rename = "startTimestamp")]
    pub start_timestamp: String,

    #[serde(rename = "endTimestamp")]
    pub end_timestamp: String,
}

/// Fixed-point coordinate pair, degrees scaled by 10^7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct E7Location {
    #[serde(rename = "latitudeE7")]
    pub latitude_e7: i64,

    #[serde(rename = "longitudeE7")]
    pub longitude_e7: i64,
}

impl TimelineRecord {
    pub fn new(timeline_objects: Vec<TimelineObject>) -> Self {
        Self { timeline_objects }
    }

    /// Consume the record, yielding its activity segments in encounter order.
    /// Objects without an `activitySegment` are skipped.
    pub fn into_activity_segments(self) -> impl Iterator<Item = ActivitySegment> {
        self.timeline_objects
            .into_iter()
            .filter_map(|object| object.activity_segment)
    }

    pub fn activity_segment_count(&self) -> usize {
        self.timeline_objects
            .iter()
            .filter(|object| object.activity_segment.is_some())
            .count()
    }
}

impl TimelineObject {
    pub fn with_segment(segment: ActivitySegment) -> Self {
        Self {
            activity_segment: Some(segment),
        }
    }
}

impl ActivitySegment {
    pub fn new(
        start_timestamp: impl Into<String>,
        end_timestamp: impl Into<String>,
        start_location: E7Location,
        end_location: E7Location,
    ) -> Self {
        Self {
            duration: SegmentDuration {
                start_timestamp: start_timestamp.into(),
                end_timestamp: end_timestamp.into(),
            },
            start_location,
            end_location,
        }
    }
}

impl E7Location {
    pub fn new(latitude_e7: i64, longitude_e7: i64) -> Self {
        Self {
            latitude_e7,
            longitude_e7,
        }
    }

    pub fn to_geo_point(self) -> GeoPoint {
        GeoPoint::from_e7(self.latitude_e7, self.longitude_e7)
    }
}
