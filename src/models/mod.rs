pub mod geo_point;
pub mod masked;
pub mod timeline;

pub use geo_point::GeoPoint;
pub use masked::{ConversionResult, MaskedSegment};
pub use timeline::{ActivitySegment, E7Location, SegmentDuration, TimelineObject, TimelineRecord};
