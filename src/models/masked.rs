use serde::{Deserialize, Serialize};

/// One travel leg with coordinates replaced by city names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedSegment {
    pub start_time: String,
    pub end_time: String,
    pub start_city: String,
    pub end_city: String,
}

/// Masked segments of one input file, in input order.
pub type ConversionResult = Vec<MaskedSegment>;

impl MaskedSegment {
    pub fn new(start_time: String, end_time: String, start_city: String, end_city: String) -> Self {
        Self {
            start_time,
            end_time,
            start_city,
            end_city,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_order() {
        let segment = MaskedSegment::new(
            "2023-05-01T10:00:00+00:00".to_string(),
            "2023-05-01T11:00:00+00:00".to_string(),
            "Paris".to_string(),
            "Unknown".to_string(),
        );

        assert_eq!(
            serde_json::to_string(&segment).unwrap(),
            r#"{"start_time":"2023-05-01T10:00:00+00:00","end_time":"2023-05-01T11:00:00+00:00","start_city":"Paris","end_city":"Unknown"}"#
        );
    }
}
