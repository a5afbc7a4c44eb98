use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{ProcessingError, Result};
use crate::models::TimelineRecord;

/// Loads a whole timeline export into memory.
pub struct TimelineReader;

impl TimelineReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_record(&self, path: &Path) -> Result<TimelineRecord> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(ProcessingError::from_json)
    }

    pub fn parse_record(&self, json: &str) -> Result<TimelineRecord> {
        serde_json::from_str(json).map_err(ProcessingError::from_json)
    }
}

impl Default for TimelineReader {
    fn default() -> Self {
        Self::new()
    }
}
