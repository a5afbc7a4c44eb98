use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timeline structure: {0}")]
    InvalidStructure(String),

    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to convert {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<ProcessingError>,
    },

    #[error("{failed} of {total} files failed to convert")]
    BatchFailed { failed: usize, total: usize },
}

impl ProcessingError {
    /// Classify a serde_json error: missing or mistyped fields are structural,
    /// everything else (syntax, truncation, I/O) stays a JSON error.
    pub fn from_json(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => ProcessingError::InvalidStructure(err.to_string()),
            serde_json::error::Category::Io => {
                ProcessingError::Io(std::io::Error::from(err))
            }
            _ => ProcessingError::Json(err),
        }
    }

    pub fn for_file(self, path: impl Into<PathBuf>) -> Self {
        ProcessingError::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

impl From<config::ConfigError> for ProcessingError {
    fn from(err: config::ConfigError) -> Self {
        ProcessingError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_structural() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Needs {
            #[serde(rename = "timelineObjects")]
            timeline_objects: Vec<u8>,
        }

        let err = serde_json::from_str::<Needs>("{}").unwrap_err();
        match ProcessingError::from_json(err) {
            ProcessingError::InvalidStructure(message) => {
                assert!(message.contains("timelineObjects"));
            }
            other => panic!("expected structural error, got {:?}", other),
        }
    }

    #[test]
    fn test_syntax_error_stays_json() {
        let err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        assert!(matches!(
            ProcessingError::from_json(err),
            ProcessingError::Json(_)
        ));
    }

    #[test]
    fn test_file_context_in_message() {
        let err = ProcessingError::InvalidStructure("missing field `duration`".to_string())
            .for_file("input/2023_MAY.json");
        let message = err.to_string();
        assert!(message.contains("2023_MAY.json"));
        assert!(message.contains("duration"));
    }
}
