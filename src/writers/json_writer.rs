use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::{ProcessingError, Result};
use crate::models::MaskedSegment;

/// Writes masked segments as a JSON array. The file appears at its final
/// path only once fully written.
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write_segments(&self, segments: &[MaskedSegment], path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file_mut());
            if self.pretty {
                serde_json::to_writer_pretty(&mut writer, segments)?;
            } else {
                serde_json::to_writer(&mut writer, segments)?;
            }
            writer.flush()?;
        }

        temp_file
            .persist(path)
            .map_err(|e| ProcessingError::Io(e.error))?;

        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn segment(start_city: &str) -> MaskedSegment {
        MaskedSegment::new(
            "2023-05-01T10:00:00+00:00".to_string(),
            "2023-05-01T11:00:00+00:00".to_string(),
            start_city.to_string(),
            "Unknown".to_string(),
        )
    }

    #[test]
    fn test_write_segments() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("2023_MAY_converted.json");

        JsonWriter::new().write_segments(&[segment("Paris"), segment("Lyon")], &path)?;

        let written: Vec<MaskedSegment> = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(written, vec![segment("Paris"), segment("Lyon")]);

        // Only the final file remains in the directory
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);

        Ok(())
    }

    #[test]
    fn test_empty_result_is_empty_array() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("empty_converted.json");

        JsonWriter::new().write_segments(&[], &path)?;

        assert_eq!(std::fs::read_to_string(&path)?, "[]");
        Ok(())
    }

    #[test]
    fn test_pretty_output() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("pretty_converted.json");

        JsonWriter::new()
            .with_pretty(true)
            .write_segments(&[segment("Paris")], &path)?;

        let contents = std::fs::read_to_string(&path)?;
        assert!(contents.contains("\n  {"));
        assert!(contents.contains("\"start_city\": \"Paris\""));
        Ok(())
    }

    #[test]
    fn test_missing_output_dir_is_io_error() {
        let result = JsonWriter::new()
            .write_segments(&[segment("Paris")], Path::new("/nonexistent/dir/out.json"));
        assert!(matches!(result, Err(ProcessingError::Io(_))));
    }
}
