use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::timeline_converter::TimelineConverter;
use crate::error::{ProcessingError, Result};
use crate::geocoding::CityLookup;
use crate::readers::TimelineReader;
use crate::utils::filename::converted_output_path;
use crate::utils::progress::ProgressReporter;
use crate::writers::JsonWriter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub segments: usize,
}

#[derive(Debug)]
pub struct FailedFile {
    pub input: PathBuf,
    pub error: ProcessingError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total_segments(&self) -> usize {
        self.converted.iter().map(|file| file.segments).sum()
    }

    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Converted {} of {} files ({} segments)",
            self.converted.len(),
            self.total(),
            self.total_segments()
        );

        for failure in &self.failed {
            summary.push_str(&format!(
                "\n  ✗ {}: {}",
                failure.input.display(),
                failure.error
            ));
        }

        summary
    }
}

/// Converts every file of an input directory, one at a time. A file that
/// fails is reported and skipped unless `fail_fast` is set.
pub struct BatchProcessor<'a, L: CityLookup + ?Sized> {
    converter: TimelineConverter<'a, L>,
    reader: TimelineReader,
    writer: JsonWriter,
    fail_fast: bool,
}

impl<'a, L: CityLookup + ?Sized> BatchProcessor<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self {
            converter: TimelineConverter::new(lookup),
            reader: TimelineReader::new(),
            writer: JsonWriter::new(),
            fail_fast: false,
        }
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_writer(mut self, writer: JsonWriter) -> Self {
        self.writer = writer;
        self
    }

    pub fn process_directory(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<BatchReport> {
        let files = list_input_files(input_dir)?;
        info!("Found {} files in {}", files.len(), input_dir.display());
        self.process_files(&files, output_dir, progress)
    }

    pub fn process_files(
        &self,
        files: &[PathBuf],
        output_dir: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<BatchReport> {
        fs::create_dir_all(output_dir)?;

        let mut report = BatchReport::default();

        for input in files {
            if let Some(progress) = progress {
                progress.set_message(&format!("Processing {}", display_name(input)));
            }

            match self.convert_file(input, output_dir, progress) {
                Ok(converted) => report.converted.push(converted),
                Err(e) => {
                    match progress {
                        Some(progress) if progress.is_active() => {
                            debug!("Failed to convert {}: {}", input.display(), e);
                            progress.println(&format!("✗ {}: {}", display_name(input), e));
                        }
                        _ => error!("Failed to convert {}: {}", input.display(), e),
                    }
                    if self.fail_fast {
                        return Err(e.for_file(input));
                    }
                    report.failed.push(FailedFile {
                        input: input.clone(),
                        error: e,
                    });
                }
            }

            if let Some(progress) = progress {
                progress.increment(1);
            }
        }

        Ok(report)
    }

    /// Read, convert and write a single file. Nothing is written on error.
    pub fn process_file(&self, input: &Path, output_dir: &Path) -> Result<ConvertedFile> {
        self.convert_file(input, output_dir, None)
    }

    fn convert_file(
        &self,
        input: &Path,
        output_dir: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<ConvertedFile> {
        report_status(
            progress,
            &format!("Processing {}, please wait...", display_name(input)),
        );

        let record = self.reader.read_record(input)?;
        let segments = self.converter.convert(record)?;

        report_status(
            progress,
            &format!("Finished processing {}", display_name(input)),
        );

        let output = converted_output_path(input, output_dir);
        report_status(
            progress,
            &format!("Writing converted to {}", output.display()),
        );
        self.writer.write_segments(&segments, &output)?;

        Ok(ConvertedFile {
            input: input.to_path_buf(),
            output,
            segments: segments.len(),
        })
    }
}

/// Regular files directly inside `dir`, sorted by name.
pub fn list_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ProcessingError::Config(format!(
            "Input path is not a directory: {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Printed above an active progress bar, logged otherwise.
fn report_status(progress: Option<&ProgressReporter>, message: &str) {
    match progress {
        Some(progress) if progress.is_active() => {
            debug!("{}", message);
            progress.println(message);
        }
        _ => info!("{}", message),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
