use tracing::{info, warn, Level};

use crate::cli::args::{Cli, Commands};
use crate::app_config::MaskerConfig;
use crate::error::{ProcessingError, Result};
use crate::geocoding::{CityResolver, NominatimGeocoder, RetryPolicy};
use crate::processors::{inspect_record, list_input_files, BatchProcessor};
use crate::readers::TimelineReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::JsonWriter;

/// Install the global tracing subscriber; logs go to stderr.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let config = MaskerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            input_dir,
            output_dir,
            fail_fast,
            pretty,
            geocoder_url,
        } => {
            let mut config = config;
            if let Some(input_dir) = input_dir {
                config.input_dir = input_dir;
            }
            if let Some(output_dir) = output_dir {
                config.output_dir = output_dir;
            }
            if fail_fast {
                config.fail_fast = true;
            }
            if let Some(url) = geocoder_url {
                config.geocoder.base_url = url;
            }

            convert(&config, pretty, cli.quiet)
        }

        Commands::Inspect { file } => {
            println!("Inspecting timeline export: {}", file.display());

            let record = TimelineReader::new()
                .read_record(&file)
                .map_err(|e| e.for_file(&file))?;
            let summary = inspect_record(&record).map_err(|e| e.for_file(&file))?;

            println!("\n{}", summary.summary());
            Ok(())
        }
    }
}

fn convert(config: &MaskerConfig, pretty: bool, quiet: bool) -> Result<()> {
    info!("Input directory: {}", config.input_dir.display());
    info!("Output directory: {}", config.output_dir.display());
    info!("Geocoder: {}", config.geocoder.base_url);

    let geocoder = NominatimGeocoder::new(&config.geocoder)?;
    let resolver = CityResolver::new(geocoder).with_policy(RetryPolicy::from(&config.geocoder));

    let files = list_input_files(&config.input_dir)?;
    if files.is_empty() {
        warn!("No files found in {}", config.input_dir.display());
        return Ok(());
    }

    let progress = ProgressReporter::new(files.len() as u64, "Converting timeline exports...", quiet);

    let processor = BatchProcessor::new(&resolver)
        .with_fail_fast(config.fail_fast)
        .with_writer(JsonWriter::new().with_pretty(pretty));

    let report = processor.process_files(&files, &config.output_dir, Some(&progress))?;

    progress.finish_with_message(&format!(
        "Converted {} of {} files",
        report.converted.len(),
        report.total()
    ));

    if !quiet {
        println!("\n{}", report.summary());
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(ProcessingError::BatchFailed {
            failed: report.failed.len(),
            total: report.total(),
        })
    }
}
