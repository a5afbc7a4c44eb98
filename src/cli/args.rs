use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "timeline-masker")]
#[command(about = "Reduce location-history exports to segment times and city names")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Only log warnings and errors, hide progress")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Configuration file [default: masker.toml if present]")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert every export in a directory into masked segments
    Convert {
        #[arg(short, long, help = "Directory of timeline exports [default: input]")]
        input_dir: Option<PathBuf>,

        #[arg(short, long, help = "Directory for converted files [default: output]")]
        output_dir: Option<PathBuf>,

        #[arg(long, help = "Stop at the first file that fails to convert")]
        fail_fast: bool,

        #[arg(long, help = "Pretty-print output JSON")]
        pretty: bool,

        #[arg(long, help = "Base URL of the Nominatim service")]
        geocoder_url: Option<String>,
    },

    /// Show what a conversion would do for one export, without geocoding
    Inspect {
        #[arg(short, long, help = "Timeline export file")]
        file: PathBuf,
    },
}
