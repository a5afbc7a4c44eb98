pub mod constants;
pub mod filename;
pub mod progress;
pub mod timestamps;

pub use constants::*;
pub use filename::{converted_file_name, converted_output_path};
pub use progress::ProgressReporter;
pub use timestamps::{format_instant, parse_instant, Instant};
