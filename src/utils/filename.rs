use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::constants::{OUTPUT_EXTENSION, OUTPUT_SUFFIX};

/// `<stem>_converted.json` for an input file: `2023_MAY.json` -> `2023_MAY_converted.json`
pub fn converted_file_name(input: &Path) -> OsString {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push(OUTPUT_SUFFIX);
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    name
}

/// Full output path for an input file inside `output_dir`
pub fn converted_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(converted_file_name(input))
}
