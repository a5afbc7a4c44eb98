use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_INPUT_DIR, DEFAULT_LOOKUP_TIMEOUT_MS, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_OUTPUT_DIR, DEFAULT_RETRY_DELAY_MS, DEFAULT_USER_AGENT, ENV_PREFIX,
    NOMINATIM_BASE_URL,
};

/// Runtime settings, layered: built-in defaults, then `masker.toml` (or an
/// explicit file), then `MASKER_*` environment variables. CLI flags are
/// applied on top by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaskerConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub fail_fast: bool,
    #[serde(default)]
    pub geocoder: GeocoderSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeocoderSettings {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_ms: u64,
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
}

impl Default for GeocoderSettings {
    fn default() -> Self {
        Self {
            base_url: NOMINATIM_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_LOOKUP_TIMEOUT_MS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }
}

impl Default for MaskerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR)
    }
}

impl MaskerConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            fail_fast: false,
            geocoder: GeocoderSettings::default(),
        }
    }

    /// Load layered configuration. With `path`, that file must exist;
    /// without it, `masker.toml` in the working directory is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let builder = Config::builder()
            .set_default("input_dir", DEFAULT_INPUT_DIR)?
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("fail_fast", false)?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

// Tests that read or write MASKER_* variables take this first
#[cfg(test)]
static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
