/// City name used whenever a lookup does not produce one
pub const UNKNOWN_CITY: &str = "Unknown";

/// Fixed-point coordinate scale (degrees * 10^7)
pub const E7_SCALE: f64 = 1e7;

/// Output file naming
pub const OUTPUT_SUFFIX: &str = "_converted";
pub const OUTPUT_EXTENSION: &str = "json";

/// Directory defaults
pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Optional configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "masker.toml";
pub const ENV_PREFIX: &str = "MASKER";

/// Reverse geocoding defaults
pub const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "geoapi_masker";
pub const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 1000;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;
