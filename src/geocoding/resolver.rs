use std::time::Duration;
use tracing::{debug, warn};

use super::lookup::{LookupError, ReverseGeocoder};
use crate::app_config::GeocoderSettings;
use crate::models::GeoPoint;
use crate::utils::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY_MS, UNKNOWN_CITY};

/// Resolves a coordinate to a city name. Infallible: every failure is
/// reported as [`UNKNOWN_CITY`].
pub trait CityLookup {
    fn resolve(&self, point: GeoPoint) -> String;
}

/// Waits between retry attempts.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Fixed-delay retry for timed-out lookups; `max_attempts` counts the first try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl From<&GeocoderSettings> for RetryPolicy {
    fn from(settings: &GeocoderSettings) -> Self {
        Self {
            max_attempts: settings.max_attempts,
            delay: Duration::from_millis(settings.retry_delay_ms),
        }
    }
}

pub struct CityResolver<G, S = ThreadSleeper> {
    geocoder: G,
    sleeper: S,
    policy: RetryPolicy,
}

impl<G: ReverseGeocoder> CityResolver<G, ThreadSleeper> {
    pub fn new(geocoder: G) -> Self {
        Self {
            geocoder,
            sleeper: ThreadSleeper,
            policy: RetryPolicy::default(),
        }
    }
}

impl<G: ReverseGeocoder, S: Sleeper> CityResolver<G, S> {
    pub fn with_sleeper<T: Sleeper>(self, sleeper: T) -> CityResolver<G, T> {
        CityResolver {
            geocoder: self.geocoder,
            sleeper,
            policy: self.policy,
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }
}

impl<G: ReverseGeocoder, S: Sleeper> CityLookup for CityResolver<G, S> {
    fn resolve(&self, point: GeoPoint) -> String {
        let max_attempts = self.policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            match self.geocoder.reverse(point) {
                Ok(Some(city)) => return city,
                Ok(None) => {
                    debug!("No city in address for {}", point);
                    return UNKNOWN_CITY.to_string();
                }
                Err(LookupError::Timeout) if attempt < max_attempts => {
                    debug!(
                        "Geocoder timed out for {} (attempt {}/{}), retrying",
                        point, attempt, max_attempts
                    );
                    self.sleeper.sleep(self.policy.delay);
                }
                Err(LookupError::Timeout) => {
                    warn!("Geocoder service timed out after {} attempts", max_attempts);
                    return UNKNOWN_CITY.to_string();
                }
                Err(LookupError::QuotaExceeded) => {
                    warn!("Geocoder service quota exceeded");
                    return UNKNOWN_CITY.to_string();
                }
                Err(LookupError::Other(cause)) => {
                    warn!("Unexpected geocoding error for {}: {}", point, cause);
                    return UNKNOWN_CITY.to_string();
                }
            }
        }

        UNKNOWN_CITY.to_string()
    }
}
