use thiserror::Error;

use crate::models::GeoPoint;

/// Why a single reverse-geocoding request did not produce an address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("geocoding request timed out")]
    Timeout,

    #[error("geocoding quota exceeded")]
    QuotaExceeded,

    #[error("{0}")]
    Other(String),
}

/// One reverse-geocoding request per call, no retries.
///
/// `Ok(None)` means the service resolved the point but the address carries
/// no city (open water, unmapped areas).
pub trait ReverseGeocoder {
    fn reverse(&self, point: GeoPoint) -> Result<Option<String>, LookupError>;
}

impl<G: ReverseGeocoder + ?Sized> ReverseGeocoder for &G {
    fn reverse(&self, point: GeoPoint) -> Result<Option<String>, LookupError> {
        (**self).reverse(point)
    }
}

impl<G: ReverseGeocoder + ?Sized> ReverseGeocoder for Box<G> {
    fn reverse(&self, point: GeoPoint) -> Result<Option<String>, LookupError> {
        (**self).reverse(point)
    }
}
