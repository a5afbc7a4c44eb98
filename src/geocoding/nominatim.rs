use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::lookup::{LookupError, ReverseGeocoder};
use crate::app_config::GeocoderSettings;
use crate::error::Result;
use crate::models::GeoPoint;

/// Reverse geocoder backed by an OpenStreetMap Nominatim `/reverse` endpoint.
pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    reverse_url: String,
}

/// Nominatim answers 200 with an `error` member when nothing matched.
#[derive(Debug, Deserialize)]
struct NominatimResponse {
    error: Option<String>,
    address: Option<Address>,
}

#[derive(Debug, Deserialize)]
struct Address {
    city: Option<String>,
}

impl NominatimGeocoder {
    pub fn new(settings: &GeocoderSettings) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            reverse_url: format!("{}/reverse", settings.base_url.trim_end_matches('/')),
        })
    }

    pub fn reverse_url(&self) -> &str {
        &self.reverse_url
    }
}

impl ReverseGeocoder for NominatimGeocoder {
    fn reverse(&self, point: GeoPoint) -> std::result::Result<Option<String>, LookupError> {
        debug!("Reverse geocoding {} via {}", point, self.reverse_url);

        let response = self
            .client
            .get(&self.reverse_url)
            .query(&[
                ("lat", point.latitude.to_string()),
                ("lon", point.longitude.to_string()),
                ("format", "json".to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status));
        }

        let data: NominatimResponse = response.json().map_err(classify_transport_error)?;

        if let Some(message) = data.error {
            return Err(LookupError::Other(format!("Nominatim error: {}", message)));
        }

        Ok(data.address.and_then(|address| address.city))
    }
}

fn classify_transport_error(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Other(err.to_string())
    }
}

fn classify_status(status: StatusCode) -> LookupError {
    match status.as_u16() {
        408 | 504 => LookupError::Timeout,
        402 | 429 | 509 => LookupError::QuotaExceeded,
        _ => LookupError::Other(format!("Nominatim returned status: {}", status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn geocoder_for(server: &mockito::Server) -> NominatimGeocoder {
        let settings = GeocoderSettings {
            base_url: server.url(),
            ..GeocoderSettings::default()
        };
        NominatimGeocoder::new(&settings).unwrap()
    }

    #[test]
    fn test_returns_city() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/reverse")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("lat".into(), "48.8566".into()),
                Matcher::UrlEncoded("lon".into(), "2.3522".into()),
                Matcher::UrlEncoded("format".into(), "json".into()),
            ]))
            .match_header("user-agent", "geoapi_masker")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"place_id": 1, "address": {"city": "Paris", "country": "France"}}"#)
            .create();

        let city = geocoder_for(&server).reverse(GeoPoint::new(48.8566, 2.3522));

        mock.assert();
        assert_eq!(city, Ok(Some("Paris".to_string())));
    }

    #[test]
    fn test_address_without_city() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/reverse")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"address": {"county": "Somewhere", "country": "France"}}"#)
            .create();

        let city = geocoder_for(&server).reverse(GeoPoint::new(45.0, 1.0));
        assert_eq!(city, Ok(None));
    }

    #[test]
    fn test_unable_to_geocode_is_other() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/reverse")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"error": "Unable to geocode"}"#)
            .create();

        let result = geocoder_for(&server).reverse(GeoPoint::new(0.0, -30.0));
        match result {
            Err(LookupError::Other(message)) => assert!(message.contains("Unable to geocode")),
            other => panic!("expected Other, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_limited_is_quota_exceeded() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/reverse")
            .match_query(Matcher::Any)
            .with_status(429)
            .create();

        let result = geocoder_for(&server).reverse(GeoPoint::new(1.0, 1.0));
        assert_eq!(result, Err(LookupError::QuotaExceeded));
    }

    #[test]
    fn test_gateway_timeout_is_timeout() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/reverse")
            .match_query(Matcher::Any)
            .with_status(504)
            .create();

        let result = geocoder_for(&server).reverse(GeoPoint::new(1.0, 1.0));
        assert_eq!(result, Err(LookupError::Timeout));
    }

    #[test]
    fn test_server_error_is_other() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/reverse")
            .match_query(Matcher::Any)
            .with_status(500)
            .create();

        let result = geocoder_for(&server).reverse(GeoPoint::new(1.0, 1.0));
        assert!(matches!(result, Err(LookupError::Other(_))));
    }

    #[test]
    fn test_malformed_body_is_other() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/reverse")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create();

        let result = geocoder_for(&server).reverse(GeoPoint::new(1.0, 1.0));
        assert!(matches!(result, Err(LookupError::Other(_))));
    }

    #[test]
    fn test_reverse_url_trims_trailing_slash() {
        let settings = GeocoderSettings {
            base_url: "http://localhost:8080/".to_string(),
            ..GeocoderSettings::default()
        };
        let geocoder = NominatimGeocoder::new(&settings).unwrap();
        assert_eq!(geocoder.reverse_url(), "http://localhost:8080/reverse");
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(classify_status(StatusCode::REQUEST_TIMEOUT), LookupError::Timeout);
        assert_eq!(classify_status(StatusCode::PAYMENT_REQUIRED), LookupError::QuotaExceeded);
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN),
            LookupError::Other(_)
        ));
    }
}
