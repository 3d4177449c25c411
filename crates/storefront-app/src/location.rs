//! Location collaborator: permission check, one-shot fix, reverse geocoding.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the location collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// Location permission not granted.
    #[error("Location permission not granted")]
    PermissionDenied,

    /// No location fix could be obtained.
    #[error("Unable to get location: {0}")]
    Unavailable(String),

    /// The fix could not be resolved to a postal address.
    #[error("No address found")]
    NoAddress,
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A reverse-geocoded postal address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostalAddress {
    /// Street line.
    pub line1: String,
    /// City or locality.
    pub city: String,
    /// Postal/ZIP code.
    pub postcode: String,
    /// Country name.
    pub country: String,
}

impl PostalAddress {
    /// Format as a single display line, skipping empty parts.
    pub fn one_line(&self) -> String {
        [&self.line1, &self.city, &self.postcode, &self.country]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One-shot device location access.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Whether location permission has been granted.
    fn has_permission(&self) -> bool;

    /// Obtain a single current-location fix.
    async fn current_location(&self) -> Result<GeoPoint, LocationError>;

    /// Resolve a fix to a postal address.
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<PostalAddress, LocationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_skips_empty_parts() {
        let address = PostalAddress {
            line1: "1 High Street".to_string(),
            city: "Leeds".to_string(),
            postcode: String::new(),
            country: "United Kingdom".to_string(),
        };
        assert_eq!(address.one_line(), "1 High Street, Leeds, United Kingdom");
    }

    #[test]
    fn test_one_line_empty_address() {
        assert_eq!(PostalAddress::default().one_line(), "");
    }
}
