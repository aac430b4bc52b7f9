use crate::GeoError;

/// A validated WGS-84 style coordinate pair.
///
/// Construction is the validation boundary: a `GeoPoint` always holds
/// finite, in-range coordinates, so query builders can take it without
/// re-checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Build a point from latitude/longitude in decimal degrees.
    ///
    /// # Errors
    /// Returns `GeoError` when a coordinate is non-finite or out of range
    /// (latitude [-90, 90], longitude [-180, 180]).
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(GeoError::NonFiniteCoordinate);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }
}
