use geosector::GeoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("post not found")]
    NotFound,

    #[error("validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e.to_string())
    }
}

/// Bad coordinates are caller input problems, not infrastructure failures.
impl From<GeoError> for DomainError {
    fn from(e: GeoError) -> Self {
        match e {
            GeoError::LatitudeOutOfRange(_) | GeoError::NonFiniteCoordinate => {
                Self::validation("lat", e.to_string())
            }
            GeoError::LongitudeOutOfRange(_) => Self::validation("lon", e.to_string()),
            GeoError::InvalidBucketWidth(_) => Self::validation("nearby.distance_m", e.to_string()),
        }
    }
}
