//! Distance-sector ordering for `SeaORM` selects.
//!
//! A *sector* is an integer bucket of distance from a reference point:
//! `floor(distance / bucket_width)`. Feeds ordered by (sector asc, recency
//! desc) group nearby records together without strictly ranking by raw
//! distance, so a fresh record 80 m away still beats a stale one 20 m away
//! when both fall inside the same bucket.
//!
//! The distance itself is computed by the database (PostGIS geography
//! distance); this crate only builds the expressions and ordering.

mod order;
mod point;
mod spec;

pub use order::{GeoColumns, SectorOrderExt, SECTOR_COLUMN};
pub use point::GeoPoint;
pub use spec::SectorSpec;

use thiserror::Error;

/// Validation errors for geographic inputs and sector configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error("latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(f64),

    #[error("coordinates must be finite numbers")]
    NonFiniteCoordinate,

    #[error("sector bucket width must be a positive number of meters, got {0}")]
    InvalidBucketWidth(f64),
}
