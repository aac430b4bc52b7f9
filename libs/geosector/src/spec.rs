use sea_orm::sea_query::{Alias, BinOper, Func, SimpleExpr};
use sea_orm::{DeriveIden, IntoSimpleExpr, Value};

use crate::{GeoError, GeoPoint};

#[derive(DeriveIden)]
#[sea_orm(iden = "ST_Distance")]
struct StDistance;

#[derive(DeriveIden)]
#[sea_orm(iden = "ST_SetSRID")]
struct StSetSrid;

#[derive(DeriveIden)]
#[sea_orm(iden = "ST_MakePoint")]
struct StMakePoint;

#[derive(DeriveIden)]
#[sea_orm(iden = "FLOOR")]
struct Floor;

/// Sector configuration: bucket width in meters plus the SRID stored
/// points are interpreted under.
///
/// `new` is the startup validation gate — a non-positive width never makes
/// it past configuration loading, so per-query code can divide without
/// checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorSpec {
    bucket_width_m: f64,
    srid: i32,
}

impl SectorSpec {
    /// # Errors
    /// Returns `GeoError::InvalidBucketWidth` unless the width is a finite,
    /// strictly positive number of meters.
    pub fn new(bucket_width_m: f64, srid: i32) -> Result<Self, GeoError> {
        if !bucket_width_m.is_finite() || bucket_width_m <= 0.0 {
            return Err(GeoError::InvalidBucketWidth(bucket_width_m));
        }
        Ok(Self {
            bucket_width_m,
            srid,
        })
    }

    #[must_use]
    pub fn bucket_width_m(&self) -> f64 {
        self.bucket_width_m
    }

    #[must_use]
    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// The bucket a given distance falls into: `floor(distance / width)`.
    ///
    /// This is the semantic contract the SQL in [`sector_expr`] renders; a
    /// distance exactly on a bucket boundary belongs to the bucket it
    /// opens (floor, not round-to-nearest).
    ///
    /// [`sector_expr`]: Self::sector_expr
    #[must_use]
    pub fn sector_index(&self, distance_m: f64) -> i64 {
        (distance_m / self.bucket_width_m).floor() as i64
    }

    /// `ST_SetSRID(ST_MakePoint(lon, lat), srid)::geography`
    fn geography(&self, lat: SimpleExpr, lon: SimpleExpr) -> SimpleExpr {
        let point: SimpleExpr = Func::cust(StMakePoint).arg(lon).arg(lat).into();
        let with_srid: SimpleExpr = Func::cust(StSetSrid)
            .arg(point)
            .arg(SimpleExpr::Value(Value::Int(Some(self.srid))))
            .into();
        with_srid.cast_as(Alias::new("geography"))
    }

    /// Geography distance in meters between the stored point columns and
    /// the reference point. Evaluated entirely by PostGIS.
    pub fn distance_expr(
        &self,
        origin: &GeoPoint,
        lat_col: impl IntoSimpleExpr,
        lon_col: impl IntoSimpleExpr,
    ) -> SimpleExpr {
        let stored = self.geography(
            lat_col.into_simple_expr(),
            lon_col.into_simple_expr(),
        );
        let reference = self.geography(
            SimpleExpr::Value(Value::Double(Some(origin.lat()))),
            SimpleExpr::Value(Value::Double(Some(origin.lon()))),
        );
        Func::cust(StDistance).arg(stored).arg(reference).into()
    }

    /// `CAST(FLOOR(distance / width) AS bigint)` — the sector annotation.
    pub fn sector_expr(
        &self,
        origin: &GeoPoint,
        lat_col: impl IntoSimpleExpr,
        lon_col: impl IntoSimpleExpr,
    ) -> SimpleExpr {
        let scaled = SimpleExpr::Binary(
            Box::new(self.distance_expr(origin, lat_col, lon_col)),
            BinOper::Div,
            Box::new(SimpleExpr::Value(Value::Double(Some(self.bucket_width_m)))),
        );
        let floored: SimpleExpr = Func::cust(Floor).arg(scaled).into();
        floored.cast_as(Alias::new("bigint"))
    }
}
