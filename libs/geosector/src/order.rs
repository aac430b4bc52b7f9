use sea_orm::sea_query::SimpleExpr;
use sea_orm::{EntityTrait, Order, QueryOrder, QuerySelect, Select};

use crate::{GeoPoint, SectorSpec};

/// Alias of the query-time sector annotation column.
pub const SECTOR_COLUMN: &str = "sector";

/// The columns sector ordering reads from an entity: the stored
/// coordinate pair and the creation timestamp.
pub struct GeoColumns<E: EntityTrait> {
    pub lat: E::Column,
    pub lon: E::Column,
    pub created_at: E::Column,
}

impl<E: EntityTrait> Clone for GeoColumns<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: EntityTrait> Copy for GeoColumns<E> {}

/// Extension for [`sea_orm::Select`] that annotates each row with its
/// distance sector and orders the result set by it.
pub trait SectorOrderExt<E: EntityTrait>: Sized {
    /// Annotate rows with a `sector` column and order by
    /// (sector asc, created_at desc).
    ///
    /// Without a reference point there is nothing to bucket by: the
    /// annotation is a typed NULL and the order is creation time
    /// descending alone. No tie-breaker is appended in either mode;
    /// rows equal under the sort keys come back in engine order.
    fn order_by_sector(
        self,
        spec: &SectorSpec,
        origin: Option<&GeoPoint>,
        cols: &GeoColumns<E>,
    ) -> Self;
}

impl<E: EntityTrait> SectorOrderExt<E> for Select<E> {
    fn order_by_sector(
        self,
        spec: &SectorSpec,
        origin: Option<&GeoPoint>,
        cols: &GeoColumns<E>,
    ) -> Self {
        let Some(origin) = origin else {
            let null_sector = SimpleExpr::Custom("CAST(NULL AS bigint)".to_owned());
            return self
                .column_as(null_sector, SECTOR_COLUMN)
                .order_by(cols.created_at, Order::Desc);
        };

        let sector = spec.sector_expr(origin, cols.lat, cols.lon);
        self.column_as(sector.clone(), SECTOR_COLUMN)
            .order_by(sector, Order::Asc)
            .order_by(cols.created_at, Order::Desc)
    }
}
