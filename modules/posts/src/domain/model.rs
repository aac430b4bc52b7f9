use chrono::{DateTime, Utc};
use geosector::GeoPoint;
use uuid::Uuid;

/// A persisted post. Structurally immutable after insertion; `created_at`
/// is assigned once by the service and never touched again.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub body: String,
    pub media_url: Option<String>,
    pub location: GeoPoint,
    pub created_at: DateTime<Utc>,
    /// Distance sector relative to the feed's reference point, annotated
    /// at query time. `None` when the feed had no reference point (or the
    /// post was fetched outside a feed).
    pub sector: Option<i64>,
}

/// Input for creating a post; id and timestamp are assigned server-side.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub body: String,
    pub media_url: Option<String>,
    pub location: GeoPoint,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PageRequest {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// One page of the feed, with the effective (clamped) paging values.
#[derive(Debug, Clone)]
pub struct FeedPage {
    pub items: Vec<Post>,
    pub limit: u64,
    pub offset: u64,
}
