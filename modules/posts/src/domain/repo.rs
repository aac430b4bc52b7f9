use async_trait::async_trait;
use geosector::GeoPoint;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::Post;

/// Repository trait for post persistence.
#[async_trait]
pub trait PostsRepository: Send + Sync {
    /// Insert a fully-formed post (id and timestamp already assigned).
    async fn insert(&self, post: Post) -> Result<Post, DomainError>;

    /// Fetch a post by id. The sector annotation is absent outside feeds.
    async fn get(&self, id: Uuid) -> Result<Option<Post>, DomainError>;

    /// The feed page: ordered by (sector asc, created_at desc) when an
    /// origin is given, by created_at desc alone otherwise.
    async fn list(
        &self,
        origin: Option<GeoPoint>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Post>, DomainError>;
}
