use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::model::{FeedPage, Post};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostDto {
    pub id: Uuid,
    pub body: String,
    pub media_url: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub created_at: DateTime<Utc>,
    /// Distance bucket relative to the feed's reference point; absent when
    /// the feed had none.
    pub sector: Option<i64>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            body: post.body,
            media_url: post.media_url,
            lat: post.location.lat(),
            lon: post.location.lon(),
            created_at: post.created_at,
            sector: post.sector,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub body: String,
    #[serde(default)]
    pub media_url: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

/// Feed query. `lat`/`lon` anchor the feed to a reference point and must be
/// supplied together.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct FeedQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeedPageDto {
    pub items: Vec<PostDto>,
    pub limit: u64,
    pub offset: u64,
}

impl From<FeedPage> for FeedPageDto {
    fn from(page: FeedPage) -> Self {
        Self {
            items: page.items.into_iter().map(PostDto::from).collect(),
            limit: page.limit,
            offset: page.offset,
        }
    }
}
