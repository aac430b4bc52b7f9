use std::sync::Arc;

use chrono::Utc;
use geosector::GeoPoint;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::PostsConfig;
use crate::domain::error::DomainError;
use crate::domain::model::{FeedPage, NewPost, PageRequest, Post};
use crate::domain::repo::PostsRepository;

pub struct PostsService {
    repo: Arc<dyn PostsRepository>,
    config: PostsConfig,
}

impl PostsService {
    pub fn new(repo: Arc<dyn PostsRepository>, config: PostsConfig) -> Self {
        Self { repo, config }
    }

    #[instrument(skip(self, new_post))]
    pub async fn create_post(&self, new_post: NewPost) -> Result<Post, DomainError> {
        let body = new_post.body.trim();
        if body.is_empty() {
            return Err(DomainError::validation("body", "must not be empty"));
        }
        if body.chars().count() > self.config.max_body_len {
            return Err(DomainError::validation(
                "body",
                format!("must not exceed {} characters", self.config.max_body_len),
            ));
        }

        let post = Post {
            id: Uuid::now_v7(),
            body: body.to_owned(),
            media_url: new_post.media_url,
            location: new_post.location,
            created_at: Utc::now(),
            sector: None,
        };

        let created = self.repo.insert(post).await?;

        info!(post_id = %created.id, "Created post");
        Ok(created)
    }

    #[instrument(skip(self), fields(post_id = %id))]
    pub async fn get_post(&self, id: Uuid) -> Result<Post, DomainError> {
        debug!("Getting post by id");
        self.repo.get(id).await?.ok_or(DomainError::NotFound)
    }

    /// The feed. Limit is clamped to the configured bounds; ordering is
    /// delegated to the repository (sector buckets when `origin` is given,
    /// recency alone otherwise).
    #[instrument(skip(self), fields(anchored = origin.is_some()))]
    pub async fn list_posts(
        &self,
        origin: Option<GeoPoint>,
        page: PageRequest,
    ) -> Result<FeedPage, DomainError> {
        let limit = self.config.clamp_limit(page.limit);
        let offset = page.offset.unwrap_or(0);

        let items = self.repo.list(origin, limit, offset).await?;

        debug!("Listed {} posts", items.len());
        Ok(FeedPage {
            items,
            limit,
            offset,
        })
    }
}
