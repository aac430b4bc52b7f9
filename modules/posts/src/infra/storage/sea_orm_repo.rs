use async_trait::async_trait;
use geosector::{GeoColumns, GeoPoint, SectorOrderExt, SectorSpec};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult, QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::Post;
use crate::domain::repo::PostsRepository;

use super::entity::{self, Entity as PostsEntity};

const GEO_COLS: GeoColumns<PostsEntity> = GeoColumns {
    lat: entity::Column::Lat,
    lon: entity::Column::Lon,
    created_at: entity::Column::CreatedAt,
};

pub struct SeaOrmPostsRepository {
    conn: DatabaseConnection,
    sector: SectorSpec,
}

impl SeaOrmPostsRepository {
    #[must_use]
    pub fn new(conn: DatabaseConnection, sector: SectorSpec) -> Self {
        Self { conn, sector }
    }
}

/// Feed row: the entity columns plus the query-time sector annotation.
#[derive(Debug, FromQueryResult)]
pub(crate) struct PostRow {
    pub(crate) id: Uuid,
    pub(crate) body: String,
    pub(crate) media_url: Option<String>,
    pub(crate) lat: f64,
    pub(crate) lon: f64,
    pub(crate) created_at: sea_orm::prelude::DateTimeUtc,
    pub(crate) sector: Option<i64>,
}

impl PostRow {
    pub(crate) fn into_post(self) -> Result<Post, DomainError> {
        let location = GeoPoint::new(self.lat, self.lon)
            .map_err(|e| DomainError::database(format!("stored coordinates invalid: {e}")))?;
        Ok(Post {
            id: self.id,
            body: self.body,
            media_url: self.media_url,
            location,
            created_at: self.created_at,
            sector: self.sector,
        })
    }
}

pub(crate) fn model_to_post(model: entity::Model) -> Result<Post, DomainError> {
    let location = GeoPoint::new(model.lat, model.lon)
        .map_err(|e| DomainError::database(format!("stored coordinates invalid: {e}")))?;
    Ok(Post {
        id: model.id,
        body: model.body,
        media_url: model.media_url,
        location,
        created_at: model.created_at,
        sector: None,
    })
}

#[async_trait]
impl PostsRepository for SeaOrmPostsRepository {
    async fn insert(&self, post: Post) -> Result<Post, DomainError> {
        let active = entity::ActiveModel {
            id: Set(post.id),
            body: Set(post.body),
            media_url: Set(post.media_url),
            lat: Set(post.location.lat()),
            lon: Set(post.location.lon()),
            created_at: Set(post.created_at),
        };

        let inserted = active.insert(&self.conn).await?;
        model_to_post(inserted)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let found = PostsEntity::find_by_id(id).one(&self.conn).await?;
        found.map(model_to_post).transpose()
    }

    async fn list(
        &self,
        origin: Option<GeoPoint>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Post>, DomainError> {
        let rows = PostsEntity::find()
            .order_by_sector(&self.sector, origin.as_ref(), &GEO_COLS)
            .limit(limit)
            .offset(offset)
            .into_model::<PostRow>()
            .all(&self.conn)
            .await?;

        rows.into_iter().map(PostRow::into_post).collect()
    }
}
