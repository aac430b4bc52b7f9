use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use geosector::GeoPoint;
use uuid::Uuid;

use crate::api::rest::dto::{CreatePostRequest, FeedPageDto, FeedQuery, PostDto};
use crate::api::rest::problem::Problem;
use crate::domain::error::DomainError;
use crate::domain::model::{NewPost, PageRequest};
use crate::domain::service::PostsService;

type ApiResult<T> = Result<T, Problem>;

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 422, description = "Validation error", body = Problem),
        (status = 500, description = "Internal error", body = Problem),
    ),
)]
pub async fn create_post(
    Extension(svc): Extension<Arc<PostsService>>,
    Json(req): Json<CreatePostRequest>,
) -> ApiResult<impl IntoResponse> {
    let location = GeoPoint::new(req.lat, req.lon).map_err(DomainError::from)?;

    let post = svc
        .create_post(NewPost {
            body: req.body,
            media_url: req.media_url,
            location,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(PostDto::from(post))))
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    params(FeedQuery),
    responses(
        (status = 200, description = "Feed page", body = FeedPageDto),
        (status = 422, description = "Validation error", body = Problem),
        (status = 500, description = "Internal error", body = Problem),
    ),
)]
pub async fn get_feed(
    Extension(svc): Extension<Arc<PostsService>>,
    Query(query): Query<FeedQuery>,
) -> ApiResult<Json<FeedPageDto>> {
    let origin = match (query.lat, query.lon) {
        (None, None) => None,
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon).map_err(DomainError::from)?),
        _ => {
            return Err(
                DomainError::validation("lat", "lat and lon must be supplied together").into(),
            )
        }
    };

    let page = svc
        .list_posts(
            origin,
            PageRequest {
                limit: query.limit,
                offset: query.offset,
            },
        )
        .await?;

    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = PostDto),
        (status = 404, description = "Post not found", body = Problem),
        (status = 500, description = "Internal error", body = Problem),
    ),
)]
pub async fn get_post(
    Extension(svc): Extension<Arc<PostsService>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<PostDto>> {
    let post = svc.get_post(id).await?;
    Ok(Json(post.into()))
}
