use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use utoipa::OpenApi;

use crate::api::rest::{dto, handlers, problem};
use crate::domain::service::PostsService;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::create_post, handlers::get_feed, handlers::get_post),
    components(schemas(
        dto::PostDto,
        dto::CreatePostRequest,
        dto::FeedPageDto,
        problem::Problem,
    )),
    tags((name = "posts", description = "Proximity posts feed"))
)]
struct PostsApiDoc;

/// The module's OpenAPI document.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    PostsApiDoc::openapi()
}

/// Mount the posts routes with the service injected as an extension.
pub fn router(service: Arc<PostsService>) -> Router {
    Router::new()
        .route(
            "/posts",
            get(handlers::get_feed).post(handlers::create_post),
        )
        .route("/posts/{id}", get(handlers::get_post))
        .layer(Extension(service))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_all_operations() {
        let doc = openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/posts"));
        assert!(paths.contains_key("/posts/{id}"));
    }
}
