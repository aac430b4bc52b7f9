use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use geosector::GeoPoint;
use uuid::Uuid;

use crate::config::PostsConfig;
use crate::domain::error::DomainError;
use crate::domain::model::{NewPost, PageRequest, Post};
use crate::domain::repo::PostsRepository;
use crate::domain::service::PostsService;

#[derive(Default)]
struct MockRepository {
    stored: Mutex<Vec<Post>>,
    list_result: Vec<Post>,
    last_list_call: Mutex<Option<(Option<GeoPoint>, u64, u64)>>,
}

#[async_trait]
impl PostsRepository for MockRepository {
    async fn insert(&self, post: Post) -> Result<Post, DomainError> {
        self.stored.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        Ok(self
            .stored
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list(
        &self,
        origin: Option<GeoPoint>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Post>, DomainError> {
        *self.last_list_call.lock().unwrap() = Some((origin, limit, offset));
        Ok(self.list_result.clone())
    }
}

fn sample_post(body: &str) -> Post {
    Post {
        id: Uuid::now_v7(),
        body: body.to_owned(),
        media_url: None,
        location: GeoPoint::new(52.5, 13.4).unwrap(),
        created_at: Utc::now(),
        sector: None,
    }
}

fn new_post(body: &str) -> NewPost {
    NewPost {
        body: body.to_owned(),
        media_url: None,
        location: GeoPoint::new(52.5, 13.4).unwrap(),
    }
}

#[tokio::test]
async fn create_post_assigns_id_and_timestamp() {
    let repo = Arc::new(MockRepository::default());
    let service = PostsService::new(repo.clone(), PostsConfig::default());

    let before = Utc::now();
    let created = service.create_post(new_post("hello out there")).await.unwrap();

    assert!(!created.id.is_nil());
    assert!(created.created_at >= before);
    assert_eq!(created.body, "hello out there");
    assert_eq!(repo.stored.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn create_post_trims_and_rejects_empty_body() {
    let repo = Arc::new(MockRepository::default());
    let service = PostsService::new(repo, PostsConfig::default());

    let err = service.create_post(new_post("   ")).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "body"));
}

#[tokio::test]
async fn create_post_rejects_oversized_body() {
    let repo = Arc::new(MockRepository::default());
    let service = PostsService::new(
        repo,
        PostsConfig {
            max_body_len: 8,
            ..PostsConfig::default()
        },
    );

    let err = service.create_post(new_post("way past the cap")).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "body"));
}

#[tokio::test]
async fn get_post_maps_missing_to_not_found() {
    let repo = Arc::new(MockRepository::default());
    let service = PostsService::new(repo, PostsConfig::default());

    let err = service.get_post(Uuid::now_v7()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound));
}

#[tokio::test]
async fn get_post_returns_stored() {
    let repo = Arc::new(MockRepository::default());
    let service = PostsService::new(repo.clone(), PostsConfig::default());

    let created = service.create_post(new_post("still here")).await.unwrap();
    let fetched = service.get_post(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_posts_clamps_limit_and_defaults_offset() {
    let repo = Arc::new(MockRepository {
        list_result: vec![sample_post("a"), sample_post("b")],
        ..MockRepository::default()
    });
    let service = PostsService::new(repo.clone(), PostsConfig::default());

    let page = service
        .list_posts(
            None,
            PageRequest {
                limit: Some(10_000),
                offset: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.limit, 100);
    assert_eq!(page.offset, 0);

    let call = repo.last_list_call.lock().unwrap().unwrap();
    assert_eq!(call, (None, 100, 0));
}

#[tokio::test]
async fn list_posts_passes_origin_through() {
    let repo = Arc::new(MockRepository::default());
    let service = PostsService::new(repo.clone(), PostsConfig::default());

    let origin = GeoPoint::new(-33.86, 151.2).unwrap();
    service
        .list_posts(Some(origin), PageRequest::default())
        .await
        .unwrap();

    let call = repo.last_list_call.lock().unwrap().unwrap();
    assert_eq!(call.0, Some(origin));
    assert_eq!(call.1, 25);
}
