//! Repository round-trips against in-memory SQLite.
//!
//! SQLite has no PostGIS, so these tests cover the storage schema, the
//! insert/get paths and the unanchored (pure recency) feed; the anchored
//! feed's SQL shape is pinned by unit tests against the Postgres builder.

use std::sync::Arc;

use chrono::{Duration, Utc};
use geosector::{GeoPoint, SectorSpec};
use posts::infra::storage::migrations::Migrator;
use posts::infra::storage::sea_orm_repo::SeaOrmPostsRepository;
use posts::{NewPost, PageRequest, Post, PostsConfig, PostsRepository, PostsService};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

async fn connect() -> DatabaseConnection {
    let conn = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&conn, None).await.unwrap();
    conn
}

fn spec() -> SectorSpec {
    SectorSpec::new(100.0, 4326).unwrap()
}

fn post_minutes_ago(minutes: i64, body: &str) -> Post {
    Post {
        id: Uuid::now_v7(),
        body: body.to_owned(),
        media_url: None,
        location: GeoPoint::new(52.5, 13.4).unwrap(),
        created_at: Utc::now() - Duration::minutes(minutes),
        sector: None,
    }
}

#[tokio::test]
async fn insert_then_get_round_trips() {
    let conn = connect().await;
    let repo = SeaOrmPostsRepository::new(conn, spec());

    let post = post_minutes_ago(5, "hello from the park");
    let inserted = repo.insert(post.clone()).await.unwrap();
    assert_eq!(inserted.id, post.id);

    let fetched = repo.get(post.id).await.unwrap().unwrap();
    assert_eq!(fetched.body, "hello from the park");
    assert_eq!(fetched.location.lat(), 52.5);
    assert_eq!(fetched.sector, None);
}

#[tokio::test]
async fn get_missing_returns_none() {
    let conn = connect().await;
    let repo = SeaOrmPostsRepository::new(conn, spec());

    assert!(repo.get(Uuid::now_v7()).await.unwrap().is_none());
}

#[tokio::test]
async fn unanchored_feed_is_reverse_chronological() {
    let conn = connect().await;
    let repo = SeaOrmPostsRepository::new(conn, spec());

    for (minutes, body) in [(30, "oldest"), (10, "middle"), (1, "newest")] {
        repo.insert(post_minutes_ago(minutes, body)).await.unwrap();
    }

    let items = repo.list(None, 10, 0).await.unwrap();
    let bodies: Vec<&str> = items.iter().map(|p| p.body.as_str()).collect();
    assert_eq!(bodies, ["newest", "middle", "oldest"]);
    assert!(items.iter().all(|p| p.sector.is_none()));
}

#[tokio::test]
async fn feed_respects_limit_and_offset() {
    let conn = connect().await;
    let repo = SeaOrmPostsRepository::new(conn, spec());

    for minutes in 1..=5 {
        repo.insert(post_minutes_ago(minutes, &format!("post-{minutes}")))
            .await
            .unwrap();
    }

    let page = repo.list(None, 2, 1).await.unwrap();
    let bodies: Vec<&str> = page.iter().map(|p| p.body.as_str()).collect();
    assert_eq!(bodies, ["post-2", "post-3"]);
}

#[tokio::test]
async fn service_create_then_fetch_through_storage() {
    let conn = connect().await;
    let repo = Arc::new(SeaOrmPostsRepository::new(conn, spec()));
    let service = PostsService::new(repo, PostsConfig::default());

    let created = service
        .create_post(NewPost {
            body: "  fresh off the press  ".to_owned(),
            media_url: Some("https://cdn.example/x.jpg".to_owned()),
            location: GeoPoint::new(-33.86, 151.2).unwrap(),
        })
        .await
        .unwrap();

    // Body arrives trimmed and the id is fetchable.
    assert_eq!(created.body, "fresh off the press");
    let fetched = service.get_post(created.id).await.unwrap();
    assert_eq!(fetched.media_url.as_deref(), Some("https://cdn.example/x.jpg"));

    let page = service
        .list_posts(None, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.limit, 25);
}
