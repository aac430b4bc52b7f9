//! Posts module: a proximity feed over PostGIS.
//!
//! Posts are immutable once written (a creation timestamp and a location,
//! plus the message itself). The one interesting read path is the feed:
//! given a reference point, posts are bucketed into distance sectors and
//! ordered by (sector asc, created_at desc); without a point the feed is
//! plain reverse-chronological.

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

pub use config::PostsConfig;
pub use domain::error::DomainError;
pub use domain::model::{NewPost, PageRequest, Post};
pub use domain::repo::PostsRepository;
pub use domain::service::PostsService;
