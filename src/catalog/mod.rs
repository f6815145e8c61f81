//! # Catalog Module
//!
//! Read-only access to the remote movie catalog (TMDB). The rest of the
//! application consumes it through the [`Catalog`] trait so the view
//! controllers can be driven by a fake in tests.
//!
//! ## API Coverage
//!
//! - `GET /movie/{id}` - movie detail
//! - `GET /movie/{id}/recommendations` - recommendations for a movie
//! - `GET /movie/popular` - popular movies, paged
//! - `GET /search/movie` - title search, paged
//!
//! ## Error Handling
//!
//! - `502 Bad Gateway` is retried after a short delay, a bounded number of
//!   times
//! - `429 Too Many Requests` honours `Retry-After` up to two minutes, once
//! - Every other failure is returned as a [`CatalogError`]; callers degrade
//!   the affected view section instead of aborting

mod tmdb;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::{
    config::ConfigError,
    types::{MovieDetail, MovieSummary, Page},
};

pub use tmdb::TmdbClient;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog answered with status {0}")]
    Status(StatusCode),
    #[error("catalog is not configured: {0}")]
    Config(#[from] ConfigError),
}

#[async_trait]
pub trait Catalog: Send + Sync {
    async fn movie(&self, id: i64) -> Result<MovieDetail, CatalogError>;

    async fn recommendations(&self, id: i64) -> Result<Vec<MovieSummary>, CatalogError>;

    async fn popular(&self, page: u32) -> Result<Page<MovieSummary>, CatalogError>;

    async fn search(&self, query: &str, page: u32) -> Result<Page<MovieSummary>, CatalogError>;
}
