//! # Favorites Module
//!
//! The locally persisted favorites collection. This is the only part of the
//! application that mutates persisted state.
//!
//! ## Storage Layout
//!
//! The whole collection lives under a single key ([`FAVORITES_KEY`]) as a
//! JSON array of movie summaries:
//!
//! ```text
//! [{"id":5,"title":"X","poster_path":null,"vote_average":7.2}]
//! ```
//!
//! ## Consistency
//!
//! Every mutation is a read-modify-write against the store with no version
//! check, so the last writer wins. Two mutations in flight at the same time
//! can lose one of the updates. Callers that need more must serialize their
//! own mutations.
//!
//! ## Error Recovery
//!
//! - A stored value that fails to decode is treated as an empty collection.
//!   The next successful mutation overwrites it.
//! - Store read and write failures abort the operation and are returned.
//! - A movie whose vote average is not a number in `0..=10` is rejected
//!   before anything is written.

mod collection;
mod repository;

use thiserror::Error;

use crate::store::StoreError;

pub use collection::FavoritesCollection;
pub use repository::FavoritesRepository;

/// The key the favorites collection is stored under.
pub const FAVORITES_KEY: &str = "@FavoriteList";

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("cannot read favorites: {0}")]
    StoreRead(#[source] StoreError),
    #[error("cannot write favorites: {0}")]
    StoreWrite(#[source] StoreError),
    #[error("stored favorites are not a valid encoding: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("cannot encode favorites: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("movie {id} has a vote average of {vote_average}, expected 0 to 10")]
    InvalidMovie { id: i64, vote_average: f64 },
}
