//! # CLI Module
//!
//! User-facing commands. Each command wires the file backed favorites
//! repository and the TMDB client into the controllers and renders the
//! resulting view state as text.
//!
//! ## Commands
//!
//! - [`popular`] - popular movies from the catalog
//! - [`search`] - title search in the catalog
//! - [`detail`] - one movie with recommendations and favorite status
//! - [`favorite`] - toggle favorite status of one movie
//! - [`favorites`] - the locally stored favorites
//!
//! ## Usage
//!
//! ```bash
//! moviefav popular --page 2
//! moviefav search "blade runner"
//! moviefav detail 78
//! moviefav favorite 78
//! moviefav favorites
//! ```

mod browse;
mod detail;
mod favorites;

use std::sync::Arc;

use crate::{
    catalog::TmdbClient,
    error,
    favorites::FavoritesRepository,
    store::FileStore,
};

pub use browse::{popular, search};
pub use detail::{detail, favorite};
pub use favorites::favorites;

fn favorites_repository() -> Arc<FavoritesRepository<FileStore>> {
    Arc::new(FavoritesRepository::new(FileStore::default_location()))
}

fn catalog_client() -> Arc<TmdbClient> {
    match TmdbClient::from_env() {
        Ok(client) => Arc::new(client),
        Err(e) => error!(
            "Cannot set up the catalog client. Add TMDB_ACCESS_TOKEN to your .env\n Error: {}",
            e
        ),
    }
}
