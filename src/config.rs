//! Configuration management for the movie catalog browser.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage the TMDB
//! credentials, endpoint URLs and the location of locally persisted data.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use thiserror::Error;

use crate::Res;

pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_URL: &str = "https://image.tmdb.org/t/p/w200";
pub const DEFAULT_LANGUAGE: &str = "en-US";

const APP_DIR: &str = "moviefav";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Returns the directory holding the `.env` file and the favorites store.
///
/// `MOVIEFAV_DATA_DIR` overrides the platform default:
/// - Linux: `~/.local/share/moviefav`
/// - macOS: `~/Library/Application Support/moviefav`
/// - Windows: `%LOCALAPPDATA%/moviefav`
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var("MOVIEFAV_DATA_DIR") {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the data directory if it doesn't exist. Values already present in
/// the process environment win over the file. A missing `.env` file is not
/// fatal since every key can also come from the environment; it is reported
/// as an error so the caller can warn about it.
///
/// # Errors
///
/// This function will return an error if:
/// - The data directory cannot be created
/// - The `.env` file cannot be read or parsed
///
/// # Example
///
/// ```
/// use moviefav::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration warning: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Res<()> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir).await?;

    let path = dir.join(".env");
    dotenv::from_path(&path).map_err(|e| format!("cannot load {}: {}", path.display(), e))?;
    Ok(())
}

/// Settings the TMDB catalog client needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Base URL of the TMDB v3 API, without trailing slash.
    pub api_url: String,
    /// TMDB API read access token, sent as a bearer token.
    pub access_token: String,
    /// Base URL poster paths get appended to.
    pub image_url: String,
    /// Value of the `language` query parameter.
    pub language: String,
}

impl CatalogConfig {
    /// Reads the catalog settings from the environment.
    ///
    /// # Environment
    ///
    /// - `TMDB_ACCESS_TOKEN` - required
    /// - `TMDB_API_URL` - defaults to [`DEFAULT_API_URL`]
    /// - `TMDB_IMAGE_URL` - defaults to [`DEFAULT_IMAGE_URL`]
    /// - `TMDB_LANGUAGE` - defaults to [`DEFAULT_LANGUAGE`]
    ///
    /// # Security Note
    ///
    /// The access token should be kept confidential and never exposed in logs
    /// or version control.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CatalogConfig::from_env`], reading values through `lookup`.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let access_token =
            var("TMDB_ACCESS_TOKEN").ok_or(ConfigError::Missing("TMDB_ACCESS_TOKEN"))?;

        Ok(Self {
            api_url: var("TMDB_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            access_token,
            image_url: var("TMDB_IMAGE_URL").unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            language: var("TMDB_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        })
    }
}
