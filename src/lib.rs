//! Movie Catalog Browser Library
//!
//! This library provides the pieces of a small TMDB catalog browser: a remote
//! catalog client, a locally persisted favorites collection, and the thin view
//! controllers that reconcile the two for the detail and favorites screens.
//!
//! # Modules
//!
//! - `catalog` - TMDB Web API client and the `Catalog` fetch capability
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `controller` - Detail and list view controllers
//! - `favorites` - Favorites repository and its serialized format
//! - `store` - Asynchronous key-value stores (file backed and in memory)
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use moviefav::{favorites::FavoritesRepository, store::MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> moviefav::Res<()> {
//!     let favorites = FavoritesRepository::new(MemoryStore::new());
//!     assert!(favorites.list().await?.is_empty());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod controller;
pub mod favorites;
pub mod store;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use moviefav::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for status updates that are part of the normal command output.
///
/// # Example
///
/// ```
/// info!("Loading favorites...");
/// info!("Found {} movies", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Added {} to favorites", title);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message to stderr with a red exclamation mark and exits
/// the program with code 1.
///
/// Only the CLI layer uses this. Library code reports recoverable failures
/// with [`warning!`] and returns the error to its caller.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message to stderr with a yellow exclamation mark.
///
/// This is the log channel for failures that were recovered at a component
/// boundary: unreadable favorites, failed store writes, failed catalog
/// fetches. Going to stderr keeps table output on stdout clean.
///
/// # Example
///
/// ```
/// warning!("Stored favorites are unreadable, starting empty");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
