use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// The compact movie record shared by listings, recommendations and the
/// favorites collection.
///
/// Field names follow the TMDB wire format so listing responses deserialize
/// straight into this type and the persisted favorites stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Full detail record returned by `GET /movie/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub tagline: Option<String>,
    pub status: Option<String>,
}

impl MovieDetail {
    /// Projects the detail record onto the summary that gets persisted as a
    /// favorite.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
            vote_average: self.vote_average,
        }
    }
}

/// TMDB paging envelope used by listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: u32,
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Load state of a single fetched entity in a view.
///
/// `Failed` is the "no data" state and is never conflated with `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(e) => Loadable::Failed(e.to_string()),
        }
    }
}

#[derive(Tabled)]
pub struct MovieTableRow {
    pub id: i64,
    pub title: String,
    pub rating: String,
}

impl From<&MovieSummary> for MovieTableRow {
    fn from(movie: &MovieSummary) -> Self {
        MovieTableRow {
            id: movie.id,
            title: movie.title.clone(),
            rating: crate::utils::format_rating(movie.vote_average),
        }
    }
}
