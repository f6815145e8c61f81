use serde::{Deserialize, Serialize};

use super::FavoritesError;
use crate::types::MovieSummary;

/// Insertion-ordered list of favorite movies.
///
/// Duplicate ids are allowed here; the repository decides whether to
/// prevent them (it doesn't).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesCollection(Vec<MovieSummary>);

impl FavoritesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(raw: &str) -> Result<Self, FavoritesError> {
        serde_json::from_str(raw).map_err(FavoritesError::Decode)
    }

    /// Fails with [`FavoritesError::InvalidMovie`] on a non-finite vote
    /// average, which JSON would store as `null` and [`decode`] would reject.
    ///
    /// [`decode`]: FavoritesCollection::decode
    pub fn encode(&self) -> Result<String, FavoritesError> {
        if let Some(movie) = self.0.iter().find(|m| !m.vote_average.is_finite()) {
            return Err(FavoritesError::InvalidMovie {
                id: movie.id,
                vote_average: movie.vote_average,
            });
        }
        serde_json::to_string(self).map_err(FavoritesError::Encode)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.0.iter().any(|m| m.id == id)
    }

    pub fn push(&mut self, movie: MovieSummary) {
        self.0.push(movie);
    }

    /// Drops every entry with the given id and returns how many were removed.
    pub fn remove_all(&mut self, id: i64) -> usize {
        let before = self.0.len();
        self.0.retain(|m| m.id != id);
        before - self.0.len()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieSummary> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[MovieSummary] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<MovieSummary> {
        self.0
    }
}

impl From<Vec<MovieSummary>> for FavoritesCollection {
    fn from(movies: Vec<MovieSummary>) -> Self {
        Self(movies)
    }
}

impl<'a> IntoIterator for &'a FavoritesCollection {
    type Item = &'a MovieSummary;
    type IntoIter = std::slice::Iter<'a, MovieSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
