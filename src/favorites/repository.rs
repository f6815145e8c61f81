use super::{FAVORITES_KEY, FavoritesCollection, FavoritesError};
use crate::{store::KeyValueStore, types::MovieSummary, warning};

const VOTE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// Add, remove and membership operations over the favorites collection.
///
/// The repository holds no copy of the collection; every call goes back to
/// the store. Construct one per store handle and share it (for example
/// behind an `Arc`) between the views that need it.
pub struct FavoritesRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> FavoritesRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, FAVORITES_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the collection, surfacing undecodable data as
    /// [`FavoritesError::Decode`].
    pub async fn try_list(&self) -> Result<FavoritesCollection, FavoritesError> {
        let raw = self.store.get(&self.key).await.map_err(|e| {
            warning!("Failed to read favorites: {}", e);
            FavoritesError::StoreRead(e)
        })?;

        match raw {
            Some(raw) => FavoritesCollection::decode(&raw),
            None => Ok(FavoritesCollection::new()),
        }
    }

    /// Reads the collection. An absent key and an undecodable value both
    /// come back as an empty collection.
    pub async fn list(&self) -> Result<FavoritesCollection, FavoritesError> {
        match self.try_list().await {
            Err(FavoritesError::Decode(e)) => {
                warning!("Stored favorites are unreadable, starting empty: {}", e);
                Ok(FavoritesCollection::new())
            }
            other => other,
        }
    }

    pub async fn contains(&self, id: i64) -> Result<bool, FavoritesError> {
        Ok(self.list().await?.contains(id))
    }

    /// Appends `movie` without checking for an existing entry with the same
    /// id.
    ///
    /// A vote average outside `0..=10` (NaN included) is rejected with
    /// [`FavoritesError::InvalidMovie`] and the store is not touched.
    pub async fn add(&self, movie: MovieSummary) -> Result<(), FavoritesError> {
        if !VOTE_RANGE.contains(&movie.vote_average) {
            warning!(
                "Refusing to save movie {} with vote average {}.",
                movie.id,
                movie.vote_average
            );
            return Err(FavoritesError::InvalidMovie {
                id: movie.id,
                vote_average: movie.vote_average,
            });
        }

        let mut favorites = self.list().await?;
        favorites.push(movie);
        self.write(&favorites).await
    }

    /// Removes every entry with `id`. The collection is rewritten even when
    /// nothing matched.
    pub async fn remove(&self, id: i64) -> Result<(), FavoritesError> {
        let mut favorites = self.list().await?;
        favorites.remove_all(id);
        self.write(&favorites).await
    }

    async fn write(&self, favorites: &FavoritesCollection) -> Result<(), FavoritesError> {
        let encoded = favorites.encode()?;
        self.store.set(&self.key, &encoded).await.map_err(|e| {
            warning!("Failed to write favorites: {}", e);
            FavoritesError::StoreWrite(e)
        })
    }
}
