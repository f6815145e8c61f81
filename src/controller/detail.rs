use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use thiserror::Error;
use tokio::{sync::Mutex, task::JoinHandle};

use crate::{
    catalog::Catalog,
    favorites::{FavoritesError, FavoritesRepository},
    store::KeyValueStore,
    types::{Loadable, MovieDetail, MovieSummary},
    warning,
};

#[derive(Debug, Error)]
pub enum DetailError {
    #[error("movie {0} has not been loaded yet")]
    MovieNotLoaded(i64),
    #[error(transparent)]
    Favorites(#[from] FavoritesError),
}

/// What the detail screen renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub movie: Loadable<MovieDetail>,
    pub recommendations: Loadable<Vec<MovieSummary>>,
    /// Cached membership. Set from the store on activation and after every
    /// successful toggle; never re-checked before a toggle.
    pub is_favorite: bool,
}

pub struct DetailController<S, C: ?Sized> {
    movie_id: i64,
    favorites: Arc<FavoritesRepository<S>>,
    catalog: Arc<C>,
    state: Arc<Mutex<DetailState>>,
    disposed: Arc<AtomicBool>,
}

impl<S, C> DetailController<S, C>
where
    S: KeyValueStore,
    C: Catalog + ?Sized,
{
    pub fn new(movie_id: i64, favorites: Arc<FavoritesRepository<S>>, catalog: Arc<C>) -> Self {
        Self {
            movie_id,
            favorites,
            catalog,
            state: Arc::new(Mutex::new(DetailState::default())),
            disposed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn movie_id(&self) -> i64 {
        self.movie_id
    }

    /// Loads membership, the movie record and its recommendations.
    ///
    /// The three requests run concurrently and each result is applied as
    /// soon as it resolves, in whatever order that happens. A failed movie
    /// fetch leaves the movie section `Failed`; a failed recommendations
    /// fetch only affects that section.
    ///
    /// A failed membership check is only logged. `is_favorite` keeps the
    /// value from the previous activation or toggle (`false` on a fresh
    /// controller), so it can be stale until the next successful check.
    pub async fn activate(&self) {
        self.apply(|state| {
            state.movie = Loadable::Loading;
            state.recommendations = Loadable::Loading;
        })
        .await;

        let membership = async {
            match self.favorites.contains(self.movie_id).await {
                Ok(is_favorite) => self.apply(|state| state.is_favorite = is_favorite).await,
                Err(e) => warning!(
                    "Cannot check favorite status of movie {}: {}",
                    self.movie_id,
                    e
                ),
            }
        };

        let movie = async {
            let result = self.catalog.movie(self.movie_id).await;
            if let Err(e) = &result {
                warning!("Failed to load movie {}: {}", self.movie_id, e);
            }
            self.apply(|state| state.movie = Loadable::from_result(result))
                .await;
        };

        let recommendations = async {
            let result = self.catalog.recommendations(self.movie_id).await;
            if let Err(e) = &result {
                warning!(
                    "Failed to load recommendations for movie {}: {}",
                    self.movie_id,
                    e
                );
            }
            self.apply(|state| state.recommendations = Loadable::from_result(result))
                .await;
        };

        tokio::join!(membership, movie, recommendations);
    }

    /// Runs [`activate`](Self::activate) on the runtime so the caller can
    /// dispose the view while it is still in flight.
    pub fn spawn_activate(self: &Arc<Self>) -> JoinHandle<()>
    where
        S: 'static,
        C: 'static,
    {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.activate().await })
    }

    /// Flips favorite membership based on the cached flag.
    ///
    /// Returns the new flag. When the store write fails the flag keeps its
    /// previous value and the error is returned. Adding needs the movie
    /// record, so toggling on before it loaded fails with
    /// [`DetailError::MovieNotLoaded`].
    pub async fn toggle(&self) -> Result<bool, DetailError> {
        let (was_favorite, summary) = {
            let state = self.state.lock().await;
            (
                state.is_favorite,
                state.movie.loaded().map(MovieDetail::summary),
            )
        };

        if was_favorite {
            self.favorites.remove(self.movie_id).await?;
            self.apply(|state| state.is_favorite = false).await;
            return Ok(false);
        }

        let summary = summary.ok_or(DetailError::MovieNotLoaded(self.movie_id))?;
        self.favorites.add(summary).await?;
        self.apply(|state| state.is_favorite = true).await;
        Ok(true)
    }

    pub async fn snapshot(&self) -> DetailState {
        self.state.lock().await.clone()
    }

    pub async fn is_favorite(&self) -> bool {
        self.state.lock().await.is_favorite
    }

    /// Tears the view down. Anything resolving afterwards is discarded.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    async fn apply(&self, update: impl FnOnce(&mut DetailState)) {
        if self.is_disposed() {
            return;
        }
        let mut state = self.state.lock().await;
        if self.is_disposed() {
            return;
        }
        update(&mut state);
    }
}
