use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Mutex;

use crate::{
    favorites::{FavoritesCollection, FavoritesRepository},
    store::KeyValueStore,
    types::Loadable,
};

/// Backs the favorites screen.
///
/// Call [`activate`](Self::activate) every time the screen gains focus: the
/// whole collection is re-read and replaces what was shown, so changes made
/// from a detail view show up on return.
pub struct ListController<S> {
    favorites: Arc<FavoritesRepository<S>>,
    state: Arc<Mutex<Loadable<FavoritesCollection>>>,
    disposed: Arc<AtomicBool>,
}

impl<S: KeyValueStore> ListController<S> {
    pub fn new(favorites: Arc<FavoritesRepository<S>>) -> Self {
        Self {
            favorites,
            state: Arc::new(Mutex::new(Loadable::Loading)),
            disposed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn activate(&self) {
        let result = self.favorites.list().await;
        if self.disposed.load(Ordering::SeqCst) {
            return;
        }
        *self.state.lock().await = Loadable::from_result(result);
    }

    pub async fn snapshot(&self) -> Loadable<FavoritesCollection> {
        self.state.lock().await.clone()
    }

    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }
}
