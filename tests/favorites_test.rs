use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use moviefav::favorites::{FAVORITES_KEY, FavoritesCollection, FavoritesError, FavoritesRepository};
use moviefav::store::{KeyValueStore, MemoryStore, StoreError};
use moviefav::types::MovieSummary;
use tokio::sync::Barrier;

// Helper function to create a test movie
fn movie(id: i64, title: &str, poster_path: Option<&str>, vote_average: f64) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        poster_path: poster_path.map(str::to_string),
        vote_average,
    }
}

fn seeded(movies: Vec<MovieSummary>) -> FavoritesRepository<MemoryStore> {
    let raw = FavoritesCollection::from(movies).encode().unwrap();
    FavoritesRepository::new(MemoryStore::with_value(FAVORITES_KEY, &raw))
}

/// Store whose reads and writes can be switched to fail.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("read refused".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("write refused".to_string()));
        }
        self.inner.set(key, value).await
    }
}

/// Store that holds every reader until two reads are in flight.
struct InterleavingStore {
    inner: Arc<MemoryStore>,
    barrier: Barrier,
}

#[async_trait]
impl KeyValueStore for InterleavingStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self.inner.get(key).await;
        self.barrier.wait().await;
        value
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.set(key, value).await
    }
}

#[test]
fn test_round_trip() {
    let collections = vec![
        FavoritesCollection::new(),
        FavoritesCollection::from(vec![movie(5, "X", None, 7.2)]),
        FavoritesCollection::from(vec![
            movie(1, "Amélie", Some("/a.jpg"), 0.1 + 0.2),
            movie(2, "\"Quoted\" \\ title", None, 10.0),
            movie(1, "Amélie", Some("/a.jpg"), 0.0),
            movie(i64::MAX, "", Some(""), 6.123456789012345),
        ]),
    ];

    for collection in collections {
        let encoded = collection.encode().unwrap();
        assert_eq!(FavoritesCollection::decode(&encoded).unwrap(), collection);
    }
}

#[test]
fn test_encoded_format() {
    let collection = FavoritesCollection::from(vec![movie(5, "X", None, 7.2)]);
    let value: serde_json::Value = serde_json::from_str(&collection.encode().unwrap()).unwrap();

    assert_eq!(
        value,
        serde_json::json!([{"id": 5, "title": "X", "poster_path": null, "vote_average": 7.2}])
    );
}

#[test]
fn test_decode_accepts_extra_fields() {
    let raw = r#"[{"id":3,"title":"T","poster_path":"/p.jpg","vote_average":8,"overview":"extra"}]"#;
    let collection = FavoritesCollection::decode(raw).unwrap();
    assert_eq!(collection.as_slice(), &[movie(3, "T", Some("/p.jpg"), 8.0)]);
}

#[test]
fn test_decode_rejects_invalid_values() {
    for raw in ["not-json", "{}", r#"[{"id":"1"}]"#, ""] {
        assert!(matches!(
            FavoritesCollection::decode(raw),
            Err(FavoritesError::Decode(_))
        ));
    }
}

#[tokio::test]
async fn test_empty_store_bootstrap() {
    let repo = FavoritesRepository::new(MemoryStore::new());
    assert!(repo.list().await.unwrap().is_empty());
    assert!(!repo.contains(1).await.unwrap());
}

#[tokio::test]
async fn test_add_to_empty_store() {
    let repo = FavoritesRepository::new(MemoryStore::new());
    let x = movie(5, "X", None, 7.2);

    repo.add(x.clone()).await.unwrap();

    assert!(repo.contains(5).await.unwrap());
    assert_eq!(repo.list().await.unwrap().as_slice(), &[x]);
}

#[tokio::test]
async fn test_add_keeps_insertion_order_and_duplicates() {
    let repo = FavoritesRepository::new(MemoryStore::new());
    repo.add(movie(2, "B", None, 5.0)).await.unwrap();
    repo.add(movie(1, "A", None, 6.0)).await.unwrap();
    repo.add(movie(2, "B", None, 5.0)).await.unwrap();

    let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![2, 1, 2]);
}

#[tokio::test]
async fn test_remove_scenario() {
    let repo = seeded(vec![movie(1, "One", None, 6.0), movie(2, "Two", None, 7.0)]);

    repo.remove(1).await.unwrap();

    assert_eq!(
        repo.list().await.unwrap().as_slice(),
        &[movie(2, "Two", None, 7.0)]
    );
}

#[tokio::test]
async fn test_remove_drops_all_duplicates() {
    let repo = seeded(vec![
        movie(1, "One", None, 6.0),
        movie(2, "Two", None, 7.0),
        movie(1, "One", None, 6.0),
    ]);

    repo.remove(1).await.unwrap();

    assert!(!repo.contains(1).await.unwrap());
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_remove_absent_id_leaves_collection_unchanged() {
    let movies = vec![movie(1, "One", None, 6.0), movie(2, "Two", Some("/t.jpg"), 7.0)];
    let repo = seeded(movies.clone());

    repo.remove(42).await.unwrap();

    assert_eq!(repo.list().await.unwrap().into_inner(), movies);
}

#[tokio::test]
async fn test_remove_on_empty_store_writes_empty_collection() {
    let repo = FavoritesRepository::new(MemoryStore::new());
    repo.remove(1).await.unwrap();

    assert_eq!(
        repo.store().get(FAVORITES_KEY).await.unwrap().as_deref(),
        Some("[]")
    );
}

#[tokio::test]
async fn test_corrupt_data_recovery() {
    let repo = FavoritesRepository::new(MemoryStore::with_value(FAVORITES_KEY, "not-json"));

    assert!(repo.list().await.unwrap().is_empty());
    assert!(matches!(repo.try_list().await, Err(FavoritesError::Decode(_))));
    assert!(!repo.contains(1).await.unwrap());

    // the next mutation replaces the corrupt value
    repo.add(movie(7, "Seven", None, 8.1)).await.unwrap();
    assert_eq!(repo.try_list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_custom_key() {
    let repo = FavoritesRepository::with_key(MemoryStore::new(), "other");
    repo.add(movie(1, "One", None, 6.0)).await.unwrap();

    assert!(repo.store().get(FAVORITES_KEY).await.unwrap().is_none());
    assert!(repo.store().get("other").await.unwrap().is_some());
}

#[tokio::test]
async fn test_failed_write_leaves_store_untouched() {
    let store = FlakyStore::default();
    let repo = FavoritesRepository::new(store);
    repo.add(movie(1, "One", None, 6.0)).await.unwrap();

    repo.store().fail_writes.store(true, Ordering::SeqCst);
    let added = repo.add(movie(2, "Two", None, 7.0)).await;
    let removed = repo.remove(1).await;

    assert!(matches!(added, Err(FavoritesError::StoreWrite(_))));
    assert!(matches!(removed, Err(FavoritesError::StoreWrite(_))));

    repo.store().fail_writes.store(false, Ordering::SeqCst);
    assert_eq!(
        repo.list().await.unwrap().as_slice(),
        &[movie(1, "One", None, 6.0)]
    );
}

#[tokio::test]
async fn test_invalid_vote_average_is_rejected_before_writing() {
    let repo = FavoritesRepository::new(MemoryStore::new());
    repo.add(movie(1, "One", None, 7.0)).await.unwrap();
    let before = repo.store().get(FAVORITES_KEY).await.unwrap();

    for vote_average in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 10.5, -0.1] {
        let added = repo.add(movie(2, "Two", None, vote_average)).await;
        assert!(
            matches!(added, Err(FavoritesError::InvalidMovie { id: 2, .. })),
            "{vote_average} was accepted"
        );
        assert_eq!(repo.store().get(FAVORITES_KEY).await.unwrap(), before);
    }

    repo.add(movie(3, "Three", None, 10.0)).await.unwrap();
    let ids: Vec<i64> = repo.try_list().await.unwrap().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_encode_rejects_non_finite_vote_average() {
    let favorites = FavoritesCollection::from(vec![
        movie(1, "One", None, 7.0),
        movie(2, "Two", None, f64::NAN),
    ]);

    assert!(matches!(
        favorites.encode(),
        Err(FavoritesError::InvalidMovie { id: 2, .. })
    ));
}

#[tokio::test]
async fn test_failed_read_aborts_operations() {
    let repo = FavoritesRepository::new(FlakyStore::default());
    repo.store().fail_reads.store(true, Ordering::SeqCst);

    assert!(matches!(repo.list().await, Err(FavoritesError::StoreRead(_))));
    assert!(matches!(repo.contains(1).await, Err(FavoritesError::StoreRead(_))));
    assert!(matches!(
        repo.add(movie(1, "One", None, 6.0)).await,
        Err(FavoritesError::StoreRead(_))
    ));

    repo.store().fail_reads.store(false, Ordering::SeqCst);
    assert!(repo.store().inner.get(FAVORITES_KEY).await.unwrap().is_none());
}

// Concurrent mutations are not serialized: both adds read the empty
// collection before either writes, so the second write wins.
#[tokio::test]
async fn test_concurrent_adds_lose_an_update() {
    let inner = Arc::new(MemoryStore::new());
    let repo = FavoritesRepository::new(InterleavingStore {
        inner: Arc::clone(&inner),
        barrier: Barrier::new(2),
    });

    let (a, b) = tokio::join!(
        repo.add(movie(1, "One", None, 6.0)),
        repo.add(movie(2, "Two", None, 7.0))
    );
    a.unwrap();
    b.unwrap();

    let after = FavoritesRepository::new(inner).list().await.unwrap();
    assert_eq!(after.len(), 1);
}
