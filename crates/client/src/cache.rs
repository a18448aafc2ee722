//! Cache Store: memoized fetch outcomes keyed by resource key.
//!
//! The store never evicts. Catalog data is immutable for the lifetime of a
//! client, so a value written once stays valid until the client is dropped.

use std::future::Future;

use moka::future::Cache;
use pokeapi_core::ResourceKey;

use crate::error::CatalogError;
use crate::models::LocationAreaEncounter;
use crate::resources::Record;

/// Cached outcome of a fetch.
#[derive(Debug, Clone)]
pub enum CacheValue {
    /// A decoded record.
    Record(Record),
    /// Encounter list of one pokemon.
    Encounters(Vec<LocationAreaEncounter>),
    /// The catalog reported the key as not found.
    Absent,
}

impl CacheValue {
    /// Whether this is a cached "not found".
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Per-client store of fetch outcomes.
///
/// Cloning is cheap and clones share the same entries.
#[derive(Clone)]
pub struct CacheStore {
    entries: Cache<ResourceKey, CacheValue>,
}

impl CacheStore {
    /// Create an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().build(),
        }
    }

    /// Look up a key without side effects.
    pub async fn get(&self, key: &ResourceKey) -> Option<CacheValue> {
        self.entries.get(key).await
    }

    /// Store a value, overwriting any previous one.
    pub async fn put(&self, key: ResourceKey, value: CacheValue) {
        self.entries.insert(key, value).await;
    }

    /// Whether a value is stored for `key`.
    #[must_use]
    pub fn contains(&self, key: &ResourceKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored entries.
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    /// Whether nothing is stored yet.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Return the stored value for `key`, or run `init` and store its result.
    ///
    /// Concurrent callers for the same key share a single run of `init`. If
    /// `init` fails, nothing is stored and every waiting caller gets the
    /// error; the next call runs `init` again.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `init`.
    pub async fn get_or_try_insert_with<F>(
        &self,
        key: ResourceKey,
        init: F,
    ) -> Result<CacheValue, CatalogError>
    where
        F: Future<Output = Result<CacheValue, CatalogError>>,
    {
        self.entries
            .try_get_with(key, init)
            .await
            .map_err(|err| (*err).clone())
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pokeapi_core::Identifier;

    use super::*;
    use crate::error::TransportError;

    fn key(kind: &str, id: impl Into<Identifier>) -> ResourceKey {
        ResourceKey::new(kind, &id.into())
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = CacheStore::new();
        assert!(store.get(&key("berry", 1)).await.is_none());

        store.put(key("berry", 1), CacheValue::Absent).await;

        assert!(store.get(&key("berry", 1)).await.unwrap().is_absent());
        assert!(store.contains(&key("berry", 1)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = CacheStore::new();
        store.put(key("pokemon-encounters", 1), CacheValue::Absent).await;
        store
            .put(key("pokemon-encounters", 1), CacheValue::Encounters(Vec::new()))
            .await;

        assert!(matches!(
            store.get(&key("pokemon-encounters", 1)).await,
            Some(CacheValue::Encounters(list)) if list.is_empty()
        ));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_id_and_name_are_distinct_keys() {
        let store = CacheStore::new();
        store.put(key("pokemon", 25), CacheValue::Absent).await;

        assert!(!store.contains(&key("pokemon", "pikachu")));
    }

    #[tokio::test]
    async fn test_init_runs_once_per_key() {
        let store = CacheStore::new();
        let runs = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let runs = Arc::clone(&runs);
            store
                .get_or_try_insert_with(key("berry", 9999), async move {
                    runs.fetch_add(1, Ordering::SeqCst);
                    Ok(CacheValue::Absent)
                })
                .await
                .unwrap();
        }

        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_errors_are_not_stored() {
        let store = CacheStore::new();

        let err = store
            .get_or_try_insert_with(key("berry", 1), async {
                Err(CatalogError::from(TransportError::RateLimited(5)))
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Transport(TransportError::RateLimited(5))
        ));
        assert!(!store.contains(&key("berry", 1)));
        assert!(store.is_empty().await);
    }
}
