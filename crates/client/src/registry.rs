//! Fetcher Registry: resource kind name to fetch operation.
//!
//! Link resolution only knows a kind name and an identifier, both parsed
//! from an address. The registry turns the name into the matching typed
//! fetch, erased to return an untyped [`Record`].

use std::collections::HashMap;

use futures::future::BoxFuture;
use pokeapi_core::Identifier;

use crate::client::Client;
use crate::error::CatalogError;
use crate::resources::{Record, Resource, registry_entries};

/// Fetch operation for one kind, going through the client's cache.
pub type Fetcher =
    for<'a> fn(&'a Client, Identifier) -> BoxFuture<'a, Result<Option<Record>, CatalogError>>;

/// Typed fetch of `T`, erased to an untyped record.
pub(crate) fn fetch_record<T: Resource>(
    client: &Client,
    id: Identifier,
) -> BoxFuture<'_, Result<Option<Record>, CatalogError>> {
    Box::pin(async move { Ok(client.fetch::<T>(id).await?.map(Resource::into_record)) })
}

/// Map from kind name to fetcher.
#[derive(Clone)]
pub struct FetcherRegistry {
    fetchers: HashMap<&'static str, Fetcher>,
}

impl FetcherRegistry {
    /// Registry with one entry per declared resource kind.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fetchers: registry_entries().into_iter().collect(),
        }
    }

    /// Fetcher for a kind name.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<Fetcher> {
        self.fetchers.get(kind).copied()
    }

    /// Whether a kind name has a fetcher.
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.fetchers.contains_key(kind)
    }

    /// Registered kind names, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<_> = self.fetchers.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fetchers.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fetchers.is_empty()
    }
}

impl Default for FetcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FetcherRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetcherRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceKind;

    #[test]
    fn test_every_kind_registered() {
        let registry = FetcherRegistry::new();
        assert_eq!(registry.len(), ResourceKind::ALL.len());
        for kind in ResourceKind::ALL {
            assert!(registry.contains(kind.as_str()), "missing {kind}");
        }
    }

    #[test]
    fn test_unregistered_kind() {
        let registry = FetcherRegistry::new();
        assert!(registry.get("widget").is_none());
        assert!(!registry.contains("pokemon-encounters"));
    }

    #[test]
    fn test_kinds_sorted() {
        let kinds = FetcherRegistry::new().kinds();
        assert_eq!(kinds.first(), Some(&"ability"));
        assert_eq!(kinds.last(), Some(&"version-group"));
    }
}
