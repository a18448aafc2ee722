//! Catalog client: memoizing fetch and link resolution.
//!
//! Every fetch goes through the client's [`CacheStore`] under the key
//! `{kind}/{identifier}`. The first call for a key asks the transport and
//! stores the outcome, including "not found"; every later call is answered
//! from the cache without network access. Failures are returned to the
//! caller and not stored, so the next call tries again.

use std::sync::Arc;

use pokeapi_core::{Identifier, Link, ResourceKey, parse_address};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::cache::{CacheStore, CacheValue};
use crate::config::ClientConfig;
use crate::decode::{Decode, DecodeError};
use crate::error::{CatalogError, TransportError};
use crate::models::LocationAreaEncounter;
use crate::registry::FetcherRegistry;
use crate::resources::{Record, Resource, ResourceKind};
use crate::transport::{HttpTransport, Transport};

/// Key namespace for per-pokemon encounter lists.
const ENCOUNTERS_NAMESPACE: &str = "pokemon-encounters";

// =============================================================================
// Client
// =============================================================================

/// Typed, memoizing client for the catalog.
///
/// Cloning is cheap; clones share one cache, transport and registry.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    cache: CacheStore,
    registry: FetcherRegistry,
}

impl Client {
    /// Create a client that talks to the configured catalog over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Create a client over an arbitrary transport.
    #[must_use]
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport: Arc::new(transport),
                cache: CacheStore::new(),
                registry: FetcherRegistry::new(),
            }),
        }
    }

    /// The cache backing this client.
    #[must_use]
    pub fn cache(&self) -> &CacheStore {
        &self.inner.cache
    }

    /// The registry used for link resolution.
    #[must_use]
    pub fn registry(&self) -> &FetcherRegistry {
        &self.inner.registry
    }

    /// Return the cached value for `key`, fetching and storing it on a miss.
    ///
    /// Concurrent misses on one key share a single transport call.
    #[instrument(skip(self, path, decode), fields(key = %key))]
    async fn memoize(
        &self,
        key: ResourceKey,
        path: String,
        decode: fn(Value) -> Result<CacheValue, DecodeError>,
    ) -> Result<CacheValue, CatalogError> {
        if let Some(value) = self.inner.cache.get(&key).await {
            debug!("Cache hit");
            return Ok(value);
        }

        debug!("Cache miss");
        let transport = Arc::clone(&self.inner.transport);
        self.inner
            .cache
            .get_or_try_insert_with(key, async move {
                match transport.get(&path).await? {
                    Some(payload) => Ok(decode(payload)?),
                    None => Ok(CacheValue::Absent),
                }
            })
            .await
    }

    // =========================================================================
    // Typed Fetch
    // =========================================================================

    /// Fetch a record of type `T` by id or name.
    ///
    /// Returns `Ok(None)` if the catalog has no such record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the transport fails or the payload does not
    /// decode as `T`.
    pub async fn fetch<T: Resource>(
        &self,
        id: impl Into<Identifier>,
    ) -> Result<Option<T>, CatalogError> {
        let id = id.into();
        let key = ResourceKey::new(T::KIND.as_str(), &id);
        let path = key.as_str().to_string();

        match self.memoize(key, path, decode_record::<T>).await? {
            CacheValue::Record(record) => T::from_record(record).map(Some).map_err(|found| {
                CatalogError::KindMismatch {
                    expected: T::KIND.as_str(),
                    found: found.kind().as_str(),
                }
            }),
            CacheValue::Absent => Ok(None),
            CacheValue::Encounters(_) => Err(CatalogError::KindMismatch {
                expected: T::KIND.as_str(),
                found: ENCOUNTERS_NAMESPACE,
            }),
        }
    }

    /// Fetch a record of a kind chosen at runtime.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnregisteredKind` if the kind has no fetcher,
    /// or any error of the underlying fetch.
    pub async fn fetch_kind(
        &self,
        kind: ResourceKind,
        id: impl Into<Identifier>,
    ) -> Result<Option<Record>, CatalogError> {
        self.dispatch(kind.as_str(), id.into()).await
    }

    /// Encounter locations of a pokemon.
    ///
    /// An unknown pokemon yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the transport fails or the payload does not
    /// decode.
    #[instrument(skip(self, id))]
    pub async fn get_pokemon_encounters(
        &self,
        id: impl Into<Identifier>,
    ) -> Result<Vec<LocationAreaEncounter>, CatalogError> {
        let id = id.into();
        let key = ResourceKey::new(ENCOUNTERS_NAMESPACE, &id);
        let path = format!("{}/{id}/encounters", ResourceKind::Pokemon);

        match self.memoize(key, path, decode_encounters).await? {
            CacheValue::Encounters(encounters) => Ok(encounters),
            CacheValue::Absent => Ok(Vec::new()),
            CacheValue::Record(record) => Err(CatalogError::KindMismatch {
                expected: ENCOUNTERS_NAMESPACE,
                found: record.kind().as_str(),
            }),
        }
    }

    // =========================================================================
    // Link Resolution
    // =========================================================================

    /// Resolve a link to its record.
    ///
    /// Resolving the same link twice costs one transport call; the second
    /// resolution is answered from the cache.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Link` for a malformed address,
    /// `CatalogError::UnregisteredKind` if the address names a kind without a
    /// fetcher, `CatalogError::KindMismatch` if the record is not an
    /// `L::Target`, or any error of the underlying fetch.
    pub async fn resolve<L>(&self, link: &L) -> Result<Option<L::Target>, CatalogError>
    where
        L: Link + Sync,
        L::Target: Resource,
    {
        let Some(record) = self.resolve_address(link.address()).await? else {
            return Ok(None);
        };

        L::Target::from_record(record)
            .map(Some)
            .map_err(|found| CatalogError::KindMismatch {
                expected: L::Target::KIND.as_str(),
                found: found.kind().as_str(),
            })
    }

    /// Resolve a bare address such as `https://pokeapi.co/api/v2/berry/7/`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Link` for a malformed address,
    /// `CatalogError::UnregisteredKind` if the address names a kind without a
    /// fetcher, or any error of the underlying fetch.
    #[instrument(skip(self), fields(address = %address))]
    pub async fn resolve_address(&self, address: &str) -> Result<Option<Record>, CatalogError> {
        let (kind, id) = parse_address(address)?;
        self.dispatch(kind, id).await
    }

    async fn dispatch(&self, kind: &str, id: Identifier) -> Result<Option<Record>, CatalogError> {
        let Some(fetcher) = self.inner.registry.get(kind) else {
            error!(kind = %kind, "No fetcher registered for resource kind");
            return Err(CatalogError::UnregisteredKind(kind.to_string()));
        };

        debug!(kind = %kind, id = %id, "Dispatching to registered fetcher");
        fetcher(self, id).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("cache", &self.inner.cache)
            .field("registry", &self.inner.registry)
            .finish_non_exhaustive()
    }
}

fn decode_record<T: Resource>(payload: Value) -> Result<CacheValue, DecodeError> {
    T::decode(payload).map(|record| CacheValue::Record(record.into_record()))
}

fn decode_encounters(payload: Value) -> Result<CacheValue, DecodeError> {
    LocationAreaEncounter::decode_list(payload).map(CacheValue::Encounters)
}
