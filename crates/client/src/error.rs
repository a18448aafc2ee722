//! Errors raised by the catalog client.
//!
//! Absence of a record is not an error: operations return `Ok(None)` for it,
//! and that outcome is cached. Everything in this module propagates to the
//! caller and is never cached.
//!
//! Errors are `Clone` so that every caller coalesced onto one in-flight fetch
//! receives the same failure. Sources that are not `Clone` are held in `Arc`.

use std::sync::Arc;

use pokeapi_core::LinkError;
use thiserror::Error;

use crate::decode::DecodeError;

/// Errors that can occur while talking to the catalog over the network.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// HTTP request failed (connection, DNS, timeout).
    #[error("HTTP error: {0}")]
    Http(Arc<reqwest::Error>),

    /// The catalog answered with a status that does not mean "absent".
    #[error("Unexpected status {status} for {path}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Catalog path that was requested.
        path: String,
    },

    /// Rate limited by the catalog.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(Arc<serde_json::Error>),

    /// Request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(Arc::new(err))
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(Arc::new(err))
    }
}

/// Errors returned by catalog client operations.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The transport failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// A 200 payload did not match the record schema.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A link address could not be parsed.
    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    /// A link points at a resource kind with no registered fetcher.
    #[error("No fetcher registered for resource kind: {0}")]
    UnregisteredKind(String),

    /// A resource kind name is not part of the catalog.
    #[error("Unknown resource kind: {0}")]
    UnknownKind(String),

    /// A resolved record is not of the type the caller asked for.
    #[error("Expected a {expected} record, got {found}")]
    KindMismatch {
        /// Kind the caller asked for.
        expected: &'static str,
        /// Kind that was found.
        found: &'static str,
    },
}

impl CatalogError {
    /// Whether this error indicates a client defect rather than a catalog or
    /// network condition.
    ///
    /// Fatal errors mean the resource registry or a typed link disagrees with
    /// the catalog's addressing; retrying cannot succeed.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::UnregisteredKind(_) | Self::KindMismatch { .. })
    }
}
