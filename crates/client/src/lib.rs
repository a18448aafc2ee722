//! PokeAPI Client - typed, memoizing access to the catalog.
//!
//! Records are fetched by kind and id or name, decoded into typed structs and
//! memoized per client. Records reference each other through resource links,
//! which the client resolves through a registry of per-kind fetchers.
//!
//! # Example
//!
//! ```rust,ignore
//! use pokeapi_client::{Client, ClientConfig};
//!
//! let client = Client::new(&ClientConfig::from_env()?)?;
//! if let Some(pikachu) = client.get_pokemon("pikachu").await? {
//!     let species = client.resolve(&pikachu.species).await?;
//! }
//! ```
//!
//! # Modules
//!
//! - [`client`] - Memoizing fetch and link resolution
//! - [`cache`] - Per-client store of fetch outcomes
//! - [`registry`] - Resource kind to fetcher mapping
//! - [`resources`] - Resource kinds and generated typed operations
//! - [`transport`] - Raw JSON retrieval over HTTP
//! - [`decode`] - JSON to record decoding
//! - [`models`] - Record schemas

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cache;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod models;
pub mod registry;
pub mod resources;
pub mod transport;

pub use cache::{CacheStore, CacheValue};
pub use client::Client;
pub use config::{ClientConfig, ConfigError};
pub use decode::{Decode, DecodeError};
pub use error::{CatalogError, TransportError};
pub use registry::{Fetcher, FetcherRegistry};
pub use resources::{Record, Resource, ResourceKind};
pub use transport::{HttpTransport, Transport};

pub use pokeapi_core::{
    Identifier, Link, LinkError, NamedResourceLink, ResourceKey, ResourceLink, parse_address,
};
