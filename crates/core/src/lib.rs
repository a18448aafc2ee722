//! PokeAPI Core - Shared catalog types.
//!
//! This crate provides the types every layer of the catalog client agrees on:
//! - `pokeapi-client` - Transport, cache, registry and typed records
//! - `pokeapi-cli` - Command-line access to the catalog
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no caching,
//! no HTTP clients. Resolving a link into a record is the client's job.
//!
//! # Modules
//!
//! - [`types`] - Identifiers, resource keys and resource links

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
