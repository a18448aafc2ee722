//! Core types for the catalog client.
//!
//! This module provides type-safe wrappers for catalog addressing.

pub mod identifier;
pub mod key;
pub mod link;

pub use identifier::Identifier;
pub use key::ResourceKey;
pub use link::{Link, LinkError, NamedResourceLink, ResourceLink, parse_address};
