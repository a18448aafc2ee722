//! Unresolved references between catalog records.
//!
//! The catalog cross-references records by URL, either as a bare address
//! (`{"url": "..."}`) or with a display name (`{"name": "...", "url": "..."}`).
//! A link only names its target; turning it into a record requires a client.
//!
//! Every canonical address has the shape `.../{resource_kind}/{id}/`, and the
//! kind and identifier are read positionally from the two segments in front
//! of the trailing slash.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Identifier;

/// Errors that can occur when reading a link address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The address does not end in `{kind}/{id}/`.
    #[error("Malformed resource address: {0}")]
    Malformed(String),
}

/// Split an address into its resource kind and identifier.
///
/// One trailing slash is optional; `.../berry/7/` and `.../berry/7` both
/// yield `("berry", 7)`. Sub-resource addresses such as
/// `.../pokemon/1/encounters` are read the same way and yield kind `1`.
///
/// # Errors
///
/// Returns `LinkError::Malformed` if fewer than two non-empty segments
/// precede the trailing slash.
pub fn parse_address(address: &str) -> Result<(&str, Identifier), LinkError> {
    let trimmed = address.strip_suffix('/').unwrap_or(address);
    let mut segments = trimmed.rsplit('/');

    let identifier = segments.next().filter(|s| !s.is_empty());
    let kind = segments.next().filter(|s| !s.is_empty());

    match (kind, identifier) {
        (Some(kind), Some(identifier)) => Ok((kind, Identifier::parse(identifier))),
        _ => Err(LinkError::Malformed(address.to_string())),
    }
}

/// Common surface of resource links.
pub trait Link {
    /// Record type the link points at.
    type Target;

    /// Full address of the referenced record.
    fn address(&self) -> &str;

    /// Resource kind and identifier parsed from the address.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::Malformed` if the address is not canonical.
    fn target(&self) -> Result<(&str, Identifier), LinkError> {
        parse_address(self.address())
    }

    /// Resource kind of the referenced record.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::Malformed` if the address is not canonical.
    fn kind(&self) -> Result<&str, LinkError> {
        self.target().map(|(kind, _)| kind)
    }

    /// Identifier of the referenced record.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::Malformed` if the address is not canonical.
    fn identifier(&self) -> Result<Identifier, LinkError> {
        self.target().map(|(_, identifier)| identifier)
    }
}

// =============================================================================
// ResourceLink
// =============================================================================

/// Address-only link to a record of type `T`.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ResourceLink<T> {
    #[serde(rename = "url")]
    address: String,
    #[serde(skip)]
    target: PhantomData<fn() -> T>,
}

impl<T> ResourceLink<T> {
    /// Create a link from an address.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            target: PhantomData,
        }
    }
}

impl<T> Link for ResourceLink<T> {
    type Target = T;

    fn address(&self) -> &str {
        &self.address
    }
}

impl<T> Clone for ResourceLink<T> {
    fn clone(&self) -> Self {
        Self::new(self.address.clone())
    }
}

impl<T> PartialEq for ResourceLink<T> {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl<T> Eq for ResourceLink<T> {}

impl<T> Hash for ResourceLink<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl<T> fmt::Debug for ResourceLink<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceLink")
            .field("url", &self.address)
            .finish()
    }
}

// =============================================================================
// NamedResourceLink
// =============================================================================

/// Link to a record of type `T` carrying a display label.
///
/// The label is whatever name the catalog embedded at the time of the
/// referencing payload; it is not guaranteed to match the target's name.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct NamedResourceLink<T> {
    #[serde(rename = "name")]
    label: String,
    #[serde(rename = "url")]
    address: String,
    #[serde(skip)]
    target: PhantomData<fn() -> T>,
}

impl<T> NamedResourceLink<T> {
    /// Create a named link.
    #[must_use]
    pub fn new(label: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            address: address.into(),
            target: PhantomData,
        }
    }

    /// Display label of the referenced record.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Drop the label, keeping only the address.
    #[must_use]
    pub fn to_unnamed(&self) -> ResourceLink<T> {
        ResourceLink::new(self.address.clone())
    }
}

impl<T> Link for NamedResourceLink<T> {
    type Target = T;

    fn address(&self) -> &str {
        &self.address
    }
}

impl<T> Clone for NamedResourceLink<T> {
    fn clone(&self) -> Self {
        Self::new(self.label.clone(), self.address.clone())
    }
}

impl<T> PartialEq for NamedResourceLink<T> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.address == other.address
    }
}

impl<T> Eq for NamedResourceLink<T> {}

impl<T> Hash for NamedResourceLink<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
        self.address.hash(state);
    }
}

impl<T> fmt::Debug for NamedResourceLink<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedResourceLink")
            .field("name", &self.label)
            .field("url", &self.address)
            .finish()
    }
}
