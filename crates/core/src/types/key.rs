//! Cache keys for catalog records.

use std::fmt;

use serde::Serialize;

use super::Identifier;

/// Lookup key for one catalog record: `"<resource-kind>/<identifier>"`.
///
/// The key is derived from the kind and the identifier's text alone, so a
/// record fetched by id and by name occupies two keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceKey(String);

impl ResourceKey {
    /// Build the key for `kind` and `identifier`.
    #[must_use]
    pub fn new(kind: &str, identifier: &Identifier) -> Self {
        Self(format!("{kind}/{identifier}"))
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        let key = ResourceKey::new("pokemon", &Identifier::from(25));
        assert_eq!(key.as_str(), "pokemon/25");
    }

    #[test]
    fn test_id_and_name_keys_differ() {
        let by_id = ResourceKey::new("pokemon", &Identifier::from(25));
        let by_name = ResourceKey::new("pokemon", &Identifier::from("pikachu"));
        assert_ne!(by_id, by_name);
    }

    #[test]
    fn test_key_is_stable() {
        let a = ResourceKey::new("berry-firmness", &Identifier::from("soft"));
        let b = ResourceKey::new("berry-firmness", &Identifier::parse("soft"));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "berry-firmness/soft");
    }
}
