//! Record identifiers.
//!
//! Every catalog record can be addressed by its numeric id, and most also by
//! their name. The two forms are deliberately kept apart: `25` and `pikachu`
//! name the same pokemon but produce different keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric id or name of a catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// Numeric record id (e.g. `25`).
    Id(i64),
    /// Record name (e.g. `pikachu`).
    Name(String),
}

impl Identifier {
    /// Parse a path segment.
    ///
    /// A segment in canonical decimal form becomes [`Identifier::Id`];
    /// anything else (including `007`) stays a name so its text is preserved.
    #[must_use]
    pub fn parse(segment: &str) -> Self {
        match segment.parse::<i64>() {
            Ok(id) if id.to_string() == segment => Self::Id(id),
            _ => Self::Name(segment.to_string()),
        }
    }

    /// Get the numeric id, if this identifier is one.
    #[must_use]
    pub const fn as_id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Name(_) => None,
        }
    }

    /// Get the name, if this identifier is one.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<i32> for Identifier {
    fn from(id: i32) -> Self {
        Self::Id(i64::from(id))
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Self::Id(i64::from(id))
    }
}

impl From<&str> for Identifier {
    fn from(segment: &str) -> Self {
        Self::parse(segment)
    }
}

impl From<String> for Identifier {
    fn from(segment: String) -> Self {
        Self::parse(&segment)
    }
}

impl From<&String> for Identifier {
    fn from(segment: &String) -> Self {
        Self::parse(segment)
    }
}

impl From<&Self> for Identifier {
    fn from(identifier: &Self) -> Self {
        identifier.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_segment() {
        assert_eq!(Identifier::parse("25"), Identifier::Id(25));
    }

    #[test]
    fn test_parse_name_segment() {
        assert_eq!(
            Identifier::parse("pikachu"),
            Identifier::Name("pikachu".to_string())
        );
    }

    #[test]
    fn test_parse_keeps_non_canonical_digits_as_name() {
        let identifier = Identifier::parse("007");
        assert_eq!(identifier, Identifier::Name("007".to_string()));
        assert_eq!(identifier.to_string(), "007");
    }

    #[test]
    fn test_parse_negative_canonical_segment() {
        assert_eq!(Identifier::parse("-5"), Identifier::Id(-5));
        assert_eq!(Identifier::parse("+5"), Identifier::Name("+5".to_string()));
    }

    #[test]
    fn test_display_matches_segment() {
        assert_eq!(Identifier::from(7).to_string(), "7");
        assert_eq!(Identifier::from("mr-mime").to_string(), "mr-mime");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Identifier::from(1).as_id(), Some(1));
        assert_eq!(Identifier::from(1).as_name(), None);
        assert_eq!(Identifier::from("bulbasaur").as_name(), Some("bulbasaur"));
    }

    #[test]
    fn test_serde_untagged() {
        let id: Identifier = serde_json::from_str("12").unwrap();
        assert_eq!(id, Identifier::Id(12));
        assert_eq!(
            serde_json::to_string(&Identifier::from("ditto")).unwrap(),
            "\"ditto\""
        );
    }
}
