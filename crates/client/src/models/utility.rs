//! Utility records.

use serde::{Deserialize, Serialize};

use super::Name;

/// A language used for translations of catalog text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: i64,
    pub name: String,
    /// Whether games are published in this language.
    pub official: bool,
    /// Two-letter language code.
    pub iso639: String,
    /// Two-letter country code.
    pub iso3166: String,
    pub names: Vec<Name>,
}
