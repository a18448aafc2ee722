//! Nested types shared by many record kinds.
//!
//! None of these are addressable on their own; they only appear embedded in
//! the payload of a top-level record.

use pokeapi_core::{NamedResourceLink, ResourceLink};
use serde::{Deserialize, Serialize};

use super::{
    EncounterConditionValue, EncounterMethod, Generation, Language, Machine, Version,
    VersionGroup,
};

// =============================================================================
// Localized Text
// =============================================================================

/// Localized name of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// Name in the given language.
    pub name: String,
    /// Language of this name.
    pub language: NamedResourceLink<Language>,
}

/// Localized description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// Description text.
    pub description: String,
    /// Language of this description.
    pub language: NamedResourceLink<Language>,
}

/// Localized effect text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// Effect text.
    pub effect: String,
    /// Language of this effect text.
    pub language: NamedResourceLink<Language>,
}

/// Localized effect text with a short summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerboseEffect {
    /// Full effect text.
    pub effect: String,
    /// One-line summary of the effect.
    pub short_effect: String,
    /// Language of this effect text.
    pub language: NamedResourceLink<Language>,
}

/// Flavor text bound to a game version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorText {
    /// Flavor text.
    pub flavor_text: String,
    /// Language of this flavor text.
    pub language: NamedResourceLink<Language>,
    /// Game version this text appears in.
    pub version: NamedResourceLink<Version>,
}

/// Flavor text without a version binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialFlavorText {
    /// Flavor text.
    pub flavor_text: String,
    /// Language of this flavor text.
    pub language: NamedResourceLink<Language>,
}

/// Flavor text bound to a version group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroupFlavorText {
    /// Flavor text.
    pub text: String,
    /// Language of this flavor text.
    pub language: NamedResourceLink<Language>,
    /// Version group this text appears in.
    pub version_group: NamedResourceLink<VersionGroup>,
}

// =============================================================================
// Game Indices
// =============================================================================

/// Internal index of a record within a generation's games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationGameIndex {
    /// Internal game index.
    pub game_index: i64,
    /// Generation the index applies to.
    pub generation: NamedResourceLink<Generation>,
}

/// Internal index of a record within one game version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGameIndex {
    /// Internal game index.
    pub game_index: i64,
    /// Version the index applies to.
    pub version: NamedResourceLink<Version>,
}

/// Machine that teaches a move in a version group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineVersionDetail {
    /// The machine.
    pub machine: ResourceLink<Machine>,
    /// Version group the machine belongs to.
    pub version_group: NamedResourceLink<VersionGroup>,
}

// =============================================================================
// Encounters
// =============================================================================

/// One way of encountering a pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    /// Lowest level the pokemon can be encountered at.
    pub min_level: i64,
    /// Highest level the pokemon can be encountered at.
    pub max_level: i64,
    /// Conditions that must hold for this encounter.
    pub condition_values: Vec<NamedResourceLink<EncounterConditionValue>>,
    /// Percent chance this encounter occurs.
    pub chance: i64,
    /// Method used to trigger the encounter.
    pub method: NamedResourceLink<EncounterMethod>,
}

/// Encounters available in one game version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEncounterDetail {
    /// Game version.
    pub version: NamedResourceLink<Version>,
    /// Total percent chance of all encounters in this version.
    pub max_chance: i64,
    /// Individual encounters.
    pub encounter_details: Vec<Encounter>,
}
