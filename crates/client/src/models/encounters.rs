//! Wild encounter metadata.

use pokeapi_core::NamedResourceLink;
use serde::{Deserialize, Serialize};

use super::Name;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterMethod {
    pub id: i64,
    pub name: String,
    /// Sort position among encounter methods.
    pub order: i64,
    pub names: Vec<Name>,
}

/// A condition that affects which pokemon appear (time of day, season, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterCondition {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub values: Vec<NamedResourceLink<EncounterConditionValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterConditionValue {
    pub id: i64,
    pub name: String,
    pub condition: NamedResourceLink<EncounterCondition>,
    pub names: Vec<Name>,
}
