//! Moves and move metadata.

use pokeapi_core::{NamedResourceLink, ResourceLink};
use serde::{Deserialize, Serialize};

use super::{
    AbilityEffectChange, ContestEffect, ContestType, Description, Generation, Language,
    MachineVersionDetail, Name, Pokemon, Stat, SuperContestEffect, Type, VerboseEffect,
    VersionGroup,
};

/// A skill pokemon use in battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub id: i64,
    pub name: String,
    /// Percent chance to hit; status moves that cannot miss have none.
    #[serde(default)]
    pub accuracy: Option<i64>,
    /// Percent chance the secondary effect happens.
    #[serde(default)]
    pub effect_chance: Option<i64>,
    /// Power points.
    #[serde(default)]
    pub pp: Option<i64>,
    /// Between -8 and 8; higher priority moves go first.
    pub priority: i64,
    #[serde(default)]
    pub power: Option<i64>,
    #[serde(default)]
    pub contest_combos: Option<ContestComboSets>,
    #[serde(default)]
    pub contest_type: Option<NamedResourceLink<ContestType>>,
    #[serde(default)]
    pub contest_effect: Option<ResourceLink<ContestEffect>>,
    pub damage_class: NamedResourceLink<MoveDamageClass>,
    pub effect_entries: Vec<VerboseEffect>,
    pub effect_changes: Vec<AbilityEffectChange>,
    pub learned_by_pokemon: Vec<NamedResourceLink<Pokemon>>,
    pub flavor_text_entries: Vec<MoveFlavorText>,
    pub generation: NamedResourceLink<Generation>,
    pub machines: Vec<MachineVersionDetail>,
    #[serde(default)]
    pub meta: Option<MoveMetaData>,
    pub names: Vec<Name>,
    pub past_values: Vec<PastMoveStatValues>,
    pub stat_changes: Vec<MoveStatChange>,
    #[serde(default)]
    pub super_contest_effect: Option<ResourceLink<SuperContestEffect>>,
    pub target: NamedResourceLink<MoveTarget>,
    pub r#type: NamedResourceLink<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestComboSets {
    #[serde(default)]
    pub normal: Option<ContestComboDetail>,
    #[serde(default, rename = "super")]
    pub super_contest: Option<ContestComboDetail>,
}

/// Moves that combo with this one in contests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestComboDetail {
    #[serde(default)]
    pub use_before: Option<Vec<NamedResourceLink<Move>>>,
    #[serde(default)]
    pub use_after: Option<Vec<NamedResourceLink<Move>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveFlavorText {
    pub flavor_text: String,
    pub language: NamedResourceLink<Language>,
    pub version_group: NamedResourceLink<VersionGroup>,
}

/// Battle metadata of a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveMetaData {
    pub ailment: NamedResourceLink<MoveAilment>,
    pub category: NamedResourceLink<MoveCategory>,
    #[serde(default)]
    pub min_hits: Option<i64>,
    #[serde(default)]
    pub max_hits: Option<i64>,
    #[serde(default)]
    pub min_turns: Option<i64>,
    #[serde(default)]
    pub max_turns: Option<i64>,
    /// HP drain (positive) or recoil (negative), in percent of damage dealt.
    pub drain: i64,
    /// HP restored, in percent of the user's max HP.
    pub healing: i64,
    pub crit_rate: i64,
    pub ailment_chance: i64,
    pub flinch_chance: i64,
    pub stat_chance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStatChange {
    pub change: i64,
    pub stat: NamedResourceLink<Stat>,
}

/// Values a move had before a version group changed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastMoveStatValues {
    #[serde(default)]
    pub accuracy: Option<i64>,
    #[serde(default)]
    pub effect_chance: Option<i64>,
    #[serde(default)]
    pub power: Option<i64>,
    #[serde(default)]
    pub pp: Option<i64>,
    pub effect_entries: Vec<VerboseEffect>,
    #[serde(default)]
    pub r#type: Option<NamedResourceLink<Type>>,
    pub version_group: NamedResourceLink<VersionGroup>,
}

/// A status condition caused by moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAilment {
    pub id: i64,
    pub name: String,
    pub moves: Vec<NamedResourceLink<Move>>,
    pub names: Vec<Name>,
}

/// A style used in the Battle Palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveBattleStyle {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCategory {
    pub id: i64,
    pub name: String,
    pub moves: Vec<NamedResourceLink<Move>>,
    pub descriptions: Vec<Description>,
}

/// Physical, special or status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDamageClass {
    pub id: i64,
    pub name: String,
    pub descriptions: Vec<Description>,
    pub moves: Vec<NamedResourceLink<Move>>,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLearnMethod {
    pub id: i64,
    pub name: String,
    pub descriptions: Vec<Description>,
    pub names: Vec<Name>,
    pub version_groups: Vec<NamedResourceLink<VersionGroup>>,
}

/// Who a move can hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTarget {
    pub id: i64,
    pub name: String,
    pub descriptions: Vec<Description>,
    pub moves: Vec<NamedResourceLink<Move>>,
    pub names: Vec<Name>,
}
