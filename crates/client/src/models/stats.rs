//! Abilities, natures and stats.

use pokeapi_core::{NamedResourceLink, ResourceLink};
use serde::{Deserialize, Serialize};

use super::{
    BerryFlavor, Description, Effect, Generation, Language, Move, MoveBattleStyle,
    MoveDamageClass, Name, Pokemon, VerboseEffect, VersionGroup,
};

// =============================================================================
// Abilities
// =============================================================================

/// A passive battle effect a pokemon can have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub id: i64,
    pub name: String,
    /// Whether the ability originates from the main series games.
    pub is_main_series: bool,
    pub generation: NamedResourceLink<Generation>,
    pub names: Vec<Name>,
    pub effect_entries: Vec<VerboseEffect>,
    pub effect_changes: Vec<AbilityEffectChange>,
    pub flavor_text_entries: Vec<AbilityFlavorText>,
    pub pokemon: Vec<AbilityPokemon>,
}

/// Effect text from before a version group changed the effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEffectChange {
    pub effect_entries: Vec<Effect>,
    pub version_group: NamedResourceLink<VersionGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityFlavorText {
    pub flavor_text: String,
    pub language: NamedResourceLink<Language>,
    pub version_group: NamedResourceLink<VersionGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityPokemon {
    pub is_hidden: bool,
    pub slot: i64,
    pub pokemon: NamedResourceLink<Pokemon>,
}

// =============================================================================
// Characteristics
// =============================================================================

/// A flavor line shown on the summary screen, derived from the highest IV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristic {
    pub id: i64,
    /// Remainder of the highest IV divided by 5.
    pub gene_modulo: i64,
    /// IVs that produce this characteristic.
    pub possible_values: Vec<i64>,
    pub highest_stat: NamedResourceLink<Stat>,
    pub descriptions: Vec<Description>,
}

// =============================================================================
// Natures
// =============================================================================

/// A nature raises one stat and lowers another.
///
/// Neutral natures raise and lower nothing, so every stat and flavor link is
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nature {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub decreased_stat: Option<NamedResourceLink<Stat>>,
    #[serde(default)]
    pub increased_stat: Option<NamedResourceLink<Stat>>,
    #[serde(default)]
    pub hates_flavor: Option<NamedResourceLink<BerryFlavor>>,
    #[serde(default)]
    pub likes_flavor: Option<NamedResourceLink<BerryFlavor>>,
    pub pokeathlon_stat_changes: Vec<NatureStatChange>,
    pub move_battle_style_preferences: Vec<MoveBattleStylePreference>,
    pub names: Vec<Name>,
}

impl Nature {
    /// Whether the nature leaves every stat unchanged.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        match (&self.increased_stat, &self.decreased_stat) {
            (Some(up), Some(down)) => up.label() == down.label(),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatureStatChange {
    pub max_change: i64,
    pub pokeathlon_stat: NamedResourceLink<PokeathlonStat>,
}

/// How likely a nature is to pick a Battle Palace style, by HP band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveBattleStylePreference {
    pub low_hp_preference: i64,
    pub high_hp_preference: i64,
    pub move_battle_style: NamedResourceLink<MoveBattleStyle>,
}

/// A stat used in Pokéathlon events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokeathlonStat {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub affecting_natures: NaturePokeathlonStatAffectSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturePokeathlonStatAffectSet {
    pub increase: Vec<NaturePokeathlonStatAffect>,
    pub decrease: Vec<NaturePokeathlonStatAffect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturePokeathlonStatAffect {
    pub max_change: i64,
    pub nature: NamedResourceLink<Nature>,
}

// =============================================================================
// Stats
// =============================================================================

/// A battle stat such as attack or speed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub id: i64,
    pub name: String,
    /// Internal index used by the games.
    pub game_index: i64,
    /// Whether the stat only exists within a battle.
    pub is_battle_only: bool,
    pub affecting_moves: MoveStatAffectSets,
    pub affecting_natures: NatureStatAffectSets,
    pub characteristics: Vec<ResourceLink<Characteristic>>,
    /// Damage class this stat relates to; none for hp and the battle-only stats.
    #[serde(default)]
    pub move_damage_class: Option<NamedResourceLink<MoveDamageClass>>,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStatAffectSets {
    pub increase: Vec<MoveStatAffect>,
    pub decrease: Vec<MoveStatAffect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStatAffect {
    /// Stage change, between -6 and 6.
    pub change: i64,
    pub r#move: NamedResourceLink<Move>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatureStatAffectSets {
    pub increase: Vec<NamedResourceLink<Nature>>,
    pub decrease: Vec<NamedResourceLink<Nature>>,
}
