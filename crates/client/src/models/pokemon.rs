//! Pokemon, their forms and where to find them.

use pokeapi_core::NamedResourceLink;
use serde::{Deserialize, Serialize};

use super::{
    Ability, Generation, Item, LocationArea, Move, MoveLearnMethod, Name, PokemonSpecies, Stat,
    Type, Version, VersionEncounterDetail, VersionGameIndex, VersionGroup,
};

// =============================================================================
// Pokemon
// =============================================================================

/// One battle-ready variety of a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    /// Experience gained for defeating this pokemon.
    #[serde(default)]
    pub base_experience: Option<i64>,
    /// Height in decimetres.
    pub height: i64,
    /// Whether this is the default variety of its species.
    pub is_default: bool,
    /// Sort order; families are grouped together.
    pub order: i64,
    /// Weight in hectograms.
    pub weight: i64,
    pub abilities: Vec<PokemonAbility>,
    pub forms: Vec<NamedResourceLink<PokemonForm>>,
    pub game_indices: Vec<VersionGameIndex>,
    pub held_items: Vec<PokemonHeldItem>,
    /// Address of this pokemon's encounter list.
    pub location_area_encounters: String,
    pub moves: Vec<PokemonMove>,
    pub past_types: Vec<PokemonTypePast>,
    pub sprites: PokemonSprites,
    pub species: NamedResourceLink<PokemonSpecies>,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
}

impl Pokemon {
    /// Type labels ordered by slot.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        let mut types: Vec<&PokemonType> = self.types.iter().collect();
        types.sort_by_key(|t| t.slot);
        types.into_iter().map(|t| t.r#type.label()).collect()
    }

    /// Base value of a stat, looked up by the stat's label (e.g. `"speed"`).
    #[must_use]
    pub fn base_stat(&self, stat: &str) -> Option<i64> {
        self.stats
            .iter()
            .find(|s| s.stat.label() == stat)
            .map(|s| s.base_stat)
    }

    /// Abilities, excluding hidden ones, ordered by slot.
    #[must_use]
    pub fn visible_abilities(&self) -> Vec<&NamedResourceLink<Ability>> {
        let mut abilities: Vec<&PokemonAbility> =
            self.abilities.iter().filter(|a| !a.is_hidden).collect();
        abilities.sort_by_key(|a| a.slot);
        abilities.into_iter().map(|a| &a.ability).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub is_hidden: bool,
    pub slot: i64,
    pub ability: NamedResourceLink<Ability>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: i64,
    pub r#type: NamedResourceLink<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonFormType {
    pub slot: i64,
    pub r#type: NamedResourceLink<Type>,
}

/// Types a pokemon had up to a given generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypePast {
    /// Last generation with these types.
    pub generation: NamedResourceLink<Generation>,
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonHeldItem {
    pub item: NamedResourceLink<Item>,
    pub version_details: Vec<PokemonHeldItemVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonHeldItemVersion {
    pub version: NamedResourceLink<Version>,
    pub rarity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMove {
    pub r#move: NamedResourceLink<Move>,
    pub version_group_details: Vec<PokemonMoveVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMoveVersion {
    pub move_learn_method: NamedResourceLink<MoveLearnMethod>,
    pub version_group: NamedResourceLink<VersionGroup>,
    pub level_learned_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub stat: NamedResourceLink<Stat>,
    /// Effort points gained for defeating this pokemon.
    pub effort: i64,
    pub base_stat: i64,
}

/// Sprite URLs; any of them may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub front_female: Option<String>,
    #[serde(default)]
    pub front_shiny_female: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub back_female: Option<String>,
    #[serde(default)]
    pub back_shiny_female: Option<String>,
}

// =============================================================================
// Encounters
// =============================================================================

/// A location area where a pokemon can be encountered.
///
/// Returned as a list by the `pokemon/{id}/encounters` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAreaEncounter {
    pub location_area: NamedResourceLink<LocationArea>,
    pub version_details: Vec<VersionEncounterDetail>,
}

// =============================================================================
// Forms
// =============================================================================

/// A cosmetic or battle form of a pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonForm {
    pub id: i64,
    pub name: String,
    pub order: i64,
    /// Sort order among the forms of one species.
    pub form_order: i64,
    pub is_default: bool,
    pub is_battle_only: bool,
    pub is_mega: bool,
    /// Form name without the species; empty for the default form.
    pub form_name: String,
    pub pokemon: NamedResourceLink<Pokemon>,
    pub types: Vec<PokemonFormType>,
    pub sprites: PokemonFormSprites,
    pub version_group: NamedResourceLink<VersionGroup>,
    pub names: Vec<Name>,
    pub form_names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonFormSprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
}
