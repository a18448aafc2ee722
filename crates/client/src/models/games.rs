//! Generations, pokedexes, versions and version groups.

use pokeapi_core::NamedResourceLink;
use serde::{Deserialize, Serialize};

use super::{Ability, Description, Move, MoveLearnMethod, Name, PokemonSpecies, Region, Type};

/// A grouping of games by the pokemon they include.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub id: i64,
    pub name: String,
    /// Abilities introduced in this generation.
    pub abilities: Vec<NamedResourceLink<Ability>>,
    pub names: Vec<Name>,
    pub main_region: NamedResourceLink<Region>,
    /// Moves introduced in this generation.
    pub moves: Vec<NamedResourceLink<Move>>,
    /// Species introduced in this generation.
    pub pokemon_species: Vec<NamedResourceLink<PokemonSpecies>>,
    /// Types introduced in this generation.
    pub types: Vec<NamedResourceLink<Type>>,
    pub version_groups: Vec<NamedResourceLink<VersionGroup>>,
}

/// A handheld pokedex and the species it lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokedex {
    pub id: i64,
    pub name: String,
    pub is_main_series: bool,
    pub descriptions: Vec<Description>,
    pub names: Vec<Name>,
    pub pokemon_entries: Vec<PokemonEntry>,
    /// Region the pokedex covers; national dexes have none.
    #[serde(default)]
    pub region: Option<NamedResourceLink<Region>>,
    pub version_groups: Vec<NamedResourceLink<VersionGroup>>,
}

/// A species' position in a pokedex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEntry {
    pub entry_number: i64,
    pub pokemon_species: NamedResourceLink<PokemonSpecies>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub version_group: NamedResourceLink<VersionGroup>,
}

/// Versions that share almost all data (e.g. Red and Blue).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroup {
    pub id: i64,
    pub name: String,
    /// Release order among version groups.
    pub order: i64,
    pub generation: NamedResourceLink<Generation>,
    pub move_learn_methods: Vec<NamedResourceLink<MoveLearnMethod>>,
    pub pokedexes: Vec<NamedResourceLink<Pokedex>>,
    pub regions: Vec<NamedResourceLink<Region>>,
    pub versions: Vec<NamedResourceLink<Version>>,
}
