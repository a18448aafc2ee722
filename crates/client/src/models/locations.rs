//! Locations, areas and regions.

use pokeapi_core::NamedResourceLink;
use serde::{Deserialize, Serialize};

use super::{
    EncounterMethod, Generation, GenerationGameIndex, Name, Pokedex, Pokemon, PokemonSpecies,
    Version, VersionEncounterDetail, VersionGroup,
};

/// A place in the games: a town, a route, a cave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub region: Option<NamedResourceLink<Region>>,
    pub names: Vec<Name>,
    pub game_indices: Vec<GenerationGameIndex>,
    pub areas: Vec<NamedResourceLink<LocationArea>>,
}

/// A section of a location with its own encounters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationArea {
    pub id: i64,
    pub name: String,
    pub game_index: i64,
    pub encounter_method_rates: Vec<EncounterMethodRate>,
    pub location: NamedResourceLink<Location>,
    pub names: Vec<Name>,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterMethodRate {
    pub encounter_method: NamedResourceLink<EncounterMethod>,
    pub version_details: Vec<EncounterVersionDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterVersionDetails {
    /// Chance of an encounter to occur.
    pub rate: i64,
    pub version: NamedResourceLink<Version>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResourceLink<Pokemon>,
    pub version_details: Vec<VersionEncounterDetail>,
}

/// An area of Pal Park, the Gen IV transfer minigame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalParkArea {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_encounters: Vec<PalParkEncounterSpecies>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalParkEncounterSpecies {
    pub base_score: i64,
    pub rate: i64,
    pub pokemon_species: NamedResourceLink<PokemonSpecies>,
}

/// An organized area of the pokemon world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
    pub locations: Vec<NamedResourceLink<Location>>,
    pub names: Vec<Name>,
    pub main_generation: NamedResourceLink<Generation>,
    pub pokedexes: Vec<NamedResourceLink<Pokedex>>,
    pub version_groups: Vec<NamedResourceLink<VersionGroup>>,
}
