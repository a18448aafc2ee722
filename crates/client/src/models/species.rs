//! Species and the groupings species belong to.

use pokeapi_core::{NamedResourceLink, ResourceLink};
use serde::{Deserialize, Serialize};

use super::{
    Description, EvolutionChain, FlavorText, Generation, Language, Name, PalParkArea, Pokedex,
    Pokemon,
};

// =============================================================================
// Species
// =============================================================================

/// The shared identity behind one or more pokemon varieties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: i64,
    pub name: String,
    pub order: i64,
    /// Chance of being female in eighths; -1 for genderless.
    pub gender_rate: i64,
    /// Base capture rate, up to 255.
    pub capture_rate: i64,
    pub base_happiness: i64,
    pub is_baby: bool,
    pub is_legendary: bool,
    pub is_mythical: bool,
    /// Egg cycles needed to hatch.
    pub hatch_counter: i64,
    pub has_gender_differences: bool,
    pub forms_switchable: bool,
    pub growth_rate: NamedResourceLink<GrowthRate>,
    pub pokedex_numbers: Vec<PokemonSpeciesDexEntry>,
    pub egg_groups: Vec<NamedResourceLink<EggGroup>>,
    pub color: NamedResourceLink<PokemonColor>,
    #[serde(default)]
    pub shape: Option<NamedResourceLink<PokemonShape>>,
    #[serde(default)]
    pub evolves_from_species: Option<NamedResourceLink<Self>>,
    pub evolution_chain: ResourceLink<EvolutionChain>,
    #[serde(default)]
    pub habitat: Option<NamedResourceLink<PokemonHabitat>>,
    pub generation: NamedResourceLink<Generation>,
    pub names: Vec<Name>,
    pub pal_park_encounters: Vec<PalParkEncounterArea>,
    pub flavor_text_entries: Vec<FlavorText>,
    pub form_descriptions: Vec<Description>,
    pub genera: Vec<Genus>,
    pub varieties: Vec<PokemonSpeciesVariety>,
}

impl PokemonSpecies {
    /// The default variety of this species.
    #[must_use]
    pub fn default_variety(&self) -> Option<&NamedResourceLink<Pokemon>> {
        self.varieties
            .iter()
            .find(|v| v.is_default)
            .map(|v| &v.pokemon)
    }

    /// Whether the species has no gender.
    #[must_use]
    pub const fn is_genderless(&self) -> bool {
        self.gender_rate < 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpeciesVariety {
    pub is_default: bool,
    pub pokemon: NamedResourceLink<Pokemon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalParkEncounterArea {
    pub base_score: i64,
    pub rate: i64,
    pub area: NamedResourceLink<PalParkArea>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpeciesDexEntry {
    pub entry_number: i64,
    pub pokedex: NamedResourceLink<Pokedex>,
}

/// Localized genus, e.g. "Seed Pokémon".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResourceLink<Language>,
}

// =============================================================================
// Groupings
// =============================================================================

/// Body color used to sort species in the Pokédex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonColor {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedResourceLink<PokemonSpecies>>,
}

/// Where a species can be found in the wild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonHabitat {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedResourceLink<PokemonSpecies>>,
}

/// Body shape used to sort species in the Pokédex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonShape {
    pub id: i64,
    pub name: String,
    pub awesome_names: Vec<AwesomeName>,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedResourceLink<PokemonSpecies>>,
}

/// The "scientific" name of a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwesomeName {
    pub awesome_name: String,
    pub language: NamedResourceLink<Language>,
}

/// Species that can breed with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggGroup {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedResourceLink<PokemonSpecies>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gender {
    pub id: i64,
    pub name: String,
    pub pokemon_species_details: Vec<PokemonSpeciesGender>,
    /// Species that need this gender to evolve.
    pub required_for_evolution: Vec<NamedResourceLink<PokemonSpecies>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpeciesGender {
    /// Chance of being female in eighths; -1 for genderless.
    pub rate: i64,
    pub pokemon_species: NamedResourceLink<PokemonSpecies>,
}

/// How fast a species gains levels through experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthRate {
    pub id: i64,
    pub name: String,
    /// LaTeX formula for the experience needed per level.
    pub formula: String,
    pub descriptions: Vec<Description>,
    pub levels: Vec<GrowthRateExperienceLevel>,
    pub pokemon_species: Vec<NamedResourceLink<PokemonSpecies>>,
}

impl GrowthRate {
    /// Experience needed to reach a level.
    #[must_use]
    pub fn experience_for(&self, level: i64) -> Option<i64> {
        self.levels
            .iter()
            .find(|l| l.level == level)
            .map(|l| l.experience)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthRateExperienceLevel {
    pub level: i64,
    pub experience: i64,
}
