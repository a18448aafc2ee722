//! Record schemas.
//!
//! One struct per record kind, plus the nested types that only appear
//! embedded in a record payload. Field names match the catalog's JSON.

pub mod berries;
pub mod common;
pub mod contests;
pub mod encounters;
pub mod evolution;
pub mod games;
pub mod items;
pub mod locations;
pub mod machines;
pub mod moves;
pub mod pokemon;
pub mod species;
pub mod stats;
pub mod types;
pub mod utility;

pub use berries::{Berry, BerryFirmness, BerryFlavor, BerryFlavorMap, FlavorBerryMap};
pub use common::{
    Description, Effect, Encounter, FlavorText, GenerationGameIndex, MachineVersionDetail, Name,
    PartialFlavorText, VerboseEffect, VersionEncounterDetail, VersionGameIndex,
    VersionGroupFlavorText,
};
pub use contests::{ContestEffect, ContestName, ContestType, SuperContestEffect};
pub use encounters::{EncounterCondition, EncounterConditionValue, EncounterMethod};
pub use evolution::{ChainLink, EvolutionChain, EvolutionDetail, EvolutionTrigger};
pub use games::{Generation, Pokedex, PokemonEntry, Version, VersionGroup};
pub use items::{
    Item, ItemAttribute, ItemCategory, ItemFlingEffect, ItemHolderPokemon,
    ItemHolderPokemonVersionDetail, ItemPocket, ItemSprites,
};
pub use locations::{
    EncounterMethodRate, EncounterVersionDetails, Location, LocationArea, PalParkArea,
    PalParkEncounterSpecies, PokemonEncounter, Region,
};
pub use machines::Machine;
pub use moves::{
    ContestComboDetail, ContestComboSets, Move, MoveAilment, MoveBattleStyle, MoveCategory,
    MoveDamageClass, MoveFlavorText, MoveLearnMethod, MoveMetaData, MoveStatChange, MoveTarget,
    PastMoveStatValues,
};
pub use pokemon::{
    LocationAreaEncounter, Pokemon, PokemonAbility, PokemonForm, PokemonFormSprites,
    PokemonFormType, PokemonHeldItem, PokemonHeldItemVersion, PokemonMove, PokemonMoveVersion,
    PokemonSprites, PokemonStat, PokemonType, PokemonTypePast,
};
pub use species::{
    AwesomeName, EggGroup, Gender, Genus, GrowthRate, GrowthRateExperienceLevel,
    PalParkEncounterArea, PokemonColor, PokemonHabitat, PokemonShape, PokemonSpecies,
    PokemonSpeciesDexEntry, PokemonSpeciesGender, PokemonSpeciesVariety,
};
pub use stats::{
    Ability, AbilityEffectChange, AbilityFlavorText, AbilityPokemon, Characteristic,
    MoveBattleStylePreference, MoveStatAffect, MoveStatAffectSets, Nature,
    NaturePokeathlonStatAffect, NaturePokeathlonStatAffectSet, NatureStatAffectSets,
    NatureStatChange, PokeathlonStat, Stat,
};
pub use types::{Type, TypePokemon, TypeRelations, TypeRelationsPast};
pub use utility::Language;
