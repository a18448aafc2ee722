//! Items and their groupings.

use pokeapi_core::{NamedResourceLink, ResourceLink};
use serde::{Deserialize, Serialize};

use super::{
    Description, Effect, EvolutionChain, GenerationGameIndex, MachineVersionDetail, Name, Pokemon,
    VerboseEffect, Version, VersionGroupFlavorText,
};

/// An object in the games that can be collected and used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// Price in the mart.
    pub cost: i64,
    /// Power of "Fling" with this item.
    #[serde(default)]
    pub fling_power: Option<i64>,
    #[serde(default)]
    pub fling_effect: Option<NamedResourceLink<ItemFlingEffect>>,
    pub attributes: Vec<NamedResourceLink<ItemAttribute>>,
    pub category: NamedResourceLink<ItemCategory>,
    pub effect_entries: Vec<VerboseEffect>,
    pub flavor_text_entries: Vec<VersionGroupFlavorText>,
    pub game_indices: Vec<GenerationGameIndex>,
    pub names: Vec<Name>,
    #[serde(default)]
    pub sprites: Option<ItemSprites>,
    pub held_by_pokemon: Vec<ItemHolderPokemon>,
    /// Evolution chain this item triggers breeding a baby for.
    #[serde(default)]
    pub baby_trigger_for: Option<ResourceLink<EvolutionChain>>,
    pub machines: Vec<MachineVersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSprites {
    #[serde(default)]
    pub default: Option<String>,
}

/// A pokemon that may be holding an item in the wild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemHolderPokemon {
    pub pokemon: NamedResourceLink<Pokemon>,
    pub version_details: Vec<ItemHolderPokemonVersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemHolderPokemonVersionDetail {
    /// Percent chance the pokemon holds the item.
    pub rarity: i64,
    pub version: NamedResourceLink<Version>,
}

/// A characteristic of an item ("consumable", "holdable", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttribute {
    pub id: i64,
    pub name: String,
    pub items: Vec<NamedResourceLink<Item>>,
    pub names: Vec<Name>,
    pub descriptions: Vec<Description>,
}

/// Bag grouping for items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCategory {
    pub id: i64,
    pub name: String,
    pub items: Vec<NamedResourceLink<Item>>,
    pub names: Vec<Name>,
    pub pocket: NamedResourceLink<ItemPocket>,
}

/// Effect of "Fling" with an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFlingEffect {
    pub id: i64,
    pub name: String,
    pub effect_entries: Vec<Effect>,
    pub items: Vec<NamedResourceLink<Item>>,
}

/// A pocket of the player's bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPocket {
    pub id: i64,
    pub name: String,
    pub categories: Vec<NamedResourceLink<ItemCategory>>,
    pub names: Vec<Name>,
}
