//! Berry records.

use pokeapi_core::NamedResourceLink;
use serde::{Deserialize, Serialize};

use super::{ContestType, Item, Name, Type};

/// A berry: a small fruit that can provide HP and status recovery, stat
/// enhancement, and damage negation when eaten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Berry {
    pub id: i64,
    pub name: String,
    /// Time in hours for the tree to grow one stage.
    pub growth_time: i64,
    /// Maximum number of berries a tree can hold.
    pub max_harvest: i64,
    /// Power of "Natural Gift" when used with this berry.
    pub natural_gift_power: i64,
    /// Size in millimeters.
    pub size: i64,
    /// Smoothness, used when making Pokeblocks or Poffins.
    pub smoothness: i64,
    /// Speed at which the berry dries out the soil.
    pub soil_dryness: i64,
    pub firmness: NamedResourceLink<BerryFirmness>,
    pub flavors: Vec<BerryFlavorMap>,
    /// The berry as an item.
    pub item: NamedResourceLink<Item>,
    /// Type inherited by "Natural Gift" when used with this berry.
    pub natural_gift_type: NamedResourceLink<Type>,
}

/// Potency of one flavor in a berry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerryFlavorMap {
    pub potency: i64,
    pub flavor: NamedResourceLink<BerryFlavor>,
}

/// How firm a berry is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerryFirmness {
    pub id: i64,
    pub name: String,
    pub berries: Vec<NamedResourceLink<Berry>>,
    pub names: Vec<Name>,
}

/// A berry flavor, tied to a contest type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerryFlavor {
    pub id: i64,
    pub name: String,
    pub berries: Vec<FlavorBerryMap>,
    pub contest_type: NamedResourceLink<ContestType>,
    pub names: Vec<Name>,
}

/// Potency of a flavor in one berry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorBerryMap {
    pub potency: i64,
    pub berry: NamedResourceLink<Berry>,
}
