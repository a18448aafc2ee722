//! Contest records.

use pokeapi_core::NamedResourceLink;
use serde::{Deserialize, Serialize};

use super::{BerryFlavor, Effect, Language, Move, PartialFlavorText};

/// A contest category judged on one of five qualities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestType {
    pub id: i64,
    pub name: String,
    pub berry_flavor: NamedResourceLink<BerryFlavor>,
    pub names: Vec<ContestName>,
}

/// Localized name and color of a contest type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestName {
    pub name: String,
    pub color: String,
    pub language: NamedResourceLink<Language>,
}

/// Effect of a move when used in a contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestEffect {
    pub id: i64,
    /// Base number of hearts the user gains.
    pub appeal: i64,
    /// Base number of hearts the other contestants lose.
    pub jam: i64,
    pub effect_entries: Vec<Effect>,
    pub flavor_text_entries: Vec<PartialFlavorText>,
}

/// Effect of a move when used in a super contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperContestEffect {
    pub id: i64,
    pub appeal: i64,
    pub flavor_text_entries: Vec<PartialFlavorText>,
    pub moves: Vec<NamedResourceLink<Move>>,
}
