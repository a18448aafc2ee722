//! Technical and hidden machines.

use pokeapi_core::NamedResourceLink;
use serde::{Deserialize, Serialize};

use super::{Item, Move, VersionGroup};

/// A TM or HM: an item that teaches a move, specific to a version group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: i64,
    pub item: NamedResourceLink<Item>,
    pub r#move: NamedResourceLink<Move>,
    pub version_group: NamedResourceLink<VersionGroup>,
}
