//! Resource kinds and the typed operations generated for them.
//!
//! Every kind the catalog serves is declared exactly once, in the
//! `catalog_resources!` invocation at the bottom of this module. From that
//! single list the macro generates:
//!
//! - [`ResourceKind`], the closed set of kind names,
//! - [`Record`], the untyped union of decoded records,
//! - a [`Resource`] impl for each record type,
//! - one `Client::get_<kind>` operation per kind,
//! - the entries of the [`FetcherRegistry`](crate::registry::FetcherRegistry).
//!
//! The registry and the typed operations therefore cannot drift apart.

use std::fmt;
use std::str::FromStr;

use pokeapi_core::Identifier;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::Client;
use crate::error::CatalogError;
use crate::models::{
    Ability, Berry, BerryFirmness, BerryFlavor, Characteristic, ContestEffect, ContestType,
    EggGroup, EncounterCondition, EncounterConditionValue, EncounterMethod, EvolutionChain,
    EvolutionTrigger, Gender, Generation, GrowthRate, Item, ItemAttribute, ItemCategory,
    ItemFlingEffect, ItemPocket, Language, Location, LocationArea, Machine, Move, MoveAilment,
    MoveBattleStyle, MoveCategory, MoveDamageClass, MoveLearnMethod, MoveTarget, Nature,
    PalParkArea, PokeathlonStat, Pokedex, Pokemon, PokemonColor, PokemonForm, PokemonHabitat,
    PokemonShape, PokemonSpecies, Region, Stat, SuperContestEffect, Type, Version, VersionGroup,
};
use crate::registry::{Fetcher, fetch_record};

/// A record type addressable as `{kind}/{id}`.
pub trait Resource: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Kind this record is served under.
    const KIND: ResourceKind;

    /// Wrap into the untyped record union.
    fn into_record(self) -> Record;

    /// Unwrap from the untyped record union.
    ///
    /// # Errors
    ///
    /// Gives the record back unchanged if it is of another kind.
    fn from_record(record: Record) -> Result<Self, Record>;
}

macro_rules! catalog_resources {
    ($( $variant:ident => $kind:literal, $ty:ty, $method:ident; )+) => {
        /// Name of a record kind, as it appears in catalog addresses.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ResourceKind {
            $( $variant, )+
        }

        impl ResourceKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Path segment naming this kind.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $kind, )+
                }
            }
        }

        impl FromStr for ResourceKind {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $kind => Ok(Self::$variant), )+
                    other => Err(CatalogError::UnknownKind(other.to_string())),
                }
            }
        }

        /// A decoded record of any kind.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        #[serde(untagged)]
        pub enum Record {
            $( $variant(Box<$ty>), )+
        }

        impl Record {
            /// Kind of the wrapped record.
            #[must_use]
            pub const fn kind(&self) -> ResourceKind {
                match self {
                    $( Self::$variant(_) => ResourceKind::$variant, )+
                }
            }
        }

        $(
            impl Resource for $ty {
                const KIND: ResourceKind = ResourceKind::$variant;

                fn into_record(self) -> Record {
                    Record::$variant(Box::new(self))
                }

                fn from_record(record: Record) -> Result<Self, Record> {
                    match record {
                        Record::$variant(inner) => Ok(*inner),
                        other => Err(other),
                    }
                }
            }
        )+

        impl Client {
            $(
                #[doc = concat!("Fetch a `", $kind, "` record by id or name.")]
                ///
                /// Returns `Ok(None)` if the catalog has no such record.
                ///
                /// # Errors
                ///
                /// Returns `CatalogError` if the transport fails or the payload
                /// does not decode.
                pub async fn $method(
                    &self,
                    id: impl Into<Identifier>,
                ) -> Result<Option<$ty>, CatalogError> {
                    self.fetch::<$ty>(id).await
                }
            )+
        }

        /// One fetcher per declared kind.
        pub(crate) fn registry_entries() -> Vec<(&'static str, Fetcher)> {
            vec![ $( ($kind, fetch_record::<$ty> as Fetcher), )+ ]
        }
    };
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

catalog_resources! {
    Ability => "ability", Ability, get_ability;
    Berry => "berry", Berry, get_berry;
    BerryFirmness => "berry-firmness", BerryFirmness, get_berry_firmness;
    BerryFlavor => "berry-flavor", BerryFlavor, get_berry_flavor;
    Characteristic => "characteristic", Characteristic, get_characteristic;
    ContestEffect => "contest-effect", ContestEffect, get_contest_effect;
    ContestType => "contest-type", ContestType, get_contest_type;
    EggGroup => "egg-group", EggGroup, get_egg_group;
    EncounterCondition => "encounter-condition", EncounterCondition, get_encounter_condition;
    EncounterConditionValue => "encounter-condition-value", EncounterConditionValue, get_encounter_condition_value;
    EncounterMethod => "encounter-method", EncounterMethod, get_encounter_method;
    EvolutionChain => "evolution-chain", EvolutionChain, get_evolution_chain;
    EvolutionTrigger => "evolution-trigger", EvolutionTrigger, get_evolution_trigger;
    Gender => "gender", Gender, get_gender;
    Generation => "generation", Generation, get_generation;
    GrowthRate => "growth-rate", GrowthRate, get_growth_rate;
    Item => "item", Item, get_item;
    ItemAttribute => "item-attribute", ItemAttribute, get_item_attribute;
    ItemCategory => "item-category", ItemCategory, get_item_category;
    ItemFlingEffect => "item-fling-effect", ItemFlingEffect, get_item_fling_effect;
    ItemPocket => "item-pocket", ItemPocket, get_item_pocket;
    Language => "language", Language, get_language;
    Location => "location", Location, get_location;
    LocationArea => "location-area", LocationArea, get_location_area;
    Machine => "machine", Machine, get_machine;
    Move => "move", Move, get_move;
    MoveAilment => "move-ailment", MoveAilment, get_move_ailment;
    MoveBattleStyle => "move-battle-style", MoveBattleStyle, get_move_battle_style;
    MoveCategory => "move-category", MoveCategory, get_move_category;
    MoveDamageClass => "move-damage-class", MoveDamageClass, get_move_damage_class;
    MoveLearnMethod => "move-learn-method", MoveLearnMethod, get_move_learn_method;
    MoveTarget => "move-target", MoveTarget, get_move_target;
    Nature => "nature", Nature, get_nature;
    PalParkArea => "pal-park-area", PalParkArea, get_pal_park_area;
    PokeathlonStat => "pokeathlon-stat", PokeathlonStat, get_pokeathlon_stat;
    Pokedex => "pokedex", Pokedex, get_pokedex;
    Pokemon => "pokemon", Pokemon, get_pokemon;
    PokemonColor => "pokemon-color", PokemonColor, get_pokemon_color;
    PokemonForm => "pokemon-form", PokemonForm, get_pokemon_form;
    PokemonHabitat => "pokemon-habitat", PokemonHabitat, get_pokemon_habitat;
    PokemonShape => "pokemon-shape", PokemonShape, get_pokemon_shape;
    PokemonSpecies => "pokemon-species", PokemonSpecies, get_pokemon_species;
    Region => "region", Region, get_region;
    Stat => "stat", Stat, get_stat;
    SuperContestEffect => "super-contest-effect", SuperContestEffect, get_super_contest_effect;
    Type => "type", Type, get_type;
    Version => "version", Version, get_version;
    VersionGroup => "version-group", VersionGroup, get_version_group;
}
