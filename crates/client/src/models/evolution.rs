//! Evolution chains and triggers.
//!
//! An evolution chain is a tree: each [`ChainLink`] names a species and the
//! links it can evolve into. Trees nest to arbitrary depth, but a payload
//! never contains cycles.

use pokeapi_core::{Link, NamedResourceLink};
use serde::{Deserialize, Serialize};

use super::{Item, Location, Move, Name, PokemonSpecies, Type};

/// A family of species related by evolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    /// Record id.
    pub id: i64,
    /// Item a parent must hold to breed the baby stage, if any.
    #[serde(default)]
    pub baby_trigger_item: Option<NamedResourceLink<Item>>,
    /// Root of the evolution tree.
    pub chain: ChainLink,
}

/// One stage of an evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    /// Whether this stage is a baby pokemon.
    pub is_baby: bool,
    /// Species at this stage.
    pub species: NamedResourceLink<PokemonSpecies>,
    /// Conditions under which the previous stage evolves into this one.
    pub evolution_details: Vec<EvolutionDetail>,
    /// Stages this species can evolve into.
    pub evolves_to: Vec<Self>,
}

impl ChainLink {
    /// Alias for [`ChainLink::evolution_details`].
    #[must_use]
    pub fn details(&self) -> &[EvolutionDetail] {
        &self.evolution_details
    }

    /// Number of stages on the longest path from this link to a leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .evolves_to
            .iter()
            .map(Self::depth)
            .max()
            .unwrap_or(0)
    }

    /// Species labels in depth-first order, starting with this stage.
    #[must_use]
    pub fn species_names(&self) -> Vec<&str> {
        let mut names = vec![self.species.label()];
        for next in &self.evolves_to {
            names.extend(next.species_names());
        }
        names
    }

    /// Find the stage for a species by its label.
    #[must_use]
    pub fn find(&self, species: &str) -> Option<&Self> {
        if self.species.label() == species {
            return Some(self);
        }
        self.evolves_to.iter().find_map(|next| next.find(species))
    }
}

/// Requirements for one evolution step.
///
/// Only `trigger` and `turn_upside_down` are always present; every other
/// requirement is absent unless it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    /// Event that causes the evolution.
    pub trigger: NamedResourceLink<EvolutionTrigger>,
    /// Item that must be used on the pokemon.
    #[serde(default)]
    pub item: Option<NamedResourceLink<Item>>,
    /// Required gender id (1 female, 2 male).
    #[serde(default)]
    pub gender: Option<i64>,
    /// Item the pokemon must hold.
    #[serde(default)]
    pub held_item: Option<NamedResourceLink<Item>>,
    /// Move the pokemon must know.
    #[serde(default)]
    pub known_move: Option<NamedResourceLink<Move>>,
    /// Type of a move the pokemon must know.
    #[serde(default)]
    pub known_move_type: Option<NamedResourceLink<Type>>,
    /// Location the evolution must happen at.
    #[serde(default)]
    pub location: Option<NamedResourceLink<Location>>,
    /// Minimum level.
    #[serde(default)]
    pub min_level: Option<i64>,
    /// Minimum happiness.
    #[serde(default)]
    pub min_happiness: Option<i64>,
    /// Minimum beauty.
    #[serde(default)]
    pub min_beauty: Option<i64>,
    /// Minimum affection.
    #[serde(default)]
    pub min_affection: Option<i64>,
    /// Whether it must be raining in the overworld.
    #[serde(default)]
    pub needs_overworld_rain: Option<bool>,
    /// Species that must be in the party.
    #[serde(default)]
    pub party_species: Option<NamedResourceLink<PokemonSpecies>>,
    /// Type of a pokemon that must be in the party.
    #[serde(default)]
    pub party_type: Option<NamedResourceLink<Type>>,
    /// Required Attack vs Defense relation (1 greater, -1 less, 0 equal).
    #[serde(default)]
    pub relative_physical_stats: Option<i64>,
    /// Required time of day; empty when unrestricted.
    pub time_of_day: String,
    /// Species the pokemon must be traded for.
    #[serde(default)]
    pub trade_species: Option<NamedResourceLink<PokemonSpecies>>,
    /// Whether the 3DS must be held upside down.
    pub turn_upside_down: bool,
}

/// An event that causes evolution (level up, trade, item use, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionTrigger {
    pub id: i64,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedResourceLink<PokemonSpecies>>,
}

impl EvolutionTrigger {
    /// Alias for [`EvolutionTrigger::pokemon_species`].
    #[must_use]
    pub fn species(&self) -> &[NamedResourceLink<PokemonSpecies>] {
        &self.pokemon_species
    }

    /// Whether a species evolves through this trigger.
    #[must_use]
    pub fn triggers(&self, species: &NamedResourceLink<PokemonSpecies>) -> bool {
        self.pokemon_species
            .iter()
            .any(|s| s.address() == species.address())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::decode::Decode;

    fn species(name: &str, id: i64) -> serde_json::Value {
        json!({"name": name, "url": format!("https://pokeapi.co/api/v2/pokemon-species/{id}/")})
    }

    fn level_up(level: i64) -> serde_json::Value {
        json!({
            "trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"},
            "min_level": level,
            "time_of_day": "",
            "turn_upside_down": false,
            "gender": null,
            "item": null
        })
    }

    fn bulbasaur_chain() -> serde_json::Value {
        json!({
            "id": 1,
            "baby_trigger_item": null,
            "chain": {
                "is_baby": false,
                "species": species("bulbasaur", 1),
                "evolution_details": [],
                "evolves_to": [{
                    "is_baby": false,
                    "species": species("ivysaur", 2),
                    "evolution_details": [level_up(16)],
                    "evolves_to": [{
                        "is_baby": false,
                        "species": species("venusaur", 3),
                        "evolution_details": [level_up(32)],
                        "evolves_to": []
                    }]
                }]
            }
        })
    }

    #[test]
    fn test_three_level_chain_depth() {
        let chain = EvolutionChain::decode(bulbasaur_chain()).unwrap();
        assert_eq!(chain.chain.depth(), 3);
        assert_eq!(chain.chain.evolves_to.len(), 1);
        assert_eq!(chain.chain.evolves_to[0].evolves_to.len(), 1);
        assert!(chain.chain.evolves_to[0].evolves_to[0].evolves_to.is_empty());
        assert_eq!(
            chain.chain.species_names(),
            ["bulbasaur", "ivysaur", "venusaur"]
        );
    }

    #[test]
    fn test_branching_chain() {
        let payload = json!({
            "id": 67,
            "chain": {
                "is_baby": false,
                "species": species("eevee", 133),
                "evolution_details": [],
                "evolves_to": [
                    {"is_baby": false, "species": species("vaporeon", 134), "evolution_details": [], "evolves_to": []},
                    {"is_baby": false, "species": species("jolteon", 135), "evolution_details": [], "evolves_to": []},
                    {"is_baby": false, "species": species("flareon", 136), "evolution_details": [], "evolves_to": []}
                ]
            }
        });
        let chain = EvolutionChain::decode(payload).unwrap();
        assert_eq!(chain.chain.evolves_to.len(), 3);
        assert_eq!(chain.chain.depth(), 2);
        assert!(chain.baby_trigger_item.is_none());
        assert!(chain.chain.find("jolteon").is_some());
        assert!(chain.chain.find("pikachu").is_none());
    }

    #[test]
    fn test_evolution_detail_optional_fields() {
        let chain = EvolutionChain::decode(bulbasaur_chain()).unwrap();
        let ivysaur = chain.chain.find("ivysaur").unwrap();
        let detail = &ivysaur.details()[0];
        assert_eq!(detail.min_level, Some(16));
        assert_eq!(detail.item, None);
        assert_eq!(detail.gender, None);
        assert_eq!(detail.trigger.label(), "level-up");
    }

    #[test]
    fn test_chain_reserializes_declared_fields() {
        let chain = EvolutionChain::decode(bulbasaur_chain()).unwrap();
        let value = serde_json::to_value(&chain).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["chain"]["species"], species("bulbasaur", 1));
        assert_eq!(
            value["chain"]["evolves_to"][0]["evolves_to"][0]["species"]["name"],
            "venusaur"
        );
        assert_eq!(EvolutionChain::decode(value).unwrap(), chain);
    }

    #[test]
    fn test_missing_required_trigger_fails() {
        let mut payload = bulbasaur_chain();
        payload["chain"]["evolves_to"][0]["evolution_details"][0]
            .as_object_mut()
            .unwrap()
            .remove("trigger");
        assert!(EvolutionChain::decode(payload).is_err());
    }

    #[test]
    fn test_trigger_species_alias() {
        let trigger = EvolutionTrigger::decode(json!({
            "id": 1,
            "name": "level-up",
            "names": [],
            "pokemon_species": [species("ivysaur", 2)]
        }))
        .unwrap();
        assert_eq!(trigger.species().len(), 1);
        assert!(trigger.triggers(&NamedResourceLink::new(
            "ivysaur",
            "https://pokeapi.co/api/v2/pokemon-species/2/"
        )));
    }
}
