//! Elemental types and their damage relations.

use pokeapi_core::NamedResourceLink;
use serde::{Deserialize, Serialize};

use super::{Generation, GenerationGameIndex, Move, MoveDamageClass, Name, Pokemon};

/// An elemental type of pokemon and moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    pub id: i64,
    pub name: String,
    pub damage_relations: TypeRelations,
    pub past_damage_relations: Vec<TypeRelationsPast>,
    pub game_indices: Vec<GenerationGameIndex>,
    pub generation: NamedResourceLink<Generation>,
    /// Damage class moves of this type had before generation IV.
    #[serde(default)]
    pub move_damage_class: Option<NamedResourceLink<MoveDamageClass>>,
    pub names: Vec<Name>,
    pub pokemon: Vec<TypePokemon>,
    pub moves: Vec<NamedResourceLink<Move>>,
}

/// Damage multipliers against and from other types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRelations {
    pub no_damage_to: Vec<NamedResourceLink<Type>>,
    pub half_damage_to: Vec<NamedResourceLink<Type>>,
    pub double_damage_to: Vec<NamedResourceLink<Type>>,
    pub no_damage_from: Vec<NamedResourceLink<Type>>,
    pub half_damage_from: Vec<NamedResourceLink<Type>>,
    pub double_damage_from: Vec<NamedResourceLink<Type>>,
}

impl TypeRelations {
    /// Damage multiplier when attacking a defender of the given type label.
    #[must_use]
    pub fn multiplier_against(&self, defender: &str) -> f64 {
        let hits = |links: &[NamedResourceLink<Type>]| links.iter().any(|t| t.label() == defender);
        if hits(&self.no_damage_to) {
            0.0
        } else if hits(&self.half_damage_to) {
            0.5
        } else if hits(&self.double_damage_to) {
            2.0
        } else {
            1.0
        }
    }
}

/// Damage relations that held up to a given generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRelationsPast {
    /// Last generation with these relations.
    pub generation: NamedResourceLink<Generation>,
    pub damage_relations: TypeRelations,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePokemon {
    pub slot: i64,
    pub pokemon: NamedResourceLink<Pokemon>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::decode::Decode;

    fn ty(name: &str, id: i64) -> serde_json::Value {
        json!({"name": name, "url": format!("https://pokeapi.co/api/v2/type/{id}/")})
    }

    fn grass() -> serde_json::Value {
        json!({
            "id": 12,
            "name": "grass",
            "damage_relations": {
                "no_damage_to": [],
                "half_damage_to": [ty("fire", 10), ty("grass", 12)],
                "double_damage_to": [ty("water", 11)],
                "no_damage_from": [],
                "half_damage_from": [ty("water", 11)],
                "double_damage_from": [ty("fire", 10)]
            },
            "past_damage_relations": [],
            "game_indices": [],
            "generation": {"name": "generation-i", "url": "https://pokeapi.co/api/v2/generation/1/"},
            "move_damage_class": {"name": "special", "url": "https://pokeapi.co/api/v2/move-damage-class/3/"},
            "names": [],
            "pokemon": [{"slot": 1, "pokemon": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}}],
            "moves": []
        })
    }

    #[test]
    fn test_damage_multiplier() {
        let grass = Type::decode(grass()).unwrap();
        let relations = &grass.damage_relations;
        assert_eq!(relations.multiplier_against("water"), 2.0);
        assert_eq!(relations.multiplier_against("fire"), 0.5);
        assert_eq!(relations.multiplier_against("normal"), 1.0);
    }

    #[test]
    fn test_missing_relation_list_fails() {
        let mut payload = grass();
        payload["damage_relations"]
            .as_object_mut()
            .unwrap()
            .remove("no_damage_to");
        assert!(Type::decode(payload).is_err());
    }
}
