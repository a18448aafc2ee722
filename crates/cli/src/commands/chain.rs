//! Evolution chain rendering.
//!
//! # Usage
//!
//! ```bash
//! pokeapi chain 67
//! ```
//!
//! ```text
//! eevee
//!   vaporeon (use-item: water-stone)
//!   jolteon (use-item: thunder-stone)
//! ```

use std::fmt::Write;

use pokeapi_client::Client;
use pokeapi_client::models::{ChainLink, EvolutionDetail};

use super::CommandError;

/// Fetch an evolution chain and print it as an indented tree.
///
/// # Errors
///
/// Returns `CommandError::NotFound` if the chain does not exist.
#[allow(clippy::print_stdout)]
pub async fn show(client: &Client, id: i64) -> Result<(), CommandError> {
    let chain = client
        .get_evolution_chain(id)
        .await?
        .ok_or_else(|| CommandError::NotFound(format!("evolution-chain/{id}")))?;

    print!("{}", render(&chain.chain));
    Ok(())
}

/// Render a chain as one line per stage, indented two spaces per level.
fn render(root: &ChainLink) -> String {
    let mut out = String::new();
    render_into(&mut out, root, 0);
    out
}

fn render_into(out: &mut String, link: &ChainLink, depth: usize) {
    let _ = write!(out, "{:indent$}{}", "", link.species.label(), indent = depth * 2);
    if let Some(detail) = link.details().first() {
        let _ = write!(out, " ({})", describe(detail));
    }
    out.push('\n');

    for next in &link.evolves_to {
        render_into(out, next, depth + 1);
    }
}

/// Short description of the main evolution requirement.
fn describe(detail: &EvolutionDetail) -> String {
    let trigger = detail.trigger.label();
    if let Some(level) = detail.min_level {
        format!("{trigger}: level {level}")
    } else if let Some(item) = detail.item.as_ref().or(detail.held_item.as_ref()) {
        format!("{trigger}: {}", item.label())
    } else if let Some(happiness) = detail.min_happiness {
        format!("{trigger}: happiness {happiness}")
    } else {
        trigger.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pokeapi_client::Decode;
    use pokeapi_client::models::EvolutionChain;
    use serde_json::json;

    use super::*;

    fn stage(
        name: &str,
        id: i64,
        details: serde_json::Value,
        next: serde_json::Value,
    ) -> serde_json::Value {
        json!({
            "is_baby": false,
            "species": {"name": name, "url": format!("https://pokeapi.co/api/v2/pokemon-species/{id}/")},
            "evolution_details": details,
            "evolves_to": next
        })
    }

    fn detail(trigger: &str, extra: serde_json::Value) -> serde_json::Value {
        let mut value = json!({
            "trigger": {"name": trigger, "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"},
            "time_of_day": "",
            "turn_upside_down": false
        });
        for (k, v) in extra.as_object().unwrap() {
            value[k] = v.clone();
        }
        json!([value])
    }

    #[test]
    fn test_render_linear_chain() {
        let chain = EvolutionChain::decode(json!({
            "id": 1,
            "chain": stage("bulbasaur", 1, json!([]), json!([
                stage("ivysaur", 2, detail("level-up", json!({"min_level": 16})), json!([
                    stage("venusaur", 3, detail("level-up", json!({"min_level": 32})), json!([]))
                ]))
            ]))
        }))
        .unwrap();

        assert_eq!(
            render(&chain.chain),
            "bulbasaur\n  ivysaur (level-up: level 16)\n    venusaur (level-up: level 32)\n"
        );
    }

    #[test]
    fn test_render_branches_with_items() {
        let stone = |name: &str| {
            detail(
                "use-item",
                json!({"item": {"name": name, "url": "https://pokeapi.co/api/v2/item/1/"}}),
            )
        };
        let chain = EvolutionChain::decode(json!({
            "id": 67,
            "chain": stage("eevee", 133, json!([]), json!([
                stage("vaporeon", 134, stone("water-stone"), json!([])),
                stage("jolteon", 135, stone("thunder-stone"), json!([]))
            ]))
        }))
        .unwrap();

        assert_eq!(
            render(&chain.chain),
            "eevee\n  vaporeon (use-item: water-stone)\n  jolteon (use-item: thunder-stone)\n"
        );
    }

    #[test]
    fn test_describe_falls_back_to_trigger() {
        let chain = EvolutionChain::decode(json!({
            "id": 2,
            "chain": stage("kadabra", 64, json!([]), json!([
                stage("alakazam", 65, detail("trade", json!({})), json!([]))
            ]))
        }))
        .unwrap();
        assert!(render(&chain.chain).ends_with("  alakazam (trade)\n"));
    }
}
