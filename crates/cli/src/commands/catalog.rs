//! Record lookup commands.
//!
//! # Usage
//!
//! ```bash
//! pokeapi get pokemon 25
//! pokeapi resolve https://pokeapi.co/api/v2/berry/7/
//! pokeapi encounters pikachu
//! pokeapi kinds
//! ```

use pokeapi_client::{Client, Identifier, ResourceKind};
use serde::Serialize;

use super::CommandError;

/// Fetch one record by kind and identifier and print it.
///
/// # Errors
///
/// Returns `CommandError::NotFound` if the catalog has no such record.
pub async fn get(client: &Client, kind: ResourceKind, id: &str) -> Result<(), CommandError> {
    let record = client
        .fetch_kind(kind, Identifier::parse(id))
        .await?
        .ok_or_else(|| CommandError::NotFound(format!("{kind}/{id}")))?;
    print_json(&record)
}

/// Resolve a link address and print the record.
///
/// # Errors
///
/// Returns `CommandError::NotFound` if the address points at nothing, or a
/// catalog error for malformed or unregistered addresses.
pub async fn resolve(client: &Client, address: &str) -> Result<(), CommandError> {
    let record = client
        .resolve_address(address)
        .await?
        .ok_or_else(|| CommandError::NotFound(address.to_string()))?;
    tracing::info!(kind = %record.kind(), "Resolved link");
    print_json(&record)
}

/// Print the location areas where a pokemon can be encountered.
///
/// # Errors
///
/// Returns an error if the fetch fails.
#[allow(clippy::print_stdout)]
pub async fn encounters(client: &Client, pokemon: &str) -> Result<(), CommandError> {
    let encounters = client
        .get_pokemon_encounters(Identifier::parse(pokemon))
        .await?;

    if encounters.is_empty() {
        println!("No encounters for {pokemon}");
        return Ok(());
    }

    for encounter in &encounters {
        let versions: Vec<&str> = encounter
            .version_details
            .iter()
            .map(|detail| detail.version.label())
            .collect();
        println!(
            "{} ({})",
            encounter.location_area.label(),
            versions.join(", ")
        );
    }
    Ok(())
}

/// Print every resource kind, one per line.
#[allow(clippy::print_stdout)]
pub fn kinds() {
    for kind in ResourceKind::ALL {
        println!("{kind}");
    }
}

#[allow(clippy::print_stdout)]
fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
