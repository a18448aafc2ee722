//! PokeAPI CLI - Query the catalog from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Fetch a record by kind and id or name
//! pokeapi get pokemon pikachu
//!
//! # Follow a resource link
//! pokeapi resolve https://pokeapi.co/api/v2/berry/7/
//!
//! # List where a pokemon can be encountered
//! pokeapi encounters 25
//!
//! # Print an evolution tree
//! pokeapi chain 1
//!
//! # List the resource kinds the client knows
//! pokeapi kinds
//! ```
//!
//! # Environment Variables
//!
//! See `pokeapi_client::config` for `POKEAPI_*` settings. Log verbosity is
//! controlled by `RUST_LOG` (default: `pokeapi=info,pokeapi_client=info`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use pokeapi_client::{Client, ClientConfig, ResourceKind};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pokeapi")]
#[command(author, version, about = "PokeAPI catalog client")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one record and print it as JSON
    Get {
        /// Resource kind (e.g. `pokemon`, `berry`, `move-battle-style`)
        kind: ResourceKind,
        /// Numeric id or name
        id: String,
    },
    /// Resolve a resource link address and print the record
    Resolve {
        /// Full address, e.g. `https://pokeapi.co/api/v2/berry/7/`
        address: String,
    },
    /// List the encounter locations of a pokemon
    Encounters {
        /// Pokemon id or name
        pokemon: String,
    },
    /// Print an evolution chain as an indented tree
    Chain {
        /// Evolution chain id
        id: i64,
    },
    /// List every resource kind
    Kinds,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pokeapi=info,pokeapi_client=info"));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if matches!(cli.command, Commands::Kinds) {
        commands::catalog::kinds();
        return Ok(());
    }

    let config = ClientConfig::from_env()?;
    let client = Client::new(&config)?;
    tracing::debug!(base_url = %config.base_url, "Client ready");

    match cli.command {
        Commands::Get { kind, id } => commands::catalog::get(&client, kind, &id).await?,
        Commands::Resolve { address } => commands::catalog::resolve(&client, &address).await?,
        Commands::Encounters { pokemon } => {
            commands::catalog::encounters(&client, &pokemon).await?;
        }
        Commands::Chain { id } => commands::chain::show(&client, id).await?,
        Commands::Kinds => {}
    }
    Ok(())
}
