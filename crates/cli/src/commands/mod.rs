//! CLI subcommands.

pub mod catalog;
pub mod chain;

use pokeapi_client::CatalogError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The client failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The catalog has no record for the request.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record could not be printed.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
