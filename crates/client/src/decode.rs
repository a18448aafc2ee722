//! Decoder contract: JSON payloads into typed records.
//!
//! Every record type declares its exact field set as a `serde` struct, and
//! decoding is driven entirely by that declaration:
//!
//! - Required fields are plain types. A payload missing one (or carrying
//!   `null`) fails to decode instead of producing a half-filled record.
//! - Optional fields are `Option<T>` with `#[serde(default)]` and decode to
//!   `None` when absent or `null`.
//! - Nested records, links and lists decode recursively, in payload order.
//! - Payload fields the type does not declare are ignored.
//!
//! Decoding is pure: no network access and no cache interaction.

use std::any::type_name;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// A payload did not match the declared schema of a record type.
#[derive(Debug, Clone, Error)]
#[error("failed to decode {type_name}: {source}")]
pub struct DecodeError {
    type_name: &'static str,
    #[source]
    source: Arc<serde_json::Error>,
}

impl DecodeError {
    fn new<T>(source: serde_json::Error) -> Self {
        Self {
            type_name: short_type_name::<T>(),
            source: Arc::new(source),
        }
    }

    /// Name of the record type that failed to decode.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Build a typed record from a JSON payload.
pub trait Decode: Sized {
    /// Decode one record.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if a required field is missing or has the wrong
    /// shape.
    fn decode(payload: Value) -> Result<Self, DecodeError>;

    /// Decode a JSON array element-wise, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if the payload is not an array or any element
    /// fails to decode.
    fn decode_list(payload: Value) -> Result<Vec<Self>, DecodeError>;
}

impl<T: DeserializeOwned> Decode for T {
    fn decode(payload: Value) -> Result<Self, DecodeError> {
        serde_json::from_value(payload).map_err(DecodeError::new::<T>)
    }

    fn decode_list(payload: Value) -> Result<Vec<Self>, DecodeError> {
        serde_json::from_value(payload).map_err(DecodeError::new::<T>)
    }
}

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
