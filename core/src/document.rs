//! The persisted document and its JSON (de)serialization.

use ipsift_common::error::PipelineError;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generate::{self, ADDRESSES_PER_CLASS};

/// One run's worth of addresses, in generation order.
///
/// Serialized field names and field order are part of the artifact format:
/// `privateAddresses` first, then `publicAddresses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub private_addresses: Vec<String>,
    pub public_addresses: Vec<String>,
}

impl Document {
    /// Fills both lists with freshly generated addresses.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            private_addresses: (0..ADDRESSES_PER_CLASS)
                .map(|_| generate::random_private(rng))
                .collect(),
            public_addresses: (0..ADDRESSES_PER_CLASS)
                .map(|_| generate::random_public(rng))
                .collect(),
        }
    }

    /// Renders pretty-printed JSON with two-space indentation.
    pub fn to_text(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Inverse of [`Document::to_text`]; round-trips by value.
    pub fn parse(text: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(text)?)
    }
}
