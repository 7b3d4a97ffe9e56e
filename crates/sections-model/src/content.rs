//! Raw content payloads
//!
//! The free-form JSON blob an editor stores per content field. Shape is not
//! enforced upstream, so decoding is lenient: missing members default to
//! empty and unknown keys are ignored.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded content payload: loose setting values plus an ordered block list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawContent {
    #[serde(default)]
    pub settings: Map<String, Value>,
    #[serde(default)]
    pub blocks: Vec<RawBlock>,
}

impl RawContent {
    /// Parse a payload from JSON text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Raw value for a setting id, if the payload carries one
    pub fn setting(&self, id: &str) -> Option<&Value> {
        self.settings.get(id)
    }
}

/// One repeatable block instance inside a payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    #[serde(rename = "type", default)]
    pub block_type: String,
    #[serde(default)]
    pub settings: Map<String, Value>,
}
