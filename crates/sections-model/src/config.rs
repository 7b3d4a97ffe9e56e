//! Configuration documents
//!
//! The JSON document linked from a definition record. Editors maintain it
//! independently of the content it describes, so decoding is lenient:
//! missing arrays default to empty and unknown keys are ignored.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared shape of a section: top-level settings plus repeatable blocks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub settings: Vec<SettingConfig>,
    #[serde(default)]
    pub blocks: Vec<BlockConfig>,
}

impl ConfigDocument {
    /// Parse a configuration document from JSON text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// One declared setting: its id, the editor-facing value kind driving
/// variant inference, and an optional default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingConfig {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub default: Option<Value>,
}

/// One declared repeatable block type with its own settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockConfig {
    #[serde(rename = "type")]
    pub block_type: String,
    pub name: String,
    #[serde(default)]
    pub settings: Vec<SettingConfig>,
}
