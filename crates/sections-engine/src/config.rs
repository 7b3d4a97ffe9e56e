//! Engine configuration
//!
//! A small manifest identifying which upstream content type carries the
//! section definitions. Hosts can embed the defaults, parse TOML, or load
//! a config file.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_definition_type() -> String {
    "sectionDefinition".to_string()
}

/// Resolver engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Content type of the records that carry section definitions
    #[serde(default = "default_definition_type")]
    pub definition_type: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            definition_type: default_definition_type(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "Loading engine config");
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }
}
