//! Section definitions and model patterns
//!
//! A definition is a configuration-bearing record declaring which
//! record/field combinations should be resolved into sections, plus the
//! nested configuration document describing their settings and blocks.

use crate::config::{BlockConfig, ConfigDocument, SettingConfig};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content type accepted by any pattern
pub const WILDCARD_TYPE: &str = "*";

/// A `"contentType:fieldName"` rule identifying which records and fields a
/// definition applies to. The content type may be the wildcard `*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPattern {
    pub content_type: String,
    pub field: String,
}

impl ModelPattern {
    pub fn new(content_type: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            field: field.into(),
        }
    }

    /// Whether this pattern accepts any content type
    pub fn is_wildcard(&self) -> bool {
        self.content_type == WILDCARD_TYPE
    }
}

impl FromStr for ModelPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((content_type, field)) = s.split_once(':') else {
            return Err(Error::invalid_pattern(s, "expected \"contentType:fieldName\""));
        };
        if content_type.is_empty() {
            return Err(Error::invalid_pattern(s, "empty content type"));
        }
        if field.is_empty() {
            return Err(Error::invalid_pattern(s, "empty field name"));
        }
        Ok(Self::new(content_type, field))
    }
}

impl fmt::Display for ModelPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.content_type, self.field)
    }
}

/// A loaded section definition.
///
/// `config_json` preserves the raw linked document body for the query layer,
/// `"{}"` when the definition has no linked document. `config` is `None`
/// when no document is linked or its body failed to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub id: String,
    pub title: Option<String>,
    pub models: Vec<ModelPattern>,
    pub config: Option<ConfigDocument>,
    pub config_json: String,
}

impl Definition {
    /// Model patterns re-serialized to their `"contentType:fieldName"` form
    pub fn model_strings(&self) -> Vec<String> {
        self.models.iter().map(ModelPattern::to_string).collect()
    }

    /// Declared top-level setting configs, empty when no config parsed
    pub fn setting_configs(&self) -> &[SettingConfig] {
        self.config
            .as_ref()
            .map(|c| c.settings.as_slice())
            .unwrap_or_default()
    }

    /// Declared block configs, empty when no config parsed
    pub fn block_configs(&self) -> &[BlockConfig] {
        self.config
            .as_ref()
            .map(|c| c.blocks.as_slice())
            .unwrap_or_default()
    }
}
