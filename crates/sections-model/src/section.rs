//! Assembled resolver output
//!
//! The strongly-typed structures handed to the query layer: a [`Section`]
//! per matched record/field pair, its ordered [`SettingValue`]s, and its
//! ordered repeatable [`Block`]s. Instances are ephemeral, built fresh per
//! resolution call and owned by the caller.

use crate::record::ContentRecord;
use crate::value::{numeric, truthy};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// A coerced runtime value, tagged by its variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedValue {
    Number(f64),
    /// Passthrough of the raw JSON value for text-kinded settings
    Text(Value),
    Boolean(bool),
    /// Resolved cross-record reference to a content entry
    Node(Arc<ContentRecord>),
    /// Resolved cross-record reference to an asset
    Asset(Arc<ContentRecord>),
}

impl TypedValue {
    /// Project to text, stringifying across variants. References project to
    /// their record id, the one stable string identity they carry.
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(Value::String(s)) => s.clone(),
            Self::Text(other) => other.to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Node(record) | Self::Asset(record) => record.id.clone(),
        }
    }

    /// Project to a float, parsing text and widening booleans; references
    /// have no numeric shape and yield `None`
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(v) => numeric(v),
            Self::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Node(_) | Self::Asset(_) => None,
        }
    }

    /// Project to a boolean via truthiness; a resolved reference is truthy
    pub fn as_boolean(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Text(v) => truthy(v),
            Self::Node(_) | Self::Asset(_) => true,
        }
    }

    /// The referenced record, for reference-typed values
    pub fn as_record(&self) -> Option<Arc<ContentRecord>> {
        match self {
            Self::Node(record) | Self::Asset(record) => Some(Arc::clone(record)),
            _ => None,
        }
    }
}

/// One named, typed value within a section or block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingValue {
    pub id: String,
    pub variant: Variant,
    pub value: Option<TypedValue>,
}

/// A repeatable sub-structure within a section, matched against a block
/// configuration by type string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub block_type: String,
    pub name: String,
    /// Position within the raw payload's block list, 0-based
    pub index: usize,
    pub settings: Vec<SettingValue>,
}

/// The assembled output for one matched record/field pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Field name the section was resolved from
    pub id: String,
    /// Owning definition's title
    pub name: Option<String>,
    /// Owning definition's model patterns, serialized
    pub models: Vec<String>,
    /// Raw linked configuration document body
    pub config_json: String,
    pub settings: Vec<SettingValue>,
    pub blocks: Vec<Block>,
}

/// Shared typed-setting lookup surface for sections and blocks.
///
/// Every accessor is total: unknown ids and variant mismatches yield `None`
/// rather than erroring, re-coercing across variants where a sensible
/// projection exists (numeric parse, truthiness, stringification).
pub trait SettingAccess {
    /// The ordered setting list backing the accessors
    fn setting_values(&self) -> &[SettingValue];

    /// Look up a setting by id
    fn setting(&self, id: &str) -> Option<&SettingValue> {
        self.setting_values().iter().find(|s| s.id == id)
    }

    /// Setting value projected to text
    fn setting_text(&self, id: &str) -> Option<String> {
        self.setting(id)?.value.as_ref().map(TypedValue::as_text)
    }

    /// Setting value projected to a float
    fn setting_number(&self, id: &str) -> Option<f64> {
        self.setting(id)?.value.as_ref().and_then(TypedValue::as_number)
    }

    /// Setting value projected to a boolean
    fn setting_boolean(&self, id: &str) -> Option<bool> {
        self.setting(id)?.value.as_ref().map(TypedValue::as_boolean)
    }

    /// Referenced entry record for a node-typed setting
    fn setting_node(&self, id: &str) -> Option<Arc<ContentRecord>> {
        self.setting(id)?.value.as_ref().and_then(TypedValue::as_record)
    }

    /// Referenced asset record for an asset-typed setting
    fn setting_asset(&self, id: &str) -> Option<Arc<ContentRecord>> {
        self.setting(id)?.value.as_ref().and_then(TypedValue::as_record)
    }
}

impl SettingAccess for Section {
    fn setting_values(&self) -> &[SettingValue] {
        &self.settings
    }
}

impl SettingAccess for Block {
    fn setting_values(&self) -> &[SettingValue] {
        &self.settings
    }
}

impl Section {
    /// Blocks whose type exactly equals `block_type`, in original index order
    pub fn blocks_of_type(&self, block_type: &str) -> Vec<&Block> {
        self.blocks
            .iter()
            .filter(|b| b.block_type == block_type)
            .collect()
    }
}
