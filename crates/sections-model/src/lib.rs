//! Data model for the section resolver
//!
//! Pure types shared by the store seam and the resolution engine: upstream
//! content records, section definitions with their model patterns and
//! configuration documents, raw content payloads, and the assembled
//! Section/Block/SettingValue output consumed by the query layer.

pub mod config;
pub mod content;
pub mod definition;
pub mod error;
pub mod record;
pub mod section;
pub mod value;
pub mod variant;

pub use config::{BlockConfig, ConfigDocument, SettingConfig};
pub use content::{RawBlock, RawContent};
pub use definition::{Definition, ModelPattern};
pub use error::{Error, Result};
pub use record::ContentRecord;
pub use section::{Block, Section, SettingAccess, SettingValue, TypedValue};
pub use variant::Variant;
