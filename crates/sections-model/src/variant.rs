//! Runtime value variants
//!
//! A closed set of runtime type tags a setting value is coerced into,
//! inferred from the editor-facing value kind declared in configuration.

use serde::{Deserialize, Serialize};

/// Runtime type tag for a setting value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Number,
    Text,
    Boolean,
    /// Cross-record reference to a content entry
    Node,
    /// Cross-record reference to an asset
    Asset,
}

impl Variant {
    /// Infer the runtime variant from a configuration-declared value kind.
    ///
    /// Total over all input: unrecognized kinds (including the empty string
    /// left by a setting with no declared kind) fall back to [`Variant::Node`],
    /// the generic cross-record reference.
    pub fn infer(kind: &str) -> Self {
        match kind {
            "number" | "range" => Self::Number,
            "checkbox" => Self::Boolean,
            "text" | "textarea" | "richtext" | "select" | "radio" | "url" | "email" | "search"
            | "password" | "tel" | "date" | "time" | "datetime" | "color" => Self::Text,
            "image_picker" | "asset" => Self::Asset,
            _ => Self::Node,
        }
    }

    /// Whether values of this variant resolve through a record lookup
    pub fn is_reference(self) -> bool {
        matches!(self, Self::Node | Self::Asset)
    }
}
