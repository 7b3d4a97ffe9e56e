//! Resolution engine for the section resolver.
//!
//! Turns opaque content records into strongly-typed sections: discovers
//! which definitions apply to a record, decodes its raw JSON payload,
//! infers a runtime variant for every declared setting, coerces raw values
//! (resolving cross-record references through the store seam), and
//! assembles ordered, repeatable block collections.
//!
//! Resolution is total over its contract: unknown ids, malformed payloads,
//! and unresolvable references degrade to null/empty results at the
//! smallest possible scope — one bad field never blocks sibling fields.

pub mod assemble;
pub mod blocks;
pub mod cache;
pub mod coerce;
pub mod config;
pub mod error;
pub mod matcher;
pub mod resolver;

pub use assemble::assemble_sections;
pub use blocks::assemble_blocks;
pub use cache::DefinitionCache;
pub use coerce::coerce;
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use matcher::{matching_definitions, matching_models, pattern_matches};
pub use resolver::Resolver;
