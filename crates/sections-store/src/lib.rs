//! Content store seam for the section resolver.
//!
//! The engine never fetches content itself; the host supplies an
//! implementation of [`ContentStore`] wrapping whatever data layer it runs
//! on. Every engine lookup (definition load, field-content fetch, reference
//! resolution) goes through this trait.

pub mod error;
pub mod store;

pub use error::{Error, Result};
pub use store::{ContentStore, ReferenceKind};
