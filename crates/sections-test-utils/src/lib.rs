//! Shared test utilities for the section-resolver workspace.
//!
//! This crate provides standardised fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`memory`] — [`MemoryStore`], an in-memory [`ContentStore`]
//! - [`fixtures`] — builders for definition and payload records
//!
//! [`ContentStore`]: sections_store::ContentStore

pub mod fixtures;
pub mod memory;

pub use fixtures::{definition_record, document_record};
pub use memory::MemoryStore;
