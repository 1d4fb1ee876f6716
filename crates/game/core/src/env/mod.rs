//! Traits describing read-only reference data.
//!
//! The engine never owns catalog content; it reads it through these oracles
//! so content can come from built-in tables, RON files or test fixtures.
mod decorations;

pub use decorations::{Decoration, DecorationCatalog, DecorationKind};
