//! Data-driven content definitions and loaders.
//!
//! This crate houses the static fish tank content and provides loaders for
//! RON/TOML data files:
//! - Decoration catalog (built in, or data-driven via RON)
//! - Simulation tuning (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in game state.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::decorations;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, DecorationCatalogFile, DecorationLoader, LoadResult};
