//! Runtime wrappers around static game content oracles.
//!
//! These implementations expose `tank-core` oracle traits. The data is
//! immutable at runtime; dynamic state lives in repositories or
//! [`tank_core::GameState`].
mod decorations;

pub use decorations::DecorationCatalogImpl;
