//! Data-driven content for the tactics prototype.
//!
//! Loaders read RON/TOML files from a data directory:
//! - Class definitions (RON, string axes validated into unit builds)
//! - Build rules (TOML, baseline template and synergy policy)
//! - Fate deck (RON, cards with rarity plus draw settings)
//! - Session configuration (TOML)
//!
//! All loaders use tactics-core types directly with serde for deserialization.

pub mod loaders;

pub use loaders::{
    ClassCatalog, ClassLoader, ConfigLoader, ContentFactory, FateCatalog, FateDeckLoader,
    FateTable, LoadResult, RulesLoader,
};
