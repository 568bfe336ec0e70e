//! Content loaders for reading game data from files.
//!
//! Each loader reads one RON/TOML file and converts it into tactics-core
//! types. Class definitions go through the same validation boundary as any
//! other string input, so a bad axis value fails the whole load.

pub mod classes;
pub mod config;
pub mod factory;
pub mod fate;
pub mod rules;

pub use classes::{ClassCatalog, ClassLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use fate::{FateCatalog, FateDeckLoader, FateTable};
pub use rules::RulesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
