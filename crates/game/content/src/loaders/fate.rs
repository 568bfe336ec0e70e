//! Fate deck loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tactics_core::{FateCard, FateDeck, RarityPolicy, RarityWeights};

use crate::loaders::{LoadResult, read_file};

/// Fate deck structure for RON files.
///
/// ```ron
/// (
///     weights: Some((common: 60, uncommon: 30, rare: 10)),
///     policy: Some(guarantee_rare),
///     cards: [
///         (name: "Gust", text: "All units move 1 less.", rarity: common),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FateCatalog {
    #[serde(default)]
    pub weights: Option<RarityWeights>,
    #[serde(default)]
    pub policy: Option<RarityPolicy>,
    pub cards: Vec<FateCard>,
}

/// A loaded deck together with the draw settings that came with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FateTable {
    pub deck: FateDeck,
    pub weights: RarityWeights,
    pub policy: RarityPolicy,
}

/// Loader for the fate deck from RON files.
pub struct FateDeckLoader;

impl FateDeckLoader {
    pub fn load(path: &Path) -> LoadResult<FateTable> {
        let content = read_file(path)?;
        let catalog: FateCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse fate deck RON: {}", e))?;

        let deck = FateDeck::new(catalog.cards)
            .map_err(|e| anyhow::anyhow!("Invalid fate deck {}: {}", path.display(), e))?;
        let table = FateTable {
            deck,
            weights: catalog.weights.unwrap_or_default(),
            policy: catalog.policy.unwrap_or_default(),
        };

        tracing::debug!(
            "Loaded fate deck from {}: {} cards, policy={}",
            path.display(),
            table.deck.len(),
            table.policy
        );
        Ok(table)
    }
}
