//! Fate deck: weighted random event cards.
//!
//! Cards carry a [`Rarity`]. A single draw rolls the rarity against
//! [`RarityWeights`] and then picks uniformly within that rarity; a hand is
//! first split across rarities by [`rarity_distribution`].

pub mod card;
pub mod deck;
pub mod distribution;

pub use card::{FateCard, Rarity};
pub use deck::FateDeck;
pub use distribution::{RarityCounts, RarityPolicy, RarityWeights, rarity_distribution};
