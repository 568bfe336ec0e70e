//! Rarity-bucketed fate deck.

use super::card::{FateCard, Rarity};
use super::distribution::{RarityPolicy, RarityWeights, rarity_distribution};
use crate::config::GameConfig;
use crate::error::DeckError;
use crate::rng::{Dice, RngOracle, RollContext};

/// Non-empty deck of fate cards, bucketed by rarity.
///
/// Draws are with replacement: the deck itself never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FateDeck {
    common: Vec<FateCard>,
    uncommon: Vec<FateCard>,
    rare: Vec<FateCard>,
}

impl FateDeck {
    pub fn new(cards: impl IntoIterator<Item = FateCard>) -> Result<Self, DeckError> {
        let mut deck = Self {
            common: Vec::new(),
            uncommon: Vec::new(),
            rare: Vec::new(),
        };
        for card in cards {
            match card.rarity {
                Rarity::Common => deck.common.push(card),
                Rarity::Uncommon => deck.uncommon.push(card),
                Rarity::Rare => deck.rare.push(card),
            }
        }

        if deck.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(deck)
    }

    pub fn bucket(&self, rarity: Rarity) -> &[FateCard] {
        match rarity {
            Rarity::Common => &self.common,
            Rarity::Uncommon => &self.uncommon,
            Rarity::Rare => &self.rare,
        }
    }

    pub fn len(&self) -> usize {
        self.common.len() + self.uncommon.len() + self.rare.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bucket to draw from for `rarity`: its own if non-empty, otherwise
    /// the nearest non-empty one.
    fn resolve_bucket(&self, rarity: Rarity) -> &[FateCard] {
        core::iter::once(rarity)
            .chain(rarity.fallbacks())
            .map(|candidate| self.bucket(candidate))
            .find(|bucket| !bucket.is_empty())
            .unwrap_or(&[])
    }

    fn draw_from<R: RngOracle>(&self, rarity: Rarity, dice: &mut Dice<R>) -> &FateCard {
        let bucket = self.resolve_bucket(rarity);
        // deck is non-empty, so some bucket is too
        &bucket[dice.index(bucket.len(), RollContext::FateCard)]
    }

    /// Draws one card: a weighted rarity roll, then a uniform pick within that
    /// rarity.
    pub fn draw<R: RngOracle>(
        &self,
        weights: RarityWeights,
        dice: &mut Dice<R>,
    ) -> Result<&FateCard, DeckError> {
        let total = weights.total();
        if total == 0 {
            return Err(DeckError::ZeroWeights);
        }
        let rarity = weights.pick(dice.range(1, total, RollContext::FateRarity));
        Ok(self.draw_from(rarity, dice))
    }

    /// Draws a hand of `hand_size` cards split by [`rarity_distribution`].
    ///
    /// Commons come first, then uncommons, then rares.
    pub fn draw_hand<R: RngOracle>(
        &self,
        hand_size: usize,
        weights: RarityWeights,
        policy: RarityPolicy,
        dice: &mut Dice<R>,
    ) -> Result<Vec<&FateCard>, DeckError> {
        let counts = rarity_distribution(hand_size, weights, policy)?;

        let mut hand = Vec::with_capacity(hand_size.min(GameConfig::MAX_FATE_HAND_SIZE));
        for rarity in Rarity::ALL {
            for _ in 0..counts.get(rarity) {
                hand.push(self.draw_from(rarity, dice));
            }
        }
        Ok(hand)
    }
}
