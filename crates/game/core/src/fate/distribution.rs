//! How many cards of each rarity a hand should contain.

use super::card::Rarity;
use crate::error::DeckError;

/// Relative weight of each rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RarityWeights {
    pub common: u32,
    pub uncommon: u32,
    pub rare: u32,
}

impl RarityWeights {
    pub const fn new(common: u32, uncommon: u32, rare: u32) -> Self {
        Self {
            common,
            uncommon,
            rare,
        }
    }

    pub const fn get(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
        }
    }

    /// Sum of all three weights, saturating at `u32::MAX`.
    pub const fn total(&self) -> u32 {
        self.common
            .saturating_add(self.uncommon)
            .saturating_add(self.rare)
    }

    /// Rarity whose cumulative weight band contains `ticket` (1..=total).
    pub fn pick(&self, ticket: u32) -> Rarity {
        let mut upper = 0;
        for rarity in Rarity::ALL {
            upper = self.get(rarity).saturating_add(upper);
            if ticket <= upper {
                return rarity;
            }
        }
        Rarity::Rare
    }
}

impl Default for RarityWeights {
    fn default() -> Self {
        Self::new(60, 30, 10)
    }
}

/// Whether a hand is forced to contain a rare card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RarityPolicy {
    /// Plain proportional split, rare may round down to zero.
    #[default]
    Proportional,
    /// If the split gives no rare but at least one uncommon, trade one
    /// uncommon for a rare.
    GuaranteeRare,
}

/// Per-rarity card counts of a hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RarityCounts {
    pub common: usize,
    pub uncommon: usize,
    pub rare: usize,
}

impl RarityCounts {
    pub const fn get(&self, rarity: Rarity) -> usize {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
        }
    }

    pub const fn total(&self) -> usize {
        self.common + self.uncommon + self.rare
    }
}

/// Splits `hand_size` across rarities.
///
/// Rare and uncommon receive the floor of their proportional share; common
/// takes the remainder, so the counts always sum to `hand_size`.
pub fn rarity_distribution(
    hand_size: usize,
    weights: RarityWeights,
    policy: RarityPolicy,
) -> Result<RarityCounts, DeckError> {
    let total = Rarity::ALL
        .into_iter()
        .map(|rarity| u128::from(weights.get(rarity)))
        .sum::<u128>();
    if total == 0 {
        return Err(DeckError::ZeroWeights);
    }

    let mut rare = share(hand_size, weights.rare, total);
    let mut uncommon = share(hand_size, weights.uncommon, total);

    if policy == RarityPolicy::GuaranteeRare && rare == 0 && uncommon > 0 {
        rare = 1;
        uncommon -= 1;
    }

    Ok(RarityCounts {
        common: hand_size - rare - uncommon,
        uncommon,
        rare,
    })
}

/// `floor(hand_size * weight / total)`, computed wide so it cannot overflow.
///
/// `weight <= total`, so the result never exceeds `hand_size`.
fn share(hand_size: usize, weight: u32, total: u128) -> usize {
    let wide = hand_size as u128 * u128::from(weight) / total;
    usize::try_from(wide).unwrap_or(hand_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_hand_size() {
        for hand_size in 0..30 {
            for policy in [RarityPolicy::Proportional, RarityPolicy::GuaranteeRare] {
                let counts =
                    rarity_distribution(hand_size, RarityWeights::default(), policy).unwrap();
                assert_eq!(counts.total(), hand_size, "{hand_size} {policy}");
            }
        }
    }

    #[test]
    fn ten_card_hand_splits_by_weight() {
        let counts =
            rarity_distribution(10, RarityWeights::default(), RarityPolicy::Proportional).unwrap();
        assert_eq!(
            counts,
            RarityCounts {
                common: 6,
                uncommon: 3,
                rare: 1
            }
        );
    }

    #[test]
    fn guarantee_rare_trades_an_uncommon() {
        let weights = RarityWeights::default();

        let plain = rarity_distribution(5, weights, RarityPolicy::Proportional).unwrap();
        assert_eq!((plain.common, plain.uncommon, plain.rare), (4, 1, 0));

        let forced = rarity_distribution(5, weights, RarityPolicy::GuaranteeRare).unwrap();
        assert_eq!((forced.common, forced.uncommon, forced.rare), (4, 0, 1));
    }

    #[test]
    fn guarantee_rare_needs_an_uncommon_to_trade() {
        let counts =
            rarity_distribution(2, RarityWeights::default(), RarityPolicy::GuaranteeRare).unwrap();
        assert_eq!((counts.common, counts.uncommon, counts.rare), (2, 0, 0));
    }

    #[test]
    fn huge_hand_does_not_overflow() {
        let hand_size = usize::MAX / 5;
        for policy in [RarityPolicy::Proportional, RarityPolicy::GuaranteeRare] {
            let counts = rarity_distribution(hand_size, RarityWeights::default(), policy).unwrap();
            assert_eq!(counts.total(), hand_size);
            assert!(counts.rare > 0);
        }

        let counts = rarity_distribution(
            usize::MAX,
            RarityWeights::new(u32::MAX, u32::MAX, u32::MAX),
            RarityPolicy::Proportional,
        )
        .unwrap();
        assert_eq!(counts.total(), usize::MAX);
    }

    #[test]
    fn zero_weights_are_rejected() {
        let err = rarity_distribution(3, RarityWeights::new(0, 0, 0), RarityPolicy::Proportional)
            .unwrap_err();
        assert_eq!(err, DeckError::ZeroWeights);
    }

    #[test]
    fn saturated_weights_still_pick() {
        let weights = RarityWeights::new(u32::MAX, u32::MAX, 1);
        assert_eq!(weights.total(), u32::MAX);
        assert_eq!(weights.pick(u32::MAX), Rarity::Common);
    }

    #[test]
    fn pick_walks_cumulative_bands() {
        let weights = RarityWeights::default();
        assert_eq!(weights.pick(1), Rarity::Common);
        assert_eq!(weights.pick(60), Rarity::Common);
        assert_eq!(weights.pick(61), Rarity::Uncommon);
        assert_eq!(weights.pick(90), Rarity::Uncommon);
        assert_eq!(weights.pick(91), Rarity::Rare);
        assert_eq!(weights.pick(100), Rarity::Rare);
    }
}
