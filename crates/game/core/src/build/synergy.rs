//! Cross-axis synergies and penalties.
//!
//! The range×spread pair names an [`Archetype`]; the active
//! [`SynergyPolicy`] then decides the extra delta for that archetype, either
//! split by weight or applied uniformly.
//!
//! | Archetype | Heavy               | Light                  |
//! |-----------|---------------------|------------------------|
//! | Archer    | range +1            | damage -1              |
//! | Bomber    | range -1, damage +1 | range -2               |
//! | Brawler   | move +1, damage +1  | move +1, range -1      |
//! | Duelist   | move +1             | move +1, damage -1, range -1 |

use super::axes::{AttackRange, AttackSpread, AxisSelection, Weight};
use crate::stats::{StatDelta, StatField};

/// Named range×spread combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Archetype {
    /// Long, narrow.
    Archer,
    /// Long, broad.
    Bomber,
    /// Close, broad.
    Brawler,
    /// Close, narrow.
    Duelist,
}

impl Archetype {
    pub const fn of(range: AttackRange, spread: AttackSpread) -> Self {
        match (range, spread) {
            (AttackRange::Long, AttackSpread::Narrow) => Archetype::Archer,
            (AttackRange::Long, AttackSpread::Broad) => Archetype::Bomber,
            (AttackRange::Close, AttackSpread::Broad) => Archetype::Brawler,
            (AttackRange::Close, AttackSpread::Narrow) => Archetype::Duelist,
        }
    }

    pub const fn from_selection(selection: AxisSelection) -> Self {
        Self::of(selection.range, selection.spread)
    }
}

/// Which cross-axis rule set is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SynergyPolicy {
    /// Every archetype split by weight (see module table).
    #[default]
    WeightSplit,
    /// One adjustment per archetype, weight ignored.
    ///
    /// Archer range +1, Bomber range -1, Brawler move +1, Duelist move +1.
    RangeSpreadOnly,
    /// No cross-axis adjustment at all.
    None,
}

impl SynergyPolicy {
    /// Extra delta layered on top of the per-axis modifiers.
    ///
    /// Total over every selection. The result starts from an all-zero,
    /// fully-populated delta, so combinations without a rule come back as
    /// zeros rather than failing.
    pub const fn cross_modifiers(self, selection: AxisSelection) -> StatDelta {
        let delta = StatDelta::ZEROED;
        let archetype = Archetype::from_selection(selection);

        match self {
            SynergyPolicy::None => delta,
            SynergyPolicy::RangeSpreadOnly => match archetype {
                Archetype::Archer => delta.adjust(StatField::AttackRange, 1),
                Archetype::Bomber => delta.adjust(StatField::AttackRange, -1),
                Archetype::Brawler | Archetype::Duelist => delta.adjust(StatField::Move, 1),
            },
            SynergyPolicy::WeightSplit => match (archetype, selection.weight) {
                (Archetype::Archer, Weight::Heavy) => delta.adjust(StatField::AttackRange, 1),
                (Archetype::Archer, Weight::Light) => delta.adjust(StatField::AttackDamage, -1),
                (Archetype::Bomber, Weight::Heavy) => delta
                    .adjust(StatField::AttackRange, -1)
                    .adjust(StatField::AttackDamage, 1),
                (Archetype::Bomber, Weight::Light) => delta.adjust(StatField::AttackRange, -2),
                (Archetype::Brawler, Weight::Heavy) => delta
                    .adjust(StatField::Move, 1)
                    .adjust(StatField::AttackDamage, 1),
                (Archetype::Brawler, Weight::Light) => delta
                    .adjust(StatField::Move, 1)
                    .adjust(StatField::AttackRange, -1),
                (Archetype::Duelist, Weight::Heavy) => delta.adjust(StatField::Move, 1),
                (Archetype::Duelist, Weight::Light) => delta
                    .adjust(StatField::Move, 1)
                    .adjust(StatField::AttackDamage, -1)
                    .adjust(StatField::AttackRange, -1),
            },
        }
    }
}

/// Cross-axis delta under the default [`SynergyPolicy::WeightSplit`] rules.
pub const fn cross_modifiers(selection: AxisSelection) -> StatDelta {
    SynergyPolicy::WeightSplit.cross_modifiers(selection)
}
