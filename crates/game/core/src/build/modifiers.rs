//! Per-axis modifier table.
//!
//! One delta per enum value, resolved by `const fn` match so the table is
//! fixed at compile time and has no mutation path.

use super::axes::{AttackRange, AttackSpread, AxisSelection, Weight};
use crate::stats::{StatDelta, StatField};

impl Weight {
    pub const fn modifier(self) -> StatDelta {
        match self {
            Weight::Heavy => StatDelta::EMPTY
                .with(StatField::Health, 1)
                .with(StatField::Move, -1)
                .with(StatField::AttackHit, 1)
                .with(StatField::AttackEvade, -1),
            Weight::Light => StatDelta::EMPTY
                .with(StatField::Health, -1)
                .with(StatField::Move, 1)
                .with(StatField::AttackHit, -1)
                .with(StatField::AttackEvade, 1),
        }
    }
}

impl AttackRange {
    pub const fn modifier(self) -> StatDelta {
        match self {
            AttackRange::Long => StatDelta::EMPTY.with(StatField::AttackRange, 2),
            AttackRange::Close => StatDelta::EMPTY.with(StatField::AttackRange, -2),
        }
    }
}

impl AttackSpread {
    pub const fn modifier(self) -> StatDelta {
        match self {
            // Splash stays at the baseline value: single-target.
            AttackSpread::Narrow => StatDelta::EMPTY
                .with(StatField::AttackSplash, 0)
                .with(StatField::AttackDamage, 1),
            AttackSpread::Broad => StatDelta::EMPTY.with(StatField::AttackSplash, 1),
        }
    }
}

/// The weight, range and spread deltas for `selection`, in that order.
pub const fn axis_modifiers(selection: AxisSelection) -> [StatDelta; 3] {
    [
        selection.weight.modifier(),
        selection.range.modifier(),
        selection.spread.modifier(),
    ]
}
