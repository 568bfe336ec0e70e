//! The seven-attribute stat block and its composition rules.
//!
//! ```text
//! baseline ── apply(deltas…) ──▶ pre-clamp block ── clamp() ──▶ finished block
//! ```
//!
//! Composition is a plain additive fold, so the order of deltas never matters.
//! Clamping raises each field to its floor and runs exactly once, after every
//! delta has been folded in.

use super::delta::{StatDelta, StatField};

/// Stat block of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub health: i32,
    /// Max squares per turn.
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    pub movement: i32,
    /// Max squares for attacks.
    pub attack_range: i32,
    /// 0 is single-target, 1 and above is an area radius.
    pub attack_splash: i32,
    /// Damage per successful hit.
    pub attack_damage: i32,
    /// Added to the attack roll.
    pub attack_hit: i32,
    /// Added to the defense roll.
    pub attack_evade: i32,
}

impl StatBlock {
    /// Archetypal unit before any axis is applied.
    pub const BASELINE: Self = Self::new(5, 2, 4, 0, 1, 3, 3);

    /// Earlier baseline with one less health and one more range.
    pub const LEGACY_BASELINE: Self = Self::new(4, 2, 5, 0, 1, 3, 3);

    pub const fn new(
        health: i32,
        movement: i32,
        attack_range: i32,
        attack_splash: i32,
        attack_damage: i32,
        attack_hit: i32,
        attack_evade: i32,
    ) -> Self {
        Self {
            health,
            movement,
            attack_range,
            attack_splash,
            attack_damage,
            attack_hit,
            attack_evade,
        }
    }

    pub const fn get(&self, field: StatField) -> i32 {
        match field {
            StatField::Health => self.health,
            StatField::Move => self.movement,
            StatField::AttackRange => self.attack_range,
            StatField::AttackSplash => self.attack_splash,
            StatField::AttackDamage => self.attack_damage,
            StatField::AttackHit => self.attack_hit,
            StatField::AttackEvade => self.attack_evade,
        }
    }

    fn slot_mut(&mut self, field: StatField) -> &mut i32 {
        match field {
            StatField::Health => &mut self.health,
            StatField::Move => &mut self.movement,
            StatField::AttackRange => &mut self.attack_range,
            StatField::AttackSplash => &mut self.attack_splash,
            StatField::AttackDamage => &mut self.attack_damage,
            StatField::AttackHit => &mut self.attack_hit,
            StatField::AttackEvade => &mut self.attack_evade,
        }
    }

    /// Folds every delta into a copy of `self`.
    ///
    /// For each field the result is this block's value plus the sum of that
    /// field across all deltas, saturating at the `i32` bounds. No clamping
    /// happens here.
    #[must_use]
    pub fn apply<'a, I>(&self, deltas: I) -> Self
    where
        I: IntoIterator<Item = &'a StatDelta>,
    {
        deltas.into_iter().fold(*self, |mut acc, delta| {
            for field in StatField::ALL {
                let slot = acc.slot_mut(field);
                *slot = (*slot).saturating_add(delta.get(field));
            }
            acc
        })
    }

    /// Raises every field to its floor.
    ///
    /// Values already at or above their floor pass through untouched.
    #[must_use]
    pub fn clamp(self) -> Self {
        let mut clamped = self;
        for field in StatField::ALL {
            let slot = clamped.slot_mut(field);
            *slot = (*slot).max(field.floor());
        }
        clamped
    }

    /// True when every field sits at or above its floor.
    pub fn meets_floors(&self) -> bool {
        StatField::ALL
            .into_iter()
            .all(|field| self.get(field) >= field.floor())
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::BASELINE
    }
}
