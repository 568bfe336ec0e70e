//! Sparse stat adjustments.
//!
//! A [`StatDelta`] carries an optional signed adjustment per stat field. Absent
//! fields contribute nothing when folded into a [`StatBlock`](super::StatBlock),
//! so every lookup goes through [`StatDelta::get`], which is total over all
//! seven fields.

/// The seven attributes of a unit stat block.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatField {
    Health,
    Move,
    AttackRange,
    AttackSplash,
    AttackDamage,
    AttackHit,
    AttackEvade,
}

impl StatField {
    /// All fields in card display order.
    pub const ALL: [StatField; 7] = [
        StatField::Health,
        StatField::Move,
        StatField::AttackRange,
        StatField::AttackSplash,
        StatField::AttackDamage,
        StatField::AttackHit,
        StatField::AttackEvade,
    ];

    /// Lowest value a finished stat block may hold for this field.
    ///
    /// Splash is the only field allowed to reach zero (single-target).
    pub const fn floor(self) -> i32 {
        match self {
            StatField::AttackSplash => 0,
            _ => 1,
        }
    }
}

/// Sparse, signed adjustment over the seven stat fields.
///
/// Deltas are plain data: they never mutate a stat block themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatDelta {
    pub health: Option<i32>,
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    pub movement: Option<i32>,
    pub attack_range: Option<i32>,
    pub attack_splash: Option<i32>,
    pub attack_damage: Option<i32>,
    pub attack_hit: Option<i32>,
    pub attack_evade: Option<i32>,
}

impl StatDelta {
    /// A delta with no fields present.
    pub const EMPTY: Self = Self {
        health: None,
        movement: None,
        attack_range: None,
        attack_splash: None,
        attack_damage: None,
        attack_hit: None,
        attack_evade: None,
    };

    /// A delta with every field present and set to zero.
    pub const ZEROED: Self = Self {
        health: Some(0),
        movement: Some(0),
        attack_range: Some(0),
        attack_splash: Some(0),
        attack_damage: Some(0),
        attack_hit: Some(0),
        attack_evade: Some(0),
    };

    /// Raw access to a field, `None` when the delta does not mention it.
    pub const fn field(&self, field: StatField) -> Option<i32> {
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

    /// Adjustment for `field`, treating an absent field as zero.
    pub const fn get(&self, field: StatField) -> i32 {
        match self.field(field) {
            Some(value) => value,
            None => 0,
        }
    }

    /// Returns a copy with `field` set to `value` (overwriting any previous entry).
    #[must_use]
    pub const fn with(self, field: StatField, value: i32) -> Self {
        let mut delta = self;
        let slot = Some(value);
        match field {
            StatField::Health => delta.health = slot,
            StatField::Move => delta.movement = slot,
            StatField::AttackRange => delta.attack_range = slot,
            StatField::AttackSplash => delta.attack_splash = slot,
            StatField::AttackDamage => delta.attack_damage = slot,
            StatField::AttackHit => delta.attack_hit = slot,
            StatField::AttackEvade => delta.attack_evade = slot,
        }
        delta
    }

    /// Returns a copy with `amount` added on top of the current entry for `field`.
    #[must_use]
    pub const fn adjust(self, field: StatField, amount: i32) -> Self {
        self.with(field, self.get(field).saturating_add(amount))
    }

    /// Field-wise sum of two deltas. A field is present when either side has it.
    #[must_use]
    pub fn combine(self, other: StatDelta) -> Self {
        StatField::ALL
            .into_iter()
            .fold(StatDelta::EMPTY, |acc, field| {
                match (self.field(field), other.field(field)) {
                    (None, None) => acc,
                    (lhs, rhs) => {
                        acc.with(field, lhs.unwrap_or(0).saturating_add(rhs.unwrap_or(0)))
                    }
                }
            })
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        StatField::ALL
            .into_iter()
            .all(|field| self.field(field).is_none())
    }

    /// True when every field contributes zero, present or not.
    pub fn is_noop(&self) -> bool {
        StatField::ALL.into_iter().all(|field| self.get(field) == 0)
    }
}
