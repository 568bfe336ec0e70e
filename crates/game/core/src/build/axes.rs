//! The three build axes.
//!
//! Each axis is a closed enumeration. Invalid values cannot be represented;
//! the only runtime check lives in [`parse_axis`], used where string data from
//! class-definition files enters the engine.

use core::str::FromStr;

use crate::error::BuildError;

/// Identifies one of the three build knobs.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Axis {
    Weight,
    Range,
    Spread,
}

/// Body weight of a unit.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Weight {
    /// Sturdy and accurate, slow and easy to hit.
    Heavy,
    /// Quick and evasive, fragile and less accurate.
    Light,
}

/// How far a unit attacks.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AttackRange {
    Close,
    Long,
}

/// Whether an attack hits one target or an area.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AttackSpread {
    Narrow,
    Broad,
}

/// Shared behaviour of the three axis enumerations.
pub trait AxisValue: Copy + FromStr + core::fmt::Display {
    /// Which knob this enumeration represents.
    const AXIS: Axis;

    /// Every member of the enumeration.
    const ALL: [Self; 2];
}

impl AxisValue for Weight {
    const AXIS: Axis = Axis::Weight;
    const ALL: [Self; 2] = [Weight::Heavy, Weight::Light];
}

impl AxisValue for AttackRange {
    const AXIS: Axis = Axis::Range;
    const ALL: [Self; 2] = [AttackRange::Close, AttackRange::Long];
}

impl AxisValue for AttackSpread {
    const AXIS: Axis = Axis::Spread;
    const ALL: [Self; 2] = [AttackSpread::Narrow, AttackSpread::Broad];
}

/// Maps a string onto an axis enumeration, ignoring ASCII case.
///
/// Anything outside the enumeration yields [`BuildError::InvalidAxisValue`].
pub fn parse_axis<T: AxisValue>(value: &str) -> Result<T, BuildError> {
    value
        .parse::<T>()
        .map_err(|_| BuildError::InvalidAxisValue {
            axis: T::AXIS,
            value: value.to_owned(),
        })
}

/// One value per axis: the full input of the build factory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSelection {
    pub weight: Weight,
    pub range: AttackRange,
    pub spread: AttackSpread,
}

impl AxisSelection {
    pub const fn new(weight: Weight, range: AttackRange, spread: AttackSpread) -> Self {
        Self {
            weight,
            range,
            spread,
        }
    }

    /// Parses all three axes, failing on the first invalid one.
    ///
    /// Axes are checked in weight, range, spread order.
    pub fn parse(weight: &str, range: &str, spread: &str) -> Result<Self, BuildError> {
        Ok(Self {
            weight: parse_axis(weight)?,
            range: parse_axis(range)?,
            spread: parse_axis(spread)?,
        })
    }

    /// Every one of the eight combinations, weight-major.
    pub fn all() -> impl Iterator<Item = AxisSelection> {
        Weight::ALL.into_iter().flat_map(|weight| {
            AttackRange::ALL.into_iter().flat_map(move |range| {
                AttackSpread::ALL
                    .into_iter()
                    .map(move |spread| AxisSelection::new(weight, range, spread))
            })
        })
    }

    /// Name used when the caller does not supply one: `<weight>-<range>-<spread>`.
    pub fn default_name(&self) -> String {
        format!("{}-{}-{}", self.weight, self.range, self.spread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_values_parse_case_insensitively() {
        assert_eq!(parse_axis::<Weight>("HEAVY"), Ok(Weight::Heavy));
        assert_eq!(parse_axis::<AttackRange>("Long"), Ok(AttackRange::Long));
        assert_eq!(parse_axis::<AttackSpread>("broad"), Ok(AttackSpread::Broad));
    }

    #[test]
    fn unknown_value_reports_its_axis() {
        let err = parse_axis::<Weight>("medium").unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidAxisValue {
                axis: Axis::Weight,
                value: "medium".into()
            }
        );

        let err = parse_axis::<AttackSpread>("wide").unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidAxisValue {
                axis: Axis::Spread,
                ..
            }
        ));
    }

    #[test]
    fn selection_parse_stops_at_first_bad_axis() {
        let err = AxisSelection::parse("light", "far", "nowhere").unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidAxisValue {
                axis: Axis::Range,
                ..
            }
        ));
    }

    #[test]
    fn all_yields_eight_distinct_selections() {
        let all: Vec<_> = AxisSelection::all().collect();
        assert_eq!(all.len(), 8);
        for (i, a) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn default_name_uses_lowercase_axis_values() {
        let selection = AxisSelection::new(Weight::Light, AttackRange::Close, AttackSpread::Broad);
        assert_eq!(selection.default_name(), "light-close-broad");
    }
}
