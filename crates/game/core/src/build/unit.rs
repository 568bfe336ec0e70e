//! Finished unit builds and the string records they can be built from.

use super::axes::AxisSelection;
use super::rules::BuildRules;
use crate::error::BuildError;
use crate::stats::StatBlock;

/// Immutable result of the build factory.
///
/// Fields are private: a `UnitBuild` only comes out of
/// [`BuildRules::make_unit_build`], so its stat block always meets the floors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnitBuild {
    name: String,
    selection: AxisSelection,
    stats: StatBlock,
}

impl UnitBuild {
    pub(crate) fn new(name: String, selection: AxisSelection, stats: StatBlock) -> Self {
        debug_assert!(stats.meets_floors());
        Self {
            name,
            selection,
            stats,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Axis values the build was derived from.
    pub fn selection(&self) -> AxisSelection {
        self.selection
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }
}

/// Class definition as it appears in external data: plain strings per axis.
///
/// Axis strings map case-insensitively onto the enums; anything else is
/// rejected by [`ClassSpec::build`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassSpec {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    pub weight: String,
    pub range: String,
    pub spread: String,
}

impl ClassSpec {
    pub fn new(
        name: Option<&str>,
        weight: impl Into<String>,
        range: impl Into<String>,
        spread: impl Into<String>,
    ) -> Self {
        Self {
            name: name.map(str::to_owned),
            weight: weight.into(),
            range: range.into(),
            spread: spread.into(),
        }
    }

    /// Validates the axis strings, then runs the factory under `rules`.
    pub fn build(&self, rules: &BuildRules) -> Result<UnitBuild, BuildError> {
        rules.make_unit_build_from_strs(
            &self.weight,
            &self.range,
            &self.spread,
            self.name.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Axis;

    #[test]
    fn class_spec_builds_with_mixed_case_axes() {
        let spec = ClassSpec::new(Some("Scout"), "Light", "LONG", "narrow");
        let unit = spec.build(&BuildRules::default()).unwrap();

        assert_eq!(unit.name(), "Scout");
        assert_eq!(unit.selection().default_name(), "light-long-narrow");
    }

    #[test]
    fn class_spec_without_name_uses_default() {
        let spec = ClassSpec::new(None, "heavy", "close", "broad");
        let unit = spec.build(&BuildRules::default()).unwrap();

        assert_eq!(unit.name(), "heavy-close-broad");
    }

    #[test]
    fn class_spec_with_bad_spread_fails() {
        let spec = ClassSpec::new(Some("Oops"), "heavy", "close", "wide");
        let err = spec.build(&BuildRules::default()).unwrap_err();

        assert_eq!(
            err,
            BuildError::InvalidAxisValue {
                axis: Axis::Spread,
                value: "wide".into()
            }
        );
    }
}
