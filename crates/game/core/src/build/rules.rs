//! Build rules: the baseline template plus the active synergy policy.

use super::axes::{AttackRange, AttackSpread, AxisSelection, Weight};
use super::modifiers::axis_modifiers;
use super::synergy::SynergyPolicy;
use super::unit::UnitBuild;
use crate::error::BuildError;
use crate::stats::StatBlock;

/// Rule set the factory derives stat blocks from.
///
/// Construct once (or load from data) and share by reference. The per-axis
/// modifier table is a compile-time constant and is not part of this value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildRules {
    pub baseline: StatBlock,
    pub synergy: SynergyPolicy,
}

impl BuildRules {
    /// Baseline [`StatBlock::BASELINE`] with weight-split synergies.
    pub const STANDARD: Self = Self {
        baseline: StatBlock::BASELINE,
        synergy: SynergyPolicy::WeightSplit,
    };

    pub const fn new(baseline: StatBlock, synergy: SynergyPolicy) -> Self {
        Self { baseline, synergy }
    }

    #[must_use]
    pub const fn with_baseline(mut self, baseline: StatBlock) -> Self {
        self.baseline = baseline;
        self
    }

    #[must_use]
    pub const fn with_synergy(mut self, synergy: SynergyPolicy) -> Self {
        self.synergy = synergy;
        self
    }

    /// Folds the three axis deltas and the cross-axis delta into the
    /// baseline, without clamping.
    pub fn compose(&self, selection: AxisSelection) -> StatBlock {
        let [weight, range, spread] = axis_modifiers(selection);
        let cross = self.synergy.cross_modifiers(selection);

        self.baseline.apply([&weight, &range, &spread, &cross])
    }

    /// Finished stat block for `selection`: composed, then clamped once.
    pub fn derive_stats(&self, selection: AxisSelection) -> StatBlock {
        self.compose(selection).clamp()
    }

    /// Builds a unit from typed axis values.
    ///
    /// `name` defaults to `<weight>-<range>-<spread>`.
    pub fn make_unit_build(
        &self,
        weight: Weight,
        range: AttackRange,
        spread: AttackSpread,
        name: Option<&str>,
    ) -> UnitBuild {
        self.build_selection(AxisSelection::new(weight, range, spread), name)
    }

    pub fn build_selection(&self, selection: AxisSelection, name: Option<&str>) -> UnitBuild {
        let name = name.map_or_else(|| selection.default_name(), str::to_owned);
        UnitBuild::new(name, selection, self.derive_stats(selection))
    }

    /// Builds a unit from raw axis strings.
    ///
    /// All three strings are validated before any modifier is looked up.
    pub fn make_unit_build_from_strs(
        &self,
        weight: &str,
        range: &str,
        spread: &str,
        name: Option<&str>,
    ) -> Result<UnitBuild, BuildError> {
        let selection = AxisSelection::parse(weight, range, spread)?;
        Ok(self.build_selection(selection, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Axis;

    #[test]
    fn standard_rules_are_the_default() {
        assert_eq!(BuildRules::default(), BuildRules::STANDARD);
    }

    #[test]
    fn compose_heavy_archer_matches_hand_calculation() {
        let selection = AxisSelection::new(Weight::Heavy, AttackRange::Long, AttackSpread::Narrow);
        let composed = BuildRules::STANDARD.compose(selection);

        assert_eq!(composed, StatBlock::new(6, 1, 7, 0, 2, 4, 2));
        assert_eq!(composed.clamp(), composed);
    }

    #[test]
    fn legacy_baseline_shifts_health_and_range() {
        let rules = BuildRules::STANDARD.with_baseline(StatBlock::LEGACY_BASELINE);
        let selection = AxisSelection::new(Weight::Light, AttackRange::Long, AttackSpread::Broad);

        let stats = rules.derive_stats(selection);
        let standard = BuildRules::STANDARD.derive_stats(selection);

        assert_eq!(stats.health, standard.health - 1);
        assert_eq!(stats.attack_range, standard.attack_range + 1);
    }

    #[test]
    fn degenerate_baseline_is_clamped_not_rejected() {
        let rules = BuildRules::STANDARD.with_baseline(StatBlock::new(0, 0, 0, 0, 0, 0, 0));

        for selection in AxisSelection::all() {
            let stats = rules.derive_stats(selection);
            assert!(stats.meets_floors(), "{selection:?} -> {stats:?}");
        }
    }

    #[test]
    fn from_strs_rejects_before_lookup() {
        let err = BuildRules::STANDARD
            .make_unit_build_from_strs("med", "long", "narrow", None)
            .unwrap_err();

        assert_eq!(
            err,
            BuildError::InvalidAxisValue {
                axis: Axis::Weight,
                value: "med".into()
            }
        );
    }

    #[test]
    fn synergy_policy_changes_only_cross_delta() {
        let selection = AxisSelection::new(Weight::Heavy, AttackRange::Close, AttackSpread::Broad);
        let weight_split = BuildRules::STANDARD.compose(selection);
        let no_synergy = BuildRules::STANDARD
            .with_synergy(SynergyPolicy::None)
            .compose(selection);

        assert_eq!(weight_split.movement, no_synergy.movement + 1);
        assert_eq!(weight_split.attack_damage, no_synergy.attack_damage + 1);
        assert_eq!(weight_split.health, no_synergy.health);
    }
}
