//! The eight stock classes shown on the card rack.

use super::axes::{AttackRange, AttackSpread, AxisSelection, Weight};
use super::rules::BuildRules;
use super::unit::UnitBuild;

/// Display name and axis selection of every stock class, in rack order.
pub const PRESETS: [(&str, AxisSelection); 8] = [
    (
        "Heavy Archer",
        AxisSelection::new(Weight::Heavy, AttackRange::Long, AttackSpread::Narrow),
    ),
    (
        "Light Archer",
        AxisSelection::new(Weight::Light, AttackRange::Long, AttackSpread::Narrow),
    ),
    (
        "Heavy Bomber",
        AxisSelection::new(Weight::Heavy, AttackRange::Long, AttackSpread::Broad),
    ),
    (
        "Light Bomber",
        AxisSelection::new(Weight::Light, AttackRange::Long, AttackSpread::Broad),
    ),
    (
        "Heavy Duelist",
        AxisSelection::new(Weight::Heavy, AttackRange::Close, AttackSpread::Narrow),
    ),
    (
        "Light Duelist",
        AxisSelection::new(Weight::Light, AttackRange::Close, AttackSpread::Narrow),
    ),
    (
        "Heavy Brawler",
        AxisSelection::new(Weight::Heavy, AttackRange::Close, AttackSpread::Broad),
    ),
    (
        "Light Brawler",
        AxisSelection::new(Weight::Light, AttackRange::Close, AttackSpread::Broad),
    ),
];

/// Builds every stock class under `rules`.
pub fn all(rules: &BuildRules) -> Vec<UnitBuild> {
    PRESETS
        .iter()
        .map(|(name, selection)| rules.build_selection(*selection, Some(*name)))
        .collect()
}

/// Looks up a stock class by display name, ignoring ASCII case.
pub fn find(rules: &BuildRules, name: &str) -> Option<UnitBuild> {
    PRESETS
        .iter()
        .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
        .map(|(preset, selection)| rules.build_selection(*selection, Some(*preset)))
}
