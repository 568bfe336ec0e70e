//! Unit build engine.
//!
//! Three categorical knobs (weight, attack range, attack spread) derive a
//! seven-attribute [`StatBlock`](crate::StatBlock):
//!
//! ```text
//! clamp(baseline + weight + range + spread + cross(weight, range, spread))
//! ```
//!
//! - [`axes`]: the closed axis enumerations and the string boundary
//! - [`modifiers`]: per-axis delta table
//! - [`synergy`]: cross-axis archetype rules and policies
//! - [`rules`]: baseline + policy, and the factory itself
//! - [`unit`]: the immutable [`UnitBuild`] result
//!
//! The engine is pure: no RNG, no clock, no I/O. Identical inputs always give
//! identical stat blocks.

pub mod axes;
pub mod modifiers;
pub mod presets;
pub mod rules;
pub mod synergy;
pub mod unit;

pub use axes::{AttackRange, AttackSpread, Axis, AxisSelection, AxisValue, Weight, parse_axis};
pub use modifiers::axis_modifiers;
pub use rules::BuildRules;
pub use synergy::{Archetype, SynergyPolicy, cross_modifiers};
pub use unit::{ClassSpec, UnitBuild};

/// Builds a unit under [`BuildRules::STANDARD`].
///
/// `name` defaults to `<weight>-<range>-<spread>`.
pub fn make_unit_build(
    weight: Weight,
    range: AttackRange,
    spread: AttackSpread,
    name: Option<&str>,
) -> UnitBuild {
    BuildRules::STANDARD.make_unit_build(weight, range, spread, name)
}

/// String-input variant of [`make_unit_build`].
///
/// Fails with [`BuildError::InvalidAxisValue`](crate::BuildError::InvalidAxisValue)
/// when any axis string is not a member of its enumeration.
pub fn make_unit_build_from_strs(
    weight: &str,
    range: &str,
    spread: &str,
    name: Option<&str>,
) -> Result<UnitBuild, crate::BuildError> {
    BuildRules::STANDARD.make_unit_build_from_strs(weight, range, spread, name)
}
