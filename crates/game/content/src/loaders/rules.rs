//! Build rules loader.

use std::path::Path;

use tactics_core::BuildRules;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`BuildRules`] from TOML files.
///
/// ```toml
/// synergy = "weight_split"
///
/// [baseline]
/// health = 5
/// move = 2
/// attack_range = 4
/// attack_splash = 0
/// attack_damage = 1
/// attack_hit = 3
/// attack_evade = 3
/// ```
///
/// Both keys are optional and fall back to [`BuildRules::STANDARD`].
pub struct RulesLoader;

impl RulesLoader {
    pub fn load(path: &Path) -> LoadResult<BuildRules> {
        let content = read_file(path)?;
        let rules: BuildRules = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse build rules TOML: {}", e))?;

        tracing::debug!(
            "Loaded build rules from {}: synergy={}, baseline={:?}",
            path.display(),
            rules.synergy,
            rules.baseline
        );
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{AttackRange, AttackSpread, StatBlock, SynergyPolicy, Weight};
    use tempfile::TempDir;

    #[test]
    fn loads_legacy_baseline_and_policy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(
            &path,
            r#"
synergy = "range_spread_only"

[baseline]
health = 4
move = 2
attack_range = 5
attack_splash = 0
attack_damage = 1
attack_hit = 3
attack_evade = 3
"#,
        )
        .unwrap();

        let rules = RulesLoader::load(&path).unwrap();

        assert_eq!(rules.baseline, StatBlock::LEGACY_BASELINE);
        assert_eq!(rules.synergy, SynergyPolicy::RangeSpreadOnly);
    }

    #[test]
    fn empty_file_is_standard_rules() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(&path, "").unwrap();

        assert_eq!(RulesLoader::load(&path).unwrap(), BuildRules::STANDARD);
    }

    #[test]
    fn unknown_policy_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(&path, "synergy = \"chaos\"\n").unwrap();

        assert!(RulesLoader::load(&path).is_err());
    }

    #[test]
    fn extreme_baseline_builds_without_overflow() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(
            &path,
            r#"
[baseline]
health = 2147483647
move = -2147483648
attack_range = 2147483647
attack_splash = 0
attack_damage = 2147483647
attack_hit = 2147483647
attack_evade = -2147483648
"#,
        )
        .unwrap();

        let rules = RulesLoader::load(&path).unwrap();
        let unit =
            rules.make_unit_build(Weight::Heavy, AttackRange::Long, AttackSpread::Narrow, None);
        let stats = unit.stats();

        assert_eq!(stats.health, i32::MAX);
        assert_eq!(stats.movement, 1);
        assert_eq!(stats.attack_range, i32::MAX);
        assert_eq!(stats.attack_evade, 1);
        assert!(stats.meets_floors());
    }
}
