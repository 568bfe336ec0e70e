//! Content factory for loading every data file from one directory.

use std::path::{Path, PathBuf};

use tactics_core::{BuildRules, GameConfig, UnitBuild};

use crate::loaders::{ClassLoader, ConfigLoader, FateDeckLoader, FateTable, LoadResult, RulesLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── rules.toml
/// ├── classes.ron
/// └── fate.ron
/// ```
///
/// The `*_or_default` helpers treat a missing file as "use the built-in
/// content"; a file that exists but fails to parse is still an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const RULES_FILE: &'static str = "rules.toml";
    pub const CLASSES_FILE: &'static str = "classes.ron";
    pub const FATE_FILE: &'static str = "fate.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Load session configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.path(Self::CONFIG_FILE))
    }

    /// Like [`Self::load_config`], falling back to defaults when the file is absent.
    pub fn load_config_or_default(&self) -> LoadResult<GameConfig> {
        let path = self.path(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("No {} found, using default config", path.display());
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load build rules from `rules.toml`.
    pub fn load_rules(&self) -> LoadResult<BuildRules> {
        RulesLoader::load(&self.path(Self::RULES_FILE))
    }

    /// Like [`Self::load_rules`], falling back to [`BuildRules::STANDARD`].
    pub fn load_rules_or_default(&self) -> LoadResult<BuildRules> {
        let path = self.path(Self::RULES_FILE);
        if !path.exists() {
            tracing::debug!("No {} found, using standard rules", path.display());
            return Ok(BuildRules::STANDARD);
        }
        RulesLoader::load(&path)
    }

    /// Load and build the classes in `classes.ron`.
    pub fn load_classes(&self, rules: &BuildRules) -> LoadResult<Vec<UnitBuild>> {
        ClassLoader::load(&self.path(Self::CLASSES_FILE), rules)
    }

    /// Like [`Self::load_classes`], falling back to the stock presets.
    pub fn load_classes_or_presets(&self, rules: &BuildRules) -> LoadResult<Vec<UnitBuild>> {
        let path = self.path(Self::CLASSES_FILE);
        if !path.exists() {
            tracing::debug!("No {} found, using preset classes", path.display());
            return Ok(tactics_core::presets::all(rules));
        }
        ClassLoader::load(&path, rules)
    }

    /// Load the fate deck from `fate.ron`, `None` when the file is absent.
    pub fn load_fate(&self) -> LoadResult<Option<FateTable>> {
        let path = self.path(Self::FATE_FILE);
        if !path.exists() {
            return Ok(None);
        }
        FateDeckLoader::load(&path).map(Some)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
