//! Class definition loader.
//!
//! Converts string-typed class records into finished unit builds.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tactics_core::{BuildRules, ClassSpec, UnitBuild};

use crate::loaders::{LoadResult, read_file};

/// Class catalog structure for RON files.
///
/// ```ron
/// (
///     classes: [
///         (name: Some("Heavy Archer"), weight: "heavy", range: "long", spread: "narrow"),
///         (weight: "Light", range: "Close", spread: "Broad"),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassCatalog {
    pub classes: Vec<ClassSpec>,
}

impl ClassCatalog {
    /// Builds every class under `rules`, in file order.
    ///
    /// Stops at the first record with an invalid axis value; the error names
    /// the record index and, if present, its name.
    pub fn build_all(&self, rules: &BuildRules) -> LoadResult<Vec<UnitBuild>> {
        self.classes
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                spec.build(rules).with_context(|| {
                    format!(
                        "Invalid class #{} ({})",
                        index,
                        spec.name.as_deref().unwrap_or("unnamed")
                    )
                })
            })
            .collect()
    }
}

/// Loader for class definitions from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Parse a class catalog without building it.
    pub fn load_catalog(path: &Path) -> LoadResult<ClassCatalog> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class catalog RON: {}", e))
    }

    /// Load and build every class in the catalog.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a ClassCatalog
    /// * `rules` - Build rules the classes are derived under
    pub fn load(path: &Path, rules: &BuildRules) -> LoadResult<Vec<UnitBuild>> {
        let catalog = Self::load_catalog(path)?;
        let units = catalog
            .build_all(rules)
            .with_context(|| format!("Failed to build classes from {}", path.display()))?;

        tracing::debug!("Loaded {} classes from {}", units.len(), path.display());
        Ok(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{Axis, BuildError, StatBlock};
    use tempfile::TempDir;

    fn write_catalog(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("classes.ron");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn loads_and_builds_classes() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(
            &dir,
            r#"(
                classes: [
                    (name: Some("Heavy Archer"), weight: "heavy", range: "long", spread: "narrow"),
                    (weight: "LIGHT", range: "Close", spread: "broad"),
                ],
            )"#,
        );

        let units = ClassLoader::load(&path, &BuildRules::STANDARD).unwrap();

        assert_eq!(units.len(), 2);
        assert_eq!(units[0].name(), "Heavy Archer");
        assert_eq!(*units[0].stats(), StatBlock::new(6, 1, 7, 0, 2, 4, 2));
        assert_eq!(units[1].name(), "light-close-broad");
    }

    #[test]
    fn invalid_axis_surfaces_build_error() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(
            &dir,
            r#"(
                classes: [
                    (name: Some("Ok"), weight: "heavy", range: "long", spread: "narrow"),
                    (name: Some("Tank"), weight: "medium", range: "close", spread: "broad"),
                ],
            )"#,
        );

        let err = ClassLoader::load(&path, &BuildRules::STANDARD).unwrap_err();

        let build_error = err.downcast_ref::<BuildError>().unwrap();
        assert_eq!(
            *build_error,
            BuildError::InvalidAxisValue {
                axis: Axis::Weight,
                value: "medium".into()
            }
        );
        let message = format!("{err:#}");
        assert!(message.contains("#1 (Tank)"), "{message}");
    }

    #[test]
    fn missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.ron");
        assert!(ClassLoader::load(&missing, &BuildRules::STANDARD).is_err());
    }
}
