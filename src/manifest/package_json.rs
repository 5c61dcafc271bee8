//! package.json model for Node.js projects
//!
//! Handles:
//! - dependencies
//! - devDependencies
//!
//! Other sections are ignored. Entries keep their declaration order.

use crate::domain::{DependencyKind, ManifestEntry};
use crate::error::ManifestError;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// The dependency sections of a package.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    #[serde(default)]
    dependencies: Option<IndexMap<String, String>>,
    #[serde(default)]
    dev_dependencies: Option<IndexMap<String, String>>,
}

impl PackageJson {
    /// Parse package.json content; `path` is only used for error messages.
    /// A document that is just `null` has no sections.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        serde_json::from_str::<Option<Self>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))
    }

    /// Declared production dependencies (name → version)
    pub fn dependencies(&self) -> impl Iterator<Item = (&str, &str)> {
        Self::section(&self.dependencies)
    }

    /// Declared development dependencies (name → version)
    pub fn dev_dependencies(&self) -> impl Iterator<Item = (&str, &str)> {
        Self::section(&self.dev_dependencies)
    }

    /// Total number of declared entries across both sections
    pub fn len(&self) -> usize {
        self.dependencies().count() + self.dev_dependencies().count()
    }

    /// Returns true when neither section declares anything
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten both sections into entries, production first
    pub fn entries(&self) -> Vec<ManifestEntry> {
        let production = self
            .dependencies()
            .map(|(name, version)| ManifestEntry::new(name, version, DependencyKind::Production));
        let development = self
            .dev_dependencies()
            .map(|(name, version)| ManifestEntry::new(name, version, DependencyKind::Development));
        production.chain(development).collect()
    }

    fn section(
        deps: &Option<IndexMap<String, String>>,
    ) -> impl Iterator<Item = (&str, &str)> {
        deps.iter()
            .flat_map(|map| map.iter())
            .map(|(name, version)| (name.as_str(), version.as_str()))
    }
}
