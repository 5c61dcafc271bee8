//! Manifest entry structures

use super::DependencyKind;
use std::fmt;

/// A dependency as declared in package.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Package name
    pub name: String,
    /// Version string exactly as declared (may carry a range prefix)
    pub declared_version: String,
    /// Section the entry was declared in
    pub kind: DependencyKind,
}

impl ManifestEntry {
    /// Creates a new manifest entry
    pub fn new(
        name: impl Into<String>,
        declared_version: impl Into<String>,
        kind: DependencyKind,
    ) -> Self {
        Self {
            name: name.into(),
            declared_version: declared_version.into(),
            kind,
        }
    }

    /// Creates a new production entry
    pub fn production(name: impl Into<String>, declared_version: impl Into<String>) -> Self {
        Self::new(name, declared_version, DependencyKind::Production)
    }

    /// Creates a new development entry
    pub fn development(name: impl Into<String>, declared_version: impl Into<String>) -> Self {
        Self::new(name, declared_version, DependencyKind::Development)
    }

    /// Returns true if this entry came from `devDependencies`
    pub fn is_dev(&self) -> bool {
        self.kind.is_dev()
    }
}

impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dev_marker = if self.is_dev() { " (dev)" } else { "" };
        write!(f, "{}@{}{}", self.name, self.declared_version, dev_marker)
    }
}
