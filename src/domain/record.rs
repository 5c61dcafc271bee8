//! Comparison records: one row of the final output

use super::DependencyKind;

/// Declared version joined with the registry's latest version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRecord {
    /// Package name
    pub name: String,
    /// Declared version with any range prefix stripped
    pub current_version: String,
    /// `dist-tags.latest` from the registry; empty when the registry had none
    pub latest_version: String,
    /// Section the dependency was declared in
    pub kind: DependencyKind,
}

impl ComparisonRecord {
    /// Creates a new comparison record
    pub fn new(
        name: impl Into<String>,
        current_version: impl Into<String>,
        latest_version: impl Into<String>,
        kind: DependencyKind,
    ) -> Self {
        Self {
            name: name.into(),
            current_version: current_version.into(),
            latest_version: latest_version.into(),
            kind,
        }
    }

    /// Returns true if this record came from `devDependencies`
    pub fn is_dev(&self) -> bool {
        self.kind.is_dev()
    }

    /// Cells in column order: Name, Current Version, Updated Version, Type
    pub fn cells(&self) -> [&str; 4] {
        [
            &self.name,
            &self.current_version,
            &self.latest_version,
            self.kind.display_name(),
        ]
    }
}
