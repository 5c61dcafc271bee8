//! Dependency kind (production vs development)

use std::fmt;

/// Which manifest section a dependency was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    /// Declared under `dependencies`
    Production,
    /// Declared under `devDependencies`
    Development,
}

impl DependencyKind {
    /// Returns the label shown in the Type column
    pub fn display_name(&self) -> &'static str {
        match self {
            DependencyKind::Production => "Production",
            DependencyKind::Development => "Dev",
        }
    }

    /// Returns the noun used in per-dependency error messages
    pub fn error_noun(&self) -> &'static str {
        match self {
            DependencyKind::Production => "dependency",
            DependencyKind::Development => "devDependency",
        }
    }

    /// Returns true for `devDependencies` entries
    pub fn is_dev(&self) -> bool {
        matches!(self, DependencyKind::Development)
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
