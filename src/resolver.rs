//! Dependency resolver joining manifest entries with registry lookups
//!
//! This module provides:
//! - Sequential registry lookups, one per manifest entry
//! - Partial continuation: a failed lookup drops that entry, never the batch
//! - Range prefix stripping for the displayed current version

use crate::domain::{ComparisonRecord, DependencyKind, ManifestEntry};
use crate::error::RegistryError;
use crate::progress::Progress;
use crate::registry::RegistryClient;
use std::fmt;
use tracing::debug;

/// Range prefix stripped from declared versions
const RANGE_PREFIX: char = '^';

/// Strip a single leading range prefix from a declared version.
///
/// `^1.2.3` becomes `1.2.3`; anything else is returned unchanged.
pub fn strip_range_prefix(version: &str) -> &str {
    version.strip_prefix(RANGE_PREFIX).unwrap_or(version)
}

/// A lookup that failed for one manifest entry
#[derive(Debug)]
pub struct ResolveFailure {
    /// Package name
    pub name: String,
    /// Section the dependency was declared in
    pub kind: DependencyKind,
    /// Why the lookup failed
    pub error: RegistryError,
}

impl fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error processing {} {}: {}",
            self.kind.error_noun(),
            self.name,
            self.error
        )
    }
}

/// Result of resolving a manifest
#[derive(Debug, Default)]
pub struct ResolveOutcome {
    /// One record per successful lookup, in manifest order
    pub records: Vec<ComparisonRecord>,
    /// One entry per failed lookup, in manifest order
    pub failures: Vec<ResolveFailure>,
}

impl ResolveOutcome {
    /// Records declared under `dependencies`
    pub fn production(&self) -> impl Iterator<Item = &ComparisonRecord> {
        self.records.iter().filter(|r| !r.is_dev())
    }

    /// Records declared under `devDependencies`
    pub fn development(&self) -> impl Iterator<Item = &ComparisonRecord> {
        self.records.iter().filter(|r| r.is_dev())
    }

    /// Returns true if any lookup failed
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Resolver coordinating lookups against one registry
pub struct Resolver {
    registry: Box<dyn RegistryClient>,
    show_progress: bool,
}

impl Resolver {
    /// Create a new resolver over a registry client
    pub fn new(registry: Box<dyn RegistryClient>) -> Self {
        Self {
            registry,
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Look up every entry, strictly one after another.
    pub async fn resolve(&self, entries: &[ManifestEntry]) -> ResolveOutcome {
        let mut progress = Progress::new(self.show_progress);
        let mut outcome = ResolveOutcome::default();

        progress.start(entries.len() as u64);

        for entry in entries {
            progress.checking(&entry.name);

            match self.registry.latest_version(&entry.name).await {
                Ok(latest) => {
                    debug!(package = %entry.name, %latest, "resolved");
                    outcome.records.push(ComparisonRecord::new(
                        entry.name.clone(),
                        strip_range_prefix(&entry.declared_version),
                        latest,
                        entry.kind,
                    ));
                }
                Err(error) => {
                    debug!(package = %entry.name, %error, "lookup failed");
                    outcome.failures.push(ResolveFailure {
                        name: entry.name.clone(),
                        kind: entry.kind,
                        error,
                    });
                }
            }

            progress.inc();
        }

        progress.finish_and_clear();
        debug!(
            resolved = outcome.records.len(),
            failed = outcome.failures.len(),
            registry = self.registry.registry_name(),
            "lookups complete"
        );

        outcome
    }
}
