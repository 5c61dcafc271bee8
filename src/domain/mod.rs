//! Core domain models for depview
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency kind (production / dev)
//! - Manifest entries as declared in package.json
//! - Comparison records rendered in the output table

mod dependency;
mod kind;
mod record;

pub use dependency::ManifestEntry;
pub use kind::DependencyKind;
pub use record::ComparisonRecord;
