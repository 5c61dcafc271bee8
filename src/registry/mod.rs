//! Registry adapters for fetching package version information
//!
//! This module provides:
//! - HTTP client shared foundation
//! - npm Registry adapter

mod client;
mod npm;

pub use client::HttpClient;
pub use npm::{NpmRegistry, NPM_REGISTRY_URL};

use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for registry clients
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest published version of a package.
    ///
    /// Returns an empty string when the registry document carries no
    /// latest tag.
    async fn latest_version(&self, package: &str) -> Result<String, RegistryError>;
}
