//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - A depview User-Agent
//! - An optional request timeout (none by default)
//! - JSON decoding that separates transport failures from malformed bodies
//!
//! Requests are issued exactly once. There is no retry.

use crate::error::RegistryError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("depview/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(None, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Option<Duration>, user_agent: &str) -> Result<Self, RegistryError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| RegistryError::ClientBuild {
            message: e.to_string(),
        })?;

        Ok(Self { client })
    }

    /// Create a new HTTP client with the default User-Agent and a timeout
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, RegistryError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Perform a single GET request and decode the body as JSON.
    ///
    /// The HTTP status is not inspected: registries answer unknown packages
    /// with a JSON error document, which callers decode like any other body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RegistryError::network(package, registry, e.to_string()))?;

        debug!(%url, status = %response.status(), "response");

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                RegistryError::invalid_response(
                    package,
                    registry,
                    format!("failed to parse JSON: {}", e),
                )
            } else {
                RegistryError::network(package, registry, e.to_string())
            }
        })
    }
}
