//! Integration tests for depview
//!
//! These tests verify:
//! - package.json reading from disk
//! - Registry lookups against a mock npm registry
//! - Record counts and tagging across both manifest sections

use depview::domain::DependencyKind;
use depview::manifest::{manifest_path, read_manifest};
use depview::registry::{HttpClient, NpmRegistry};
use depview::resolver::Resolver;
use mockito::{Server, ServerGuard};
use std::fs;
use tempfile::TempDir;

/// Write a package.json into a fresh temp directory
fn create_project(package_json: &str) -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    fs::write(manifest_path(temp_dir.path()), package_json).unwrap();
    temp_dir
}

async fn mock_latest(server: &mut ServerGuard, package: &str, latest: &str) -> mockito::Mock {
    server
        .mock("GET", format!("/{}", package).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"name": "{}", "dist-tags": {{"latest": "{}"}}}}"#,
            package, latest
        ))
        .create_async()
        .await
}

fn resolver(server: &ServerGuard) -> Resolver {
    let registry = NpmRegistry::with_base_url(HttpClient::new().unwrap(), &server.url());
    Resolver::new(Box::new(registry))
}

mod resolve_from_disk {
    use super::*;

    /// P production + D dev entries, all lookups succeed → P+D records
    #[tokio::test]
    async fn test_all_entries_resolved_and_tagged() {
        let project = create_project(
            r#"{
                "name": "web-app",
                "dependencies": {
                    "react": "^18.2.0",
                    "lodash": "4.17.20"
                },
                "devDependencies": {
                    "typescript": "^5.3.0",
                    "vitest": "1.0.0",
                    "eslint": "^8.56.0"
                }
            }"#,
        );
        let mut server = Server::new_async().await;
        let mocks = vec![
            mock_latest(&mut server, "react", "18.3.1").await,
            mock_latest(&mut server, "lodash", "4.17.21").await,
            mock_latest(&mut server, "typescript", "5.4.5").await,
            mock_latest(&mut server, "vitest", "1.6.0").await,
            mock_latest(&mut server, "eslint", "9.0.0").await,
        ];

        let manifest = read_manifest(&manifest_path(project.path())).unwrap();
        let outcome = resolver(&server).resolve(&manifest.entries()).await;

        for mock in &mocks {
            mock.assert_async().await;
        }
        assert!(!outcome.has_failures());
        assert_eq!(outcome.records.len(), 5);
        assert_eq!(outcome.production().count(), 2);
        assert_eq!(outcome.development().count(), 3);

        let react = &outcome.records[0];
        assert_eq!(react.name, "react");
        assert_eq!(react.current_version, "18.2.0");
        assert_eq!(react.latest_version, "18.3.1");
        assert_eq!(react.kind, DependencyKind::Production);

        let vitest = outcome.records.iter().find(|r| r.name == "vitest").unwrap();
        assert_eq!(vitest.current_version, "1.0.0");
        assert_eq!(vitest.kind, DependencyKind::Development);
    }

    /// One malformed registry response out of three → two records, one failure
    #[tokio::test]
    async fn test_one_failure_does_not_abort_batch() {
        let project = create_project(
            r#"{
                "dependencies": {"express": "^4.18.0", "broken": "1.0.0"},
                "devDependencies": {"jest": "^29.0.0"}
            }"#,
        );
        let mut server = Server::new_async().await;
        let _express = mock_latest(&mut server, "express", "4.19.2").await;
        let _jest = mock_latest(&mut server, "jest", "29.7.0").await;
        let _broken = server
            .mock("GET", "/broken")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let manifest = read_manifest(&manifest_path(project.path())).unwrap();
        let outcome = resolver(&server).resolve(&manifest.entries()).await;

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].name, "broken");
        assert!(outcome
            .failures[0]
            .to_string()
            .starts_with("Error processing dependency broken:"));
    }

    /// Unknown package: npm answers 404 with a JSON body → record with empty latest
    #[tokio::test]
    async fn test_unknown_package_yields_empty_latest() {
        let project = create_project(r#"{"dependencies": {"no-such-pkg": "^0.0.1"}}"#);
        let mut server = Server::new_async().await;
        let _missing = server
            .mock("GET", "/no-such-pkg")
            .with_status(404)
            .with_body(r#"{"error": "Not found"}"#)
            .create_async()
            .await;

        let manifest = read_manifest(&manifest_path(project.path())).unwrap();
        let outcome = resolver(&server).resolve(&manifest.entries()).await;

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].current_version, "0.0.1");
        assert_eq!(outcome.records[0].latest_version, "");
    }

    #[tokio::test]
    async fn test_empty_manifest_yields_no_records() {
        let project = create_project(r#"{"name": "bare"}"#);
        let server = Server::new_async().await;

        let manifest = read_manifest(&manifest_path(project.path())).unwrap();
        let outcome = resolver(&server).resolve(&manifest.entries()).await;

        assert!(outcome.records.is_empty());
        assert!(!outcome.has_failures());
    }
}

mod manifest_errors {
    use super::*;
    use depview::error::ManifestError;

    #[test]
    fn test_missing_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = read_manifest(&manifest_path(temp_dir.path()));
        assert!(matches!(result, Err(ManifestError::ReadError { .. })));
    }

    #[test]
    fn test_malformed_manifest() {
        let project = create_project("{ \"dependencies\": { \"lodash\": ");
        let result = read_manifest(&manifest_path(project.path()));
        assert!(matches!(result, Err(ManifestError::JsonParseError { .. })));
    }
}
