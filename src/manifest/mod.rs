//! Manifest file reading and parsing
//!
//! This module provides functionality to:
//! - Locate package.json in a project directory
//! - Read and parse its dependency sections

mod package_json;

pub use package_json::PackageJson;

use crate::error::ManifestError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Manifest file name looked up in the project directory
pub const MANIFEST_FILENAME: &str = "package.json";

/// Path of the manifest inside a project directory
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILENAME)
}

/// Read and parse a package.json from a file path
pub fn read_manifest(path: &Path) -> Result<PackageJson, ManifestError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;

    let manifest = PackageJson::parse(&content, path)?;
    debug!(
        path = %path.display(),
        entries = manifest.len(),
        "parsed manifest"
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_manifest_path() {
        assert_eq!(
            manifest_path(Path::new("/project")),
            PathBuf::from("/project/package.json")
        );
    }

    #[test]
    fn test_read_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = manifest_path(dir.path());
        fs::write(
            &path,
            r#"{"dependencies": {"lodash": "^4.17.21"}, "devDependencies": {"jest": "29.0.0"}}"#,
        )
        .unwrap();

        let manifest = read_manifest(&path).unwrap();
        assert_eq!(manifest.len(), 2);
    }

    #[test]
    fn test_read_manifest_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_manifest(&manifest_path(dir.path()));
        assert!(matches!(result, Err(ManifestError::ReadError { .. })));
    }

    #[test]
    fn test_read_manifest_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = manifest_path(dir.path());
        fs::write(&path, "{\"dependencies\": ").unwrap();

        let result = read_manifest(&path);
        assert!(matches!(result, Err(ManifestError::JsonParseError { .. })));
    }
}
