//! Metadata persistence behind a narrow trait.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use showcase_core::config::ClassifyConfig;
use showcase_core::errors::MetadataError;
use showcase_core::types::ProjectMetadata;

/// Reads and writes the metadata record of a project directory.
pub trait MetadataStore {
    fn read(&self, project: &Path) -> Result<ProjectMetadata, MetadataError>;
    fn write(&self, project: &Path, metadata: &ProjectMetadata) -> Result<(), MetadataError>;
}

/// Stores the record as pretty-printed JSON in `<project>/<file_name>`.
#[derive(Debug, Clone)]
pub struct JsonMetadataStore {
    file_name: String,
}

impl JsonMetadataStore {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn from_config(config: &ClassifyConfig) -> Self {
        Self::new(config.effective_metadata_file())
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn record_path(&self, project: &Path) -> PathBuf {
        project.join(&self.file_name)
    }
}

impl MetadataStore for JsonMetadataStore {
    fn read(&self, project: &Path) -> Result<ProjectMetadata, MetadataError> {
        let path = self.record_path(project);
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MetadataError::NotFound { path: path.clone() },
            _ => MetadataError::Io {
                path: path.clone(),
                source: e,
            },
        })?;
        serde_json::from_str(&content).map_err(|e| MetadataError::Parse {
            path,
            message: e.to_string(),
        })
    }

    fn write(&self, project: &Path, metadata: &ProjectMetadata) -> Result<(), MetadataError> {
        let path = self.record_path(project);
        let json = serde_json::to_string_pretty(metadata).map_err(|e| MetadataError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, json).map_err(|source| MetadataError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_record_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonMetadataStore::new("satox.json");
        match store.read(dir.path()) {
            Err(MetadataError::NotFound { path }) => assert!(path.ends_with("satox.json")),
            other => panic!("Expected NotFound, got: {:?}", other),
        }
    }

    #[test]
    fn read_malformed_record_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("satox.json"), "{\"name\": ").unwrap();
        let store = JsonMetadataStore::new("satox.json");
        match store.read(dir.path()) {
            Err(MetadataError::Parse { .. }) => {}
            other => panic!("Expected Parse, got: {:?}", other),
        }
    }

    #[test]
    fn unknown_category_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("satox.json"), r#"{"category": "robots"}"#).unwrap();
        let store = JsonMetadataStore::new("satox.json");
        assert!(matches!(store.read(dir.path()), Err(MetadataError::Parse { .. })));
    }

    #[test]
    fn write_then_read_keeps_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("satox.json"),
            r#"{"name": "x", "license": "MIT", "author": {"username": "u", "name": "U"}}"#,
        )
        .unwrap();
        let store = JsonMetadataStore::new("satox.json");
        let meta = store.read(dir.path()).unwrap();
        store.write(dir.path(), &meta).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("satox.json")).unwrap())
                .unwrap();
        assert_eq!(raw["license"], "MIT");
        assert_eq!(raw["author"]["username"], "u");
    }
}
