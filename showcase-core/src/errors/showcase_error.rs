//! Showcase aggregation errors.

use std::path::PathBuf;

use super::error_code::{self, ShowcaseErrorCode};

/// Errors that abort a showcase index rebuild. Per-project problems are
/// logged and skipped instead.
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    #[error("Projects directory {path} is not readable: {source}")]
    ProjectsDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize showcase data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ShowcaseErrorCode for ShowcaseError {
    fn error_code(&self) -> &'static str {
        error_code::SHOWCASE_ERROR
    }
}
