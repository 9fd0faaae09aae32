//! Metadata store errors.

use std::path::PathBuf;

use super::error_code::{self, ShowcaseErrorCode};

/// Errors reading or writing a project's metadata record.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("No metadata record at {path}")]
    NotFound { path: PathBuf },

    #[error("Malformed metadata in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ShowcaseErrorCode for MetadataError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::METADATA_NOT_FOUND,
            Self::Parse { .. } => error_code::METADATA_PARSE_ERROR,
            Self::Io { .. } => error_code::METADATA_IO_ERROR,
        }
    }
}
