//! Metadata validation errors.

use std::path::PathBuf;

use super::error_code::{self, ShowcaseErrorCode};

/// Reasons a metadata record is rejected by the validator.
/// The first failing rule is reported.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing metadata file in {path}")]
    MissingFile { path: PathBuf },

    #[error("Could not read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in metadata file: {message}")]
    InvalidJson { message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Author must have username and name")]
    IncompleteAuthor,

    #[error("Invalid category: {value}. Must be one of: {allowed}")]
    InvalidCategory { value: String, allowed: String },

    #[error("Invalid SDK: {value}. Must be one of: {allowed}")]
    InvalidSdk { value: String, allowed: String },

    #[error("Repository must be a GitHub URL")]
    NonGithubRepository,

    #[error("Invalid license: {value}. Must be one of: {allowed}")]
    InvalidLicense { value: String, allowed: String },

    #[error("Version must be in semantic versioning format (e.g., 1.0.0)")]
    InvalidVersion,

    #[error("Tags must be an array")]
    TagsNotArray,

    #[error("Live demo must be a valid URL")]
    InvalidLiveDemo,
}

impl ShowcaseErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
