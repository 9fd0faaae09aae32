//! Error handling for the showcase classifier.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod metadata_error;
pub mod showcase_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::ShowcaseErrorCode;
pub use metadata_error::MetadataError;
pub use showcase_error::ShowcaseError;
pub use validation_error::ValidationError;
