//! Metadata validation for submitted projects.

pub mod validator;

pub use validator::{is_truthy, validate_metadata, validate_project};
