//! # showcase-core
//!
//! Shared foundation for the project showcase classifier: the canonical
//! category and SDK enums, the persisted project metadata record, per-subsystem
//! error enums, layered configuration, and tracing setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::ShowcaseConfig;
pub use types::{Category, License, ProjectMetadata, Sdk};
