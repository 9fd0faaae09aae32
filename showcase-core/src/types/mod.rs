//! Domain types shared by the classifier, validator, and aggregator.

pub mod category;
pub mod metadata;
pub mod sdk;

pub use category::Category;
pub use metadata::ProjectMetadata;
pub use sdk::{License, Sdk};
