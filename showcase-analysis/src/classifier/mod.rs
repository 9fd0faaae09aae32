//! Project classifier: reads a metadata record, scores the project, and
//! writes the chosen category back.

pub mod classifier;
pub mod store;

pub use classifier::{ClassifyOutcome, ProjectClassifier};
pub use store::{JsonMetadataStore, MetadataStore};
