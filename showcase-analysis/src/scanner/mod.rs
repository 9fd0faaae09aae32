//! Scanner subsystem: project tree listing and language detection.
//!
//! The scanner is the first stage of classification. It lists every regular
//! file under a project root, skipping hidden entries and dependency caches,
//! and records each file's name and extension for keyword extraction.

pub mod language_detect;
pub mod types;
pub mod walker;

pub use language_detect::Language;
pub use types::{FileEntry, TreeListing};
pub use walker::{list_tree, walk_tree};
