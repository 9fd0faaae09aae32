//! Keyword extraction: turns metadata text, file extensions, and declared
//! dependencies into a normalized keyword set.

pub mod extractor;
pub mod manifest;
pub mod vocabulary;

pub use extractor::{extract, ProjectData};
pub use manifest::{read_manifest, Manifest};
