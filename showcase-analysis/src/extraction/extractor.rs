//! Keyword extractor: metadata + file tree + manifest → ProjectData.

use std::collections::BTreeSet;

use showcase_core::types::ProjectMetadata;

use super::manifest::Manifest;
use super::vocabulary::{extension_keywords, DEPENDENCY_MARKERS, TEXT_VOCABULARY};
use crate::scanner::FileEntry;

/// Everything the scorer needs about one project. Transient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectData {
    pub keywords: BTreeSet<&'static str>,
    /// Declared SDK names as written in the record, unknown values included.
    pub sdks: BTreeSet<String>,
    pub files: Vec<FileEntry>,
}

/// Run the text, file, and dependency passes.
pub fn extract(metadata: &ProjectMetadata, files: Vec<FileEntry>, manifest: &Manifest) -> ProjectData {
    let mut keywords = BTreeSet::new();

    let text = format!("{} {}", metadata.name(), metadata.description()).to_lowercase();
    keywords.extend(text_keywords(&text));
    keywords.extend(files.iter().flat_map(|f| extension_keywords(&f.extension)).copied());
    keywords.extend(manifest.dependency_names().flat_map(|name| dependency_keywords(name)));

    if let Manifest::Malformed(reason) = manifest {
        tracing::debug!(%reason, "manifest unreadable, dependency pass skipped");
    }

    ProjectData {
        keywords,
        sdks: metadata.declared_sdks().iter().cloned().collect(),
        files,
    }
}

/// Vocabulary phrases occurring anywhere in `lowercased`.
pub fn text_keywords(lowercased: &str) -> impl Iterator<Item = &'static str> + '_ {
    TEXT_VOCABULARY
        .iter()
        .copied()
        .filter(move |phrase| lowercased.contains(phrase))
}

/// Marker keywords for one dependency name.
pub fn dependency_keywords(name: &str) -> impl Iterator<Item = &'static str> + '_ {
    DEPENDENCY_MARKERS
        .iter()
        .filter(move |(marker, _)| name.contains(marker))
        .map(|(_, keyword)| *keyword)
}
