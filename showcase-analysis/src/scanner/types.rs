//! Scanner data types: FileEntry, TreeListing.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A regular file discovered under a project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the project root, `/`-separated.
    pub relative_path: String,
    pub file_name: String,
    /// Lowercased extension including the leading dot, or empty.
    pub extension: String,
}

impl FileEntry {
    /// Build an entry for `path`, which must live under `root`.
    pub fn new(root: &Path, path: &Path) -> Self {
        let relative = path.strip_prefix(root).unwrap_or(path);
        let relative_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        Self {
            relative_path,
            file_name,
            extension,
        }
    }

    /// Extension without the leading dot.
    pub fn bare_extension(&self) -> Option<&str> {
        self.extension.strip_prefix('.')
    }
}

/// Output of a tree walk.
#[derive(Debug, Clone, Default)]
pub struct TreeListing {
    pub files: Vec<FileEntry>,
    /// Entries dropped because they could not be read.
    pub unreadable: usize,
}
