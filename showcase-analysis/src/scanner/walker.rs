//! Project tree walker built on `ignore::WalkBuilder`.

use std::path::Path;

use ignore::{DirEntry, WalkBuilder};
use showcase_core::config::ScanConfig;

use super::types::{FileEntry, TreeListing};

/// List every regular file under `root`.
///
/// Hidden entries and dependency-cache directories are pruned. Unreadable
/// entries are skipped and counted; a missing root yields an empty listing.
/// Files are returned sorted by path within each directory.
pub fn walk_tree(root: &Path, config: &ScanConfig) -> TreeListing {
    let prune = config.clone();
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(true)
        .follow_links(config.effective_follow_symlinks())
        .max_depth(config.max_depth)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| !is_pruned_dir(entry, &prune));

    builder
        .build()
        .fold(TreeListing::default(), |mut listing, result| {
            match result {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file()) {
                        listing.files.push(FileEntry::new(root, entry.path()));
                    }
                }
                Err(e) => {
                    tracing::debug!(root = %root.display(), error = %e, "skipping unreadable entry");
                    listing.unreadable += 1;
                }
            }
            listing
        })
}

/// Convenience wrapper returning only the files.
pub fn list_tree(root: &Path, config: &ScanConfig) -> Vec<FileEntry> {
    walk_tree(root, config).files
}

fn is_pruned_dir(entry: &DirEntry, config: &ScanConfig) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
    is_dir
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.is_ignored_dir(name))
}
