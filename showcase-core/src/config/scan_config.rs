//! Directory walk configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEPENDENCY_CACHE_DIRS;

/// Configuration for walking a project tree.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory names skipped in addition to the built-in dependency caches.
    #[serde(default)]
    pub extra_ignore: Vec<String>,
    /// Follow symbolic links. Default: false.
    pub follow_symlinks: Option<bool>,
    /// Maximum walk depth below the project root. Default: unbounded.
    pub max_depth: Option<usize>,
}

impl ScanConfig {
    /// Returns whether symlinks are followed, defaulting to false.
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }

    /// True if a directory with this name must not be descended into.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        DEPENDENCY_CACHE_DIRS.contains(&name) || self.extra_ignore.iter().any(|d| d == name)
    }
}
