//! Showcase index configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PROJECTS_DIR, DEFAULT_SHOWCASE_OUTPUT};

/// Where the aggregator reads projects from and writes the index to.
/// Relative paths resolve against the repository root.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IndexConfig {
    pub projects_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl IndexConfig {
    pub fn effective_projects_dir(&self, root: &Path) -> PathBuf {
        root.join(self.projects_dir.as_deref().unwrap_or(Path::new(DEFAULT_PROJECTS_DIR)))
    }

    pub fn effective_output(&self, root: &Path) -> PathBuf {
        root.join(self.output.as_deref().unwrap_or(Path::new(DEFAULT_SHOWCASE_OUTPUT)))
    }
}
