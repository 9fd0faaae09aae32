//! Classification configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MANIFEST_FILE, DEFAULT_METADATA_FILE, DEFAULT_MIN_SCORE};

/// Configuration for the classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Winning scores below this fall back to `apps`. Default: 5.
    pub min_score: Option<u32>,
    /// Metadata record file name. Default: "satox.json".
    pub metadata_file: Option<String>,
    /// Dependency manifest file name. Default: "package.json".
    pub manifest_file: Option<String>,
}

impl ClassifyConfig {
    /// Returns the effective minimum score, defaulting to 5.
    pub fn effective_min_score(&self) -> u32 {
        self.min_score.unwrap_or(DEFAULT_MIN_SCORE)
    }

    /// Returns the effective metadata file name, defaulting to "satox.json".
    pub fn effective_metadata_file(&self) -> &str {
        self.metadata_file.as_deref().unwrap_or(DEFAULT_METADATA_FILE)
    }

    /// Returns the effective manifest file name, defaulting to "package.json".
    pub fn effective_manifest_file(&self) -> &str {
        self.manifest_file.as_deref().unwrap_or(DEFAULT_MANIFEST_FILE)
    }
}
