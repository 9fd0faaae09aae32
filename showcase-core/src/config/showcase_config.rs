//! Top-level showcase configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ClassifyConfig, IndexConfig, ScanConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SHOWCASE_*`)
/// 3. Project config (`showcase.toml` in the repository root)
/// 4. User config (`~/.showcase/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub scan: ScanConfig,
    pub classify: ClassifyConfig,
    pub index: IndexConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub min_score: Option<u32>,
    pub follow_symlinks: Option<bool>,
    pub projects_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl ShowcaseConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ShowcaseConfig) -> Result<(), ConfigError> {
        if config.scan.max_depth == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, value) in [
            ("classify.metadata_file", &config.classify.metadata_file),
            ("classify.manifest_file", &config.classify.manifest_file),
        ] {
            if let Some(name) = value {
                if name.is_empty() || name.contains(['/', '\\']) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a bare file name".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.showcase/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".showcase").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ShowcaseConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ShowcaseConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut ShowcaseConfig, other: &ShowcaseConfig) {
        // Scan
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }
        if other.scan.max_depth.is_some() {
            base.scan.max_depth = other.scan.max_depth;
        }

        // Classify
        if other.classify.min_score.is_some() {
            base.classify.min_score = other.classify.min_score;
        }
        if other.classify.metadata_file.is_some() {
            base.classify.metadata_file = other.classify.metadata_file.clone();
        }
        if other.classify.manifest_file.is_some() {
            base.classify.manifest_file = other.classify.manifest_file.clone();
        }

        // Index
        if other.index.projects_dir.is_some() {
            base.index.projects_dir = other.index.projects_dir.clone();
        }
        if other.index.output.is_some() {
            base.index.output = other.index.output.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SHOWCASE_CLASSIFY_MIN_SCORE`, `SHOWCASE_SCAN_MAX_DEPTH`, etc.
    fn apply_env_overrides(config: &mut ShowcaseConfig) {
        if let Ok(val) = std::env::var("SHOWCASE_SCAN_FOLLOW_SYMLINKS") {
            if let Ok(v) = val.parse::<bool>() {
                config.scan.follow_symlinks = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SHOWCASE_SCAN_MAX_DEPTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.max_depth = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SHOWCASE_CLASSIFY_MIN_SCORE") {
            if let Ok(v) = val.parse::<u32>() {
                config.classify.min_score = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SHOWCASE_METADATA_FILE") {
            config.classify.metadata_file = Some(val);
        }
        if let Ok(val) = std::env::var("SHOWCASE_PROJECTS_DIR") {
            config.index.projects_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("SHOWCASE_OUTPUT") {
            config.index.output = Some(PathBuf::from(val));
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ShowcaseConfig, cli: &CliOverrides) {
        if let Some(v) = cli.min_score {
            config.classify.min_score = Some(v);
        }
        if let Some(v) = cli.follow_symlinks {
            config.scan.follow_symlinks = Some(v);
        }
        if let Some(ref v) = cli.projects_dir {
            config.index.projects_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.output {
            config.index.output = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
