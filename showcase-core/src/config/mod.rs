//! Configuration system for the showcase classifier.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod classify_config;
pub mod index_config;
pub mod scan_config;
pub mod showcase_config;

pub use classify_config::ClassifyConfig;
pub use index_config::IndexConfig;
pub use scan_config::ScanConfig;
pub use showcase_config::{CliOverrides, ShowcaseConfig};
