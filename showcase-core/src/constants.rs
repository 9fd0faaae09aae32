//! Shared constants for the showcase classifier.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the per-project metadata record.
pub const DEFAULT_METADATA_FILE: &str = "satox.json";

/// File name of the dependency manifest inspected during extraction.
pub const DEFAULT_MANIFEST_FILE: &str = "package.json";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "showcase.toml";

/// Minimum winning score below which classification falls back to `apps`.
pub const DEFAULT_MIN_SCORE: u32 = 5;

/// Default directory holding `<username>/<project>` trees.
pub const DEFAULT_PROJECTS_DIR: &str = "projects";

/// Default aggregated showcase output file.
pub const DEFAULT_SHOWCASE_OUTPUT: &str = "showcase-data.json";

/// Default version reported for projects that do not declare one.
pub const DEFAULT_PROJECT_VERSION: &str = "1.0.0";

/// Default status reported for projects that do not declare one.
pub const DEFAULT_PROJECT_STATUS: &str = "active";

/// Dependency caches and build outputs never walked during extraction.
pub const DEPENDENCY_CACHE_DIRS: &[&str] = &[
    "node_modules",
    "bower_components",
    "jspm_packages",
    "__pycache__",
    "site-packages",
    "venv",
];

/// Screenshot viewports looked up by the showcase aggregator.
pub const SCREENSHOT_VIEWPORTS: [&str; 3] = ["desktop", "tablet", "mobile"];

/// Featured projects kept per category summary.
pub const FEATURED_PER_CATEGORY: usize = 3;

/// Recent projects kept per category summary.
pub const RECENT_PER_CATEGORY: usize = 5;
