//! Builds the showcase index from the projects directory.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use showcase_core::config::{ScanConfig, ShowcaseConfig};
use showcase_core::constants::{
    DEFAULT_PROJECTS_DIR, DEFAULT_PROJECT_STATUS, DEFAULT_PROJECT_VERSION, SCREENSHOT_VIEWPORTS,
};
use showcase_core::errors::ShowcaseError;
use showcase_core::types::Category;

use super::summaries::category_summaries;
use super::types::{Screenshots, ShowcaseData, ShowcaseProject, Statistics};
use crate::scanner::language_detect::primary_language;
use crate::scanner::list_tree;
use crate::validation::is_truthy;

const OTHER_LANGUAGE: &str = "Other";
const DEMO_VIDEO_FILE: &str = "preview.mp4";

/// Why a discovered project was left out of the index.
#[derive(Debug)]
enum Skip {
    Unreadable(String),
    MissingFields,
}

/// Aggregates every project under a projects directory.
#[derive(Debug, Clone)]
pub struct ShowcaseAggregator {
    metadata_file: String,
    scan: ScanConfig,
}

impl ShowcaseAggregator {
    pub fn new(metadata_file: impl Into<String>, scan: ScanConfig) -> Self {
        Self {
            metadata_file: metadata_file.into(),
            scan,
        }
    }

    pub fn from_config(config: &ShowcaseConfig) -> Self {
        Self::new(config.classify.effective_metadata_file(), config.scan.clone())
    }

    /// Rebuild the index and write it to `output`.
    pub fn update(&self, projects_dir: &Path, output: &Path) -> Result<ShowcaseData, ShowcaseError> {
        let data = self.collect(projects_dir, Utc::now())?;
        write_showcase(output, &data)?;
        tracing::info!(
            projects = data.total_projects,
            categories = data.categories.len(),
            output = %output.display(),
            "updated showcase data"
        );
        Ok(data)
    }

    /// Build the index without writing it. `now` stamps the document and
    /// stands in for projects without `last_updated`.
    pub fn collect(&self, projects_dir: &Path, now: DateTime<Utc>) -> Result<ShowcaseData, ShowcaseError> {
        let stamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);

        let mut roots = Vec::new();
        let entries = std::fs::read_dir(projects_dir).map_err(|source| ShowcaseError::ProjectsDir {
            path: projects_dir.to_path_buf(),
            source,
        })?;
        self.discover(entries, &mut roots);

        let mut projects = Vec::with_capacity(roots.len());
        let mut statistics = Statistics::default();
        for root in &roots {
            match self.process_project(projects_dir, root, &stamp) {
                Ok(project) => {
                    statistics.record(&project);
                    projects.push(project);
                }
                Err(Skip::MissingFields) => {
                    tracing::warn!(project = %root.display(), "skipping project with missing required fields");
                }
                Err(Skip::Unreadable(reason)) => {
                    tracing::error!(project = %root.display(), %reason, "error processing project");
                }
            }
        }

        projects.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));

        Ok(ShowcaseData {
            last_updated: stamp,
            total_projects: projects.len(),
            categories: category_summaries(&projects),
            projects,
            statistics,
        })
    }

    /// A directory holding the metadata file is a project and is not
    /// descended into; any other directory is searched recursively.
    fn discover(&self, entries: std::fs::ReadDir, roots: &mut Vec<PathBuf>) {
        let mut dirs: Vec<PathBuf> = entries
            .flatten()
            .filter(|e| e.file_type().is_ok_and(|ft| ft.is_dir()))
            .map(|e| e.path())
            .collect();
        dirs.sort();

        for dir in dirs {
            if dir.join(&self.metadata_file).is_file() {
                roots.push(dir);
                continue;
            }
            match std::fs::read_dir(&dir) {
                Ok(children) => self.discover(children, roots),
                Err(e) => tracing::error!(dir = %dir.display(), error = %e, "error scanning directory"),
            }
        }
    }

    fn process_project(&self, projects_dir: &Path, root: &Path, stamp: &str) -> Result<ShowcaseProject, Skip> {
        let path = root.join(&self.metadata_file);
        let content = std::fs::read_to_string(&path).map_err(|e| Skip::Unreadable(e.to_string()))?;
        let metadata: Map<String, Value> =
            serde_json::from_str(&content).map_err(|e| Skip::Unreadable(e.to_string()))?;

        if ["name", "description", "author"].iter().any(|f| !is_truthy(metadata.get(*f))) {
            return Err(Skip::MissingFields);
        }

        let relative: Vec<String> = root
            .strip_prefix(projects_dir)
            .unwrap_or(root)
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let relative_path = relative.join("/");
        let username = relative.first().cloned().unwrap_or_default();
        let project_name = relative.get(1).cloned().unwrap_or_default();

        let media_prefix = format!(
            "{}/{}",
            projects_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_PROJECTS_DIR.to_string()),
            relative_path
        );

        let files = list_tree(root, &self.scan);
        let language = primary_language(&files)
            .map(|l| l.name().to_string())
            .unwrap_or_else(|| OTHER_LANGUAGE.to_string());

        Ok(ShowcaseProject {
            id: format!("{username}/{project_name}"),
            username,
            project_name,
            name: text(&metadata, "name").unwrap_or_default(),
            description: text(&metadata, "description").unwrap_or_default(),
            author: metadata.get("author").cloned().unwrap_or(Value::Null),
            category: text(&metadata, "category").unwrap_or_else(|| Category::UNCLASSIFIED.to_string()),
            tags: truthy_or(&metadata, "tags", Value::Array(Vec::new())),
            satox_sdks: metadata
                .get("satox_sdks")
                .and_then(Value::as_array)
                .map(|sdks| sdks.iter().filter_map(Value::as_str).map(str::to_string).collect())
                .unwrap_or_default(),
            repository: text(&metadata, "repository"),
            license: text(&metadata, "license"),
            version: text(&metadata, "version").unwrap_or_else(|| DEFAULT_PROJECT_VERSION.to_string()),
            last_updated: text(&metadata, "last_updated").unwrap_or_else(|| stamp.to_string()),
            preview: truthy_or(&metadata, "preview", Value::Object(Map::new())),
            stars: count(&metadata, "stars"),
            forks: count(&metadata, "forks"),
            downloads: count(&metadata, "downloads"),
            views: count(&metadata, "views"),
            featured: flag(&metadata, "featured"),
            verified: flag(&metadata, "verified"),
            status: text(&metadata, "status").unwrap_or_else(|| DEFAULT_PROJECT_STATUS.to_string()),
            screenshots: screenshots(root, &media_prefix),
            demo_video: root
                .join(DEMO_VIDEO_FILE)
                .is_file()
                .then(|| format!("{media_prefix}/{DEMO_VIDEO_FILE}")),
            language,
        })
    }
}

/// Write `data` as pretty JSON.
pub fn write_showcase(output: &Path, data: &ShowcaseData) -> Result<(), ShowcaseError> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(output, json).map_err(|source| ShowcaseError::Write {
        path: output.to_path_buf(),
        source,
    })
}

fn screenshots(root: &Path, media_prefix: &str) -> Option<Screenshots> {
    let mut shots = Screenshots::default();
    for viewport in SCREENSHOT_VIEWPORTS {
        let screenshot = format!("screenshot-{viewport}.png");
        if root.join(&screenshot).is_file() {
            shots
                .viewports
                .insert(viewport.to_string(), format!("{media_prefix}/{screenshot}"));
        }
        let thumbnail = format!("thumbnail-{viewport}.png");
        if root.join(&thumbnail).is_file() {
            shots
                .thumbnails
                .insert(viewport.to_string(), format!("{media_prefix}/{thumbnail}"));
        }
    }
    (!shots.is_empty()).then_some(shots)
}

/// Non-empty string field.
fn text(metadata: &Map<String, Value>, key: &str) -> Option<String> {
    metadata
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn truthy_or(metadata: &Map<String, Value>, key: &str, default: Value) -> Value {
    match metadata.get(key) {
        Some(v) if is_truthy(Some(v)) => v.clone(),
        _ => default,
    }
}

fn count(metadata: &Map<String, Value>, key: &str) -> u64 {
    metadata.get(key).and_then(Value::as_u64).unwrap_or(0)
}

fn flag(metadata: &Map<String, Value>, key: &str) -> bool {
    metadata.get(key).and_then(Value::as_bool).unwrap_or(false)
}
