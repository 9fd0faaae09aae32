//! Classification orchestrator.

use std::path::Path;

use chrono::{DateTime, Utc};
use showcase_core::config::{ScanConfig, ShowcaseConfig};
use showcase_core::errors::MetadataError;
use showcase_core::types::Category;

use super::store::{JsonMetadataStore, MetadataStore};
use crate::extraction::{extract, read_manifest};
use crate::scanner::walk_tree;
use crate::scoring::CategoryScorer;

/// What `classify` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyOutcome {
    /// True when a new category was written.
    pub updated: bool,
    pub category: Category,
}

/// Extract → score → persist, one project at a time.
pub struct ProjectClassifier<S = JsonMetadataStore> {
    store: S,
    scorer: CategoryScorer,
    scan: ScanConfig,
    metadata_file: String,
    manifest_file: String,
}

impl ProjectClassifier<JsonMetadataStore> {
    /// Classifier backed by the JSON file store.
    pub fn from_config(config: &ShowcaseConfig) -> Self {
        Self::new(JsonMetadataStore::from_config(&config.classify), config)
    }
}

impl<S: MetadataStore> ProjectClassifier<S> {
    pub fn new(store: S, config: &ShowcaseConfig) -> Self {
        Self {
            store,
            scorer: CategoryScorer::new(config.classify.effective_min_score()),
            scan: config.scan.clone(),
            metadata_file: config.classify.effective_metadata_file().to_string(),
            manifest_file: config.classify.effective_manifest_file().to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Classify `project` unless its record already carries a category.
    pub fn classify(&self, project: &Path) -> Result<ClassifyOutcome, MetadataError> {
        self.classify_at(project, false, Utc::now())
    }

    /// Classify `project`, replacing any existing category.
    pub fn reclassify(&self, project: &Path) -> Result<ClassifyOutcome, MetadataError> {
        self.classify_at(project, true, Utc::now())
    }

    /// Classify with an explicit `force` flag and timestamp.
    ///
    /// Exactly one write happens when classification runs and none when the
    /// record is already categorized and `force` is false.
    pub fn classify_at(
        &self,
        project: &Path,
        force: bool,
        now: DateTime<Utc>,
    ) -> Result<ClassifyOutcome, MetadataError> {
        let mut metadata = self.store.read(project)?;

        if metadata.is_categorized() && !force {
            let category = metadata.effective_category();
            tracing::info!(project = metadata.name(), %category, "already categorized, skipping");
            return Ok(ClassifyOutcome {
                updated: false,
                category,
            });
        }

        tracing::info!(project = metadata.name(), path = %project.display(), "categorizing");

        let listing = walk_tree(project, &self.scan);
        if listing.unreadable > 0 {
            tracing::debug!(count = listing.unreadable, "unreadable entries skipped");
        }
        let files = listing
            .files
            .into_iter()
            .filter(|f| f.relative_path != self.metadata_file)
            .collect();
        let manifest = read_manifest(&project.join(&self.manifest_file));

        let data = extract(&metadata, files, &manifest);
        let selection = self.scorer.categorize(&data);

        metadata.assign_category(selection.category, now);
        self.store.write(project, &metadata)?;

        tracing::info!(
            project = metadata.name(),
            category = %selection.category,
            score = selection.score,
            fell_back = selection.fell_back(),
            "categorized"
        );

        Ok(ClassifyOutcome {
            updated: true,
            category: selection.category,
        })
    }
}
