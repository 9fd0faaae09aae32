//! Classifier tests: skip precondition, write counts, end-to-end scenarios.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use showcase_analysis::classifier::{JsonMetadataStore, MetadataStore, ProjectClassifier};
use showcase_core::config::ShowcaseConfig;
use showcase_core::errors::MetadataError;
use showcase_core::types::{Category, ProjectMetadata};
use tempfile::TempDir;

// ---- Helpers ----

/// In-memory store that counts writes.
#[derive(Default)]
struct CountingStore {
    record: RefCell<Option<ProjectMetadata>>,
    writes: Cell<usize>,
}

impl CountingStore {
    fn with(metadata: ProjectMetadata) -> Self {
        Self {
            record: RefCell::new(Some(metadata)),
            writes: Cell::new(0),
        }
    }
}

impl MetadataStore for CountingStore {
    fn read(&self, project: &Path) -> Result<ProjectMetadata, MetadataError> {
        self.record.borrow().clone().ok_or_else(|| MetadataError::NotFound {
            path: project.join("satox.json"),
        })
    }

    fn write(&self, _project: &Path, metadata: &ProjectMetadata) -> Result<(), MetadataError> {
        *self.record.borrow_mut() = Some(metadata.clone());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

fn metadata(name: &str, description: &str, sdks: &[&str], category: Option<Category>) -> ProjectMetadata {
    ProjectMetadata {
        name: Some(Some(name.to_string())),
        description: Some(Some(description.to_string())),
        tags: Some(Some(Vec::new())),
        declared_sdks: Some(Some(sdks.iter().map(|s| s.to_string()).collect())),
        category,
        ..Default::default()
    }
}

fn fixed_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-03-04T05:06:07.089Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

// ---- Skip precondition ----

#[test]
fn already_categorized_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let store = CountingStore::with(metadata("Ledger", "a wallet", &[], Some(Category::Defi)));
    let classifier = ProjectClassifier::new(store, &ShowcaseConfig::default());

    let outcome = classifier.classify(dir.path()).unwrap();
    assert!(!outcome.updated);
    assert_eq!(outcome.category, Category::Defi);
    assert_eq!(classifier.store().writes.get(), 0);
}

#[test]
fn force_reclassifies_categorized_record() {
    let dir = TempDir::new().unwrap();
    let store = CountingStore::with(metadata(
        "Pixel Quest",
        "An RPG with player levels and score tracking",
        &["satox-game-sdk"],
        Some(Category::Tools),
    ));
    let classifier = ProjectClassifier::new(store, &ShowcaseConfig::default());

    let outcome = classifier.reclassify(dir.path()).unwrap();
    assert!(outcome.updated);
    assert_eq!(outcome.category, Category::Games);
    assert_eq!(classifier.store().writes.get(), 1);
}

#[test]
fn custom_category_is_classified() {
    let dir = TempDir::new().unwrap();
    let store = CountingStore::with(metadata("Pixel Quest", "An RPG", &[], Some(Category::Custom)));
    let classifier = ProjectClassifier::new(store, &ShowcaseConfig::default());

    let outcome = classifier.classify_at(dir.path(), false, fixed_time()).unwrap();
    assert!(outcome.updated);
    assert_eq!(classifier.store().writes.get(), 1);

    let written = classifier.store().record.borrow().clone().unwrap();
    assert_eq!(written.category, Some(outcome.category));
    assert_eq!(written.last_updated(), Some("2025-03-04T05:06:07.089Z"));
}

#[test]
fn missing_record_is_not_found() {
    let dir = TempDir::new().unwrap();
    let classifier = ProjectClassifier::new(CountingStore::default(), &ShowcaseConfig::default());

    match classifier.classify(dir.path()) {
        Err(MetadataError::NotFound { .. }) => {}
        other => panic!("Expected NotFound, got: {:?}", other),
    }
    assert_eq!(classifier.store().writes.get(), 0);
}

// ---- End-to-end scenarios ----

#[test]
fn pixel_quest_is_games() {
    let dir = TempDir::new().unwrap();
    let store = CountingStore::with(metadata(
        "Pixel Quest",
        "An RPG with player levels and score tracking",
        &["satox-game-sdk"],
        Some(Category::Custom),
    ));
    let classifier = ProjectClassifier::new(store, &ShowcaseConfig::default());

    let outcome = classifier.classify(dir.path()).unwrap();
    assert!(outcome.updated);
    assert_eq!(outcome.category, Category::Games);
    assert_eq!(classifier.store().writes.get(), 1);
}

#[test]
fn markdown_only_tree_falls_back_to_apps() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "README.md", "# notes");
    write_file(dir.path(), "docs/guide.md", "guide");
    let store = CountingStore::with(metadata("Notes", "", &[], None));
    let classifier = ProjectClassifier::new(store, &ShowcaseConfig::default());

    let outcome = classifier.classify(dir.path()).unwrap();
    assert_eq!(outcome.category, Category::Apps);
}

#[test]
fn solidity_only_tree_is_web3() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "contracts/Vault.sol", "pragma solidity ^0.8.0;");
    let store = CountingStore::with(metadata("Vault", "", &[], None));
    let classifier = ProjectClassifier::new(store, &ShowcaseConfig::default());

    assert_eq!(classifier.classify(dir.path()).unwrap().category, Category::Web3);
}

#[test]
fn dependency_markers_contribute() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "package.json",
        r#"{"dependencies": {"@tensorflow/tfjs": "^4.0.0"}}"#,
    );
    let store = CountingStore::with(metadata("Sorter", "", &[], None));
    let classifier = ProjectClassifier::new(store, &ShowcaseConfig::default());

    // "ai" from the marker, plus data/configuration from package.json itself.
    assert_eq!(classifier.classify(dir.path()).unwrap().category, Category::AiMl);
}

#[test]
fn malformed_manifest_is_ignored() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "package.json", "{ broken");
    let store = CountingStore::with(metadata("Pixel Quest", "An RPG", &[], None));
    let classifier = ProjectClassifier::new(store, &ShowcaseConfig::default());

    assert_eq!(classifier.classify(dir.path()).unwrap().category, Category::Games);
}

#[test]
fn min_score_comes_from_config() {
    let dir = TempDir::new().unwrap();
    let config = ShowcaseConfig::from_toml("[classify]\nmin_score = 100\n").unwrap();
    let store = CountingStore::with(metadata("Pixel Quest", "An RPG", &[], None));
    let classifier = ProjectClassifier::new(store, &config);

    assert_eq!(classifier.classify(dir.path()).unwrap().category, Category::Apps);
}

// ---- JSON file store ----

#[test]
fn json_store_round_trip_on_disk() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "satox.json",
        r#"{
  "name": "Notes",
  "description": "",
  "author": {"username": "n", "name": "N"},
  "category": "custom",
  "satox_sdks": [],
  "stars": 3
}"#,
    );
    write_file(dir.path(), "README.md", "# notes");

    let classifier = ProjectClassifier::from_config(&ShowcaseConfig::default());
    let outcome = classifier.classify(dir.path()).unwrap();
    assert!(outcome.updated);
    // The record itself is not scored, so .json contributes nothing.
    assert_eq!(outcome.category, Category::Apps);

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("satox.json")).unwrap()).unwrap();
    assert_eq!(raw["category"], "apps");
    assert_eq!(raw["stars"], 3);
    assert_eq!(raw["author"]["username"], "n");
    assert!(raw["last_updated"].as_str().unwrap().ends_with('Z'));

    // Second run is a no-op.
    let again = classifier.classify(dir.path()).unwrap();
    assert!(!again.updated);
    assert_eq!(again.category, Category::Apps);
}

#[test]
fn json_store_keeps_explicit_nulls() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "satox.json",
        r#"{"name": "Pixel Quest", "description": "An RPG", "tags": null, "satox_sdks": null, "category": "custom"}"#,
    );

    let classifier = ProjectClassifier::from_config(&ShowcaseConfig::default());
    let outcome = classifier.classify(dir.path()).unwrap();
    assert!(outcome.updated);
    assert_eq!(outcome.category, Category::Games);

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("satox.json")).unwrap()).unwrap();
    let record = raw.as_object().unwrap();
    assert_eq!(record.get("tags"), Some(&serde_json::Value::Null));
    assert_eq!(record.get("satox_sdks"), Some(&serde_json::Value::Null));
    assert_eq!(raw["category"], "games");
}

#[test]
fn blank_category_is_classified() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "satox.json",
        r#"{"name": "Pixel Quest", "description": "An RPG", "category": ""}"#,
    );

    let classifier = ProjectClassifier::from_config(&ShowcaseConfig::default());
    let outcome = classifier.classify(dir.path()).unwrap();
    assert!(outcome.updated);
    assert_eq!(outcome.category, Category::Games);

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("satox.json")).unwrap()).unwrap();
    assert_eq!(raw["category"], "games");
}

#[test]
fn json_store_uses_configured_file_name() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "meta.json", r#"{"name": "Pixel Quest", "description": "An RPG"}"#);
    let config = ShowcaseConfig::from_toml("[classify]\nmetadata_file = \"meta.json\"\n").unwrap();
    let store = JsonMetadataStore::from_config(&config.classify);
    assert_eq!(store.file_name(), "meta.json");

    let classifier = ProjectClassifier::new(store, &config);
    assert_eq!(classifier.classify(dir.path()).unwrap().category, Category::Games);
}

#[test]
fn malformed_record_aborts_without_write() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "satox.json", "{ nope");
    let classifier = ProjectClassifier::from_config(&ShowcaseConfig::default());

    match classifier.classify(dir.path()) {
        Err(MetadataError::Parse { .. }) => {}
        other => panic!("Expected Parse, got: {:?}", other),
    }
    assert_eq!(fs::read_to_string(dir.path().join("satox.json")).unwrap(), "{ nope");
}
