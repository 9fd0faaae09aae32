//! End-to-end command tests driven through the parsed CLI.

use std::fs;
use std::path::Path;

use clap::Parser;
use serde_json::Value;
use showcase_cli::Cli;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn run(args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["showcase"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().run()
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

const VALID: &str = r#"{
  "name": "Pixel Quest",
  "description": "An RPG with player levels and score tracking",
  "author": {"username": "px", "name": "Pix"},
  "category": "custom",
  "satox_sdks": ["satox-game-sdk"],
  "repository": "https://github.com/px/pixel-quest",
  "license": "MIT"
}"#;

#[test]
fn categorize_writes_category() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("projects/px/pixel-quest");
    write(&project, "satox.json", VALID);
    let root = dir.path().to_str().unwrap();
    let path = project.to_str().unwrap();

    run(&["categorize", path, "--root", root]).unwrap();
    assert_eq!(read_json(&project.join("satox.json"))["category"], "games");
}

#[test]
fn categorize_missing_record_is_skipped() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();
    assert!(run(&["categorize", root, "--root", root]).is_ok());
}

#[test]
fn categorize_malformed_record_fails_with_code() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "satox.json", "{ nope");
    let root = dir.path().to_str().unwrap();

    let err = run(&["categorize", root, "--root", root]).unwrap_err();
    assert!(err.to_string().starts_with("[METADATA_PARSE_ERROR]"));
}

#[test]
fn validate_reports_first_failure() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "satox.json", &VALID.replace("MIT", "WTFPL"));
    let root = dir.path().to_str().unwrap();

    let err = run(&["validate", root, "--root", root]).unwrap_err();
    assert!(err.to_string().starts_with("[VALIDATION_ERROR] Invalid license: WTFPL"));

    write(dir.path(), "satox.json", VALID);
    assert!(run(&["validate", root, "--root", root]).is_ok());
}

#[test]
fn update_data_uses_configured_paths() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "submissions/px/pixel-quest/satox.json", VALID);
    write(
        dir.path(),
        "showcase.toml",
        "[index]\nprojects_dir = \"submissions\"\noutput = \"site/data.json\"\n",
    );
    fs::create_dir_all(dir.path().join("site")).unwrap();
    let root = dir.path().to_str().unwrap();

    run(&["update-data", "--root", root]).unwrap();
    let data = read_json(&dir.path().join("site/data.json"));
    assert_eq!(data["total_projects"], 1);
    assert_eq!(data["projects"][0]["id"], "px/pixel-quest");
}

#[test]
fn update_data_missing_projects_dir_fails() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();

    let err = run(&["update-data", "--root", root]).unwrap_err();
    assert!(err.to_string().starts_with("[SHOWCASE_ERROR]"));
}
