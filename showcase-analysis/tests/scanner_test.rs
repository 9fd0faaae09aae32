//! Scanner tests: pruning, depth, unreadable entries, language detection.

use std::fs;
use std::path::Path;

use showcase_analysis::scanner::language_detect::{primary_language, Language};
use showcase_analysis::scanner::{list_tree, walk_tree};
use showcase_core::config::ScanConfig;
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "x").unwrap();
}

fn paths(root: &Path, config: &ScanConfig) -> Vec<String> {
    let mut paths: Vec<_> = list_tree(root, config)
        .into_iter()
        .map(|f| f.relative_path)
        .collect();
    paths.sort();
    paths
}

#[test]
fn lists_nested_regular_files() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "src/main.rs");
    touch(dir.path(), "src/game/level.rs");
    touch(dir.path(), "README.md");

    assert_eq!(
        paths(dir.path(), &ScanConfig::default()),
        vec!["README.md", "src/game/level.rs", "src/main.rs"]
    );
}

#[test]
fn hidden_entries_are_pruned() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), ".env");
    touch(dir.path(), ".git/config");
    touch(dir.path(), "app.js");

    assert_eq!(paths(dir.path(), &ScanConfig::default()), vec!["app.js"]);
}

#[test]
fn dependency_caches_are_pruned() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "node_modules/react/index.js");
    touch(dir.path(), "web/node_modules/vue/index.js");
    touch(dir.path(), "__pycache__/x.pyc");
    touch(dir.path(), "web/index.ts");

    assert_eq!(paths(dir.path(), &ScanConfig::default()), vec!["web/index.ts"]);
}

#[test]
fn extra_ignore_is_honoured() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "dist/bundle.js");
    touch(dir.path(), "src/index.js");
    let config = ScanConfig {
        extra_ignore: vec!["dist".to_string()],
        ..Default::default()
    };

    assert_eq!(paths(dir.path(), &config), vec!["src/index.js"]);
}

#[test]
fn cache_name_only_prunes_directories() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "venv");

    assert_eq!(paths(dir.path(), &ScanConfig::default()), vec!["venv"]);
}

#[test]
fn max_depth_limits_walk() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "top.py");
    touch(dir.path(), "a/b/deep.py");
    let config = ScanConfig {
        max_depth: Some(1),
        ..Default::default()
    };

    assert_eq!(paths(dir.path(), &config), vec!["top.py"]);
}

#[test]
fn missing_root_is_empty_not_fatal() {
    let dir = TempDir::new().unwrap();
    let listing = walk_tree(&dir.path().join("absent"), &ScanConfig::default());
    assert!(listing.files.is_empty());
}

#[test]
fn extensions_are_lowercased() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "Contract.SOL");
    let files = list_tree(dir.path(), &ScanConfig::default());
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].extension, ".sol");
    assert_eq!(files[0].file_name, "Contract.SOL");
}

#[cfg(unix)]
#[test]
fn symlinks_are_not_followed_by_default() {
    let outside = TempDir::new().unwrap();
    touch(outside.path(), "lib/secret.rs");
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "main.rs");
    std::os::unix::fs::symlink(outside.path().join("lib"), dir.path().join("linked")).unwrap();

    assert_eq!(paths(dir.path(), &ScanConfig::default()), vec!["main.rs"]);

    let follow = ScanConfig {
        follow_symlinks: Some(true),
        ..Default::default()
    };
    assert_eq!(paths(dir.path(), &follow), vec!["linked/secret.rs", "main.rs"]);
}

#[cfg(unix)]
#[test]
fn symlink_loop_is_counted_not_fatal() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "a/x.sol");
    std::os::unix::fs::symlink(dir.path(), dir.path().join("a/loop")).unwrap();

    let follow = ScanConfig {
        follow_symlinks: Some(true),
        ..Default::default()
    };
    let listing = walk_tree(dir.path(), &follow);
    let files: Vec<_> = listing.files.iter().map(|f| f.relative_path.as_str()).collect();
    assert_eq!(files, vec!["a/x.sol"]);
    assert!(listing.unreadable >= 1);
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_contributes_nothing() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    touch(dir.path(), "src/main.rs");
    touch(dir.path(), "locked/hidden.sol");
    let locked = dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still read the directory.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let listing = walk_tree(dir.path(), &ScanConfig::default());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let files: Vec<_> = listing.files.iter().map(|f| f.relative_path.as_str()).collect();
    assert_eq!(files, vec!["src/main.rs"]);
    assert!(listing.unreadable >= 1);
}

#[test]
fn primary_language_of_tree() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "contracts/A.sol");
    touch(dir.path(), "contracts/B.sol");
    touch(dir.path(), "scripts/deploy.ts");
    touch(dir.path(), "node_modules/x/a.js");
    touch(dir.path(), "node_modules/x/b.js");
    touch(dir.path(), "node_modules/x/c.js");

    let files = list_tree(dir.path(), &ScanConfig::default());
    assert_eq!(primary_language(&files), Some(Language::Solidity));
    assert_eq!(Language::Solidity.name(), "Solidity");
}
