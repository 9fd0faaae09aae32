//! Dependency manifest reader (`package.json`).

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

/// Outcome of reading a dependency manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Manifest {
    /// No manifest file.
    Absent,
    /// Declared dependencies, name to version requirement.
    Parsed(BTreeMap<String, String>),
    /// The file exists but could not be read or parsed.
    Malformed(String),
}

impl Manifest {
    /// Dependency names, empty unless the manifest parsed.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        let deps = match self {
            Manifest::Parsed(deps) => Some(deps),
            _ => None,
        };
        deps.into_iter().flat_map(|d| d.keys().map(String::as_str))
    }
}

/// Read the manifest at `path`. Never fails; problems are folded into the
/// returned variant.
pub fn read_manifest(path: &Path) -> Manifest {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Manifest::Absent,
        Err(e) => return Manifest::Malformed(e.to_string()),
    };
    match serde_json::from_str::<Value>(&content) {
        Ok(value) => Manifest::Parsed(parse_dependencies(&value)),
        Err(e) => Manifest::Malformed(e.to_string()),
    }
}

/// Extract the `dependencies` object. Non-string versions are kept in their
/// JSON form; a missing or non-object `dependencies` yields an empty map.
fn parse_dependencies(root: &Value) -> BTreeMap<String, String> {
    root.get("dependencies")
        .and_then(Value::as_object)
        .map(|deps| {
            deps.iter()
                .map(|(name, version)| {
                    let version = match version {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (name.clone(), version)
                })
                .collect()
        })
        .unwrap_or_default()
}
