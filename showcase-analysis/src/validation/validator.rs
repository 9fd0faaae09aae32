//! Rule checks over the raw JSON of a metadata record.
//!
//! Works on `serde_json::Value` rather than `ProjectMetadata` so that
//! malformed field types are reported as validation failures instead of
//! deserialization errors. The first failing rule wins.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use showcase_core::errors::ValidationError;
use showcase_core::types::{Category, License, Sdk};

const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "description",
    "author",
    "category",
    "satox_sdks",
    "repository",
    "license",
];

const GITHUB_PREFIX: &str = "https://github.com/";

static SEMVER_PREFIX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+").ok());

/// Loose truthiness: absent, null, false, 0, and "" are falsy.
/// Arrays and objects are always truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Read and validate `<project>/<metadata_file>`, returning the raw record.
pub fn validate_project(project: &Path, metadata_file: &str) -> Result<Value, ValidationError> {
    let path = project.join(metadata_file);
    let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ValidationError::MissingFile {
            path: project.to_path_buf(),
        },
        _ => ValidationError::Unreadable {
            path: path.clone(),
            source: e,
        },
    })?;
    let metadata: Value = serde_json::from_str(&content).map_err(|e| ValidationError::InvalidJson {
        message: e.to_string(),
    })?;

    validate_metadata(&metadata)?;
    let name = metadata.get("name").and_then(Value::as_str).unwrap_or_default();
    tracing::info!(project = name, "validated metadata");
    Ok(metadata)
}

/// Apply every rule to an already parsed record.
pub fn validate_metadata(metadata: &Value) -> Result<(), ValidationError> {
    for field in REQUIRED_FIELDS {
        if !is_truthy(metadata.get(field)) {
            return Err(ValidationError::MissingField { field });
        }
    }

    let author = &metadata["author"];
    if !is_truthy(author.get("username")) || !is_truthy(author.get("name")) {
        return Err(ValidationError::IncompleteAuthor);
    }

    let category = &metadata["category"];
    if !category.as_str().is_some_and(|c| c.parse::<Category>().is_ok()) {
        return Err(ValidationError::InvalidCategory {
            value: display_value(category),
            allowed: Category::valid_names(),
        });
    }

    validate_sdks(&metadata["satox_sdks"])?;

    if !metadata["repository"]
        .as_str()
        .is_some_and(|r| r.starts_with(GITHUB_PREFIX))
    {
        return Err(ValidationError::NonGithubRepository);
    }

    let license = &metadata["license"];
    if !license.as_str().is_some_and(|l| License::from_spdx(l).is_some()) {
        return Err(ValidationError::InvalidLicense {
            value: display_value(license),
            allowed: License::ALL.iter().map(|l| l.spdx()).collect::<Vec<_>>().join(", "),
        });
    }

    if is_truthy(metadata.get("version")) && !is_semver_prefixed(&metadata["version"]) {
        return Err(ValidationError::InvalidVersion);
    }

    if is_truthy(metadata.get("tags")) && !metadata["tags"].is_array() {
        return Err(ValidationError::TagsNotArray);
    }

    if is_truthy(metadata.get("preview")) {
        let live_demo = metadata["preview"].get("live_demo");
        if is_truthy(live_demo) && !live_demo.and_then(Value::as_str).is_some_and(|u| u.starts_with("http")) {
            return Err(ValidationError::InvalidLiveDemo);
        }
    }

    Ok(())
}

fn validate_sdks(sdks: &Value) -> Result<(), ValidationError> {
    let invalid = |value: String| ValidationError::InvalidSdk {
        value,
        allowed: Sdk::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", "),
    };
    let Some(list) = sdks.as_array() else {
        return Err(invalid(display_value(sdks)));
    };
    for sdk in list {
        if !sdk.as_str().is_some_and(|s| s.parse::<Sdk>().is_ok()) {
            return Err(invalid(display_value(sdk)));
        }
    }
    Ok(())
}

fn is_semver_prefixed(version: &Value) -> bool {
    let Some(version) = version.as_str() else {
        return false;
    };
    match SEMVER_PREFIX.as_ref() {
        Some(re) => re.is_match(version),
        None => false,
    }
}

/// Strings print bare; everything else prints as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
