//! The persisted per-project metadata record (`satox.json`).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::category::Category;

/// Project metadata as stored next to the project sources.
///
/// Every known field is optional on disk so that a record is written back
/// exactly as it was read apart from the fields the classifier owns.
/// The outer `Option` tracks presence and the inner one an explicit `null`.
/// Fields this type does not model are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub tags: Option<Option<Vec<String>>>,
    #[serde(
        rename = "satox_sdks",
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub declared_sdks: Option<Option<Vec<String>>>,
    /// Blank and `null` both read as unset; the field is always rewritten
    /// alongside `last_updated`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "unset_or_category"
    )]
    pub category: Option<Category>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub last_updated: Option<Option<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn unset_or_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl ProjectMetadata {
    pub fn name(&self) -> &str {
        self.name.as_ref().and_then(Option::as_deref).unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description
            .as_ref()
            .and_then(Option::as_deref)
            .unwrap_or_default()
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_ref().and_then(Option::as_deref).unwrap_or_default()
    }

    pub fn declared_sdks(&self) -> &[String] {
        self.declared_sdks
            .as_ref()
            .and_then(Option::as_deref)
            .unwrap_or_default()
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_ref().and_then(Option::as_deref)
    }

    /// The stored category, or the unclassified sentinel when absent.
    pub fn effective_category(&self) -> Category {
        self.category.unwrap_or(Category::UNCLASSIFIED)
    }

    /// True once a non-sentinel category has been assigned.
    pub fn is_categorized(&self) -> bool {
        self.effective_category().is_assigned()
    }

    /// Record a classification decision and refresh `last_updated`.
    pub fn assign_category(&mut self, category: Category, at: DateTime<Utc>) {
        self.category = Some(category);
        self.last_updated = Some(Some(at.to_rfc3339_opts(SecondsFormat::Millis, true)));
    }
}
