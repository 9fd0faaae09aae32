//! Showcase index document types.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use showcase_core::types::Category;

/// The aggregated showcase document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseData {
    pub last_updated: String,
    pub total_projects: usize,
    pub categories: BTreeMap<String, CategorySummary>,
    pub projects: Vec<ShowcaseProject>,
    pub statistics: Statistics,
}

/// One project as published in the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseProject {
    pub id: String,
    pub username: String,
    pub project_name: String,
    pub name: String,
    pub description: String,
    pub author: Value,
    pub category: String,
    pub tags: Value,
    pub satox_sdks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    pub version: String,
    pub last_updated: String,
    pub preview: Value,
    pub stars: u64,
    pub forks: u64,
    pub downloads: u64,
    pub views: u64,
    pub featured: bool,
    pub verified: bool,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Screenshots>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_video: Option<String>,
    pub language: String,
}

impl ShowcaseProject {
    /// `last_updated` as a timestamp; unparsable values sort oldest.
    pub fn updated_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.last_updated).ok()
    }
}

/// Screenshot and thumbnail paths keyed by viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshots {
    #[serde(flatten)]
    pub viewports: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub thumbnails: BTreeMap<String, String>,
}

impl Screenshots {
    pub fn is_empty(&self) -> bool {
        self.viewports.is_empty() && self.thumbnails.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub by_category: BTreeMap<String, usize>,
    pub by_sdk: BTreeMap<String, usize>,
    pub by_license: BTreeMap<String, usize>,
    pub by_language: BTreeMap<String, usize>,
}

impl Default for Statistics {
    /// Every canonical category starts at zero.
    fn default() -> Self {
        Self {
            by_category: Category::ALL.iter().map(|c| (c.as_str().to_string(), 0)).collect(),
            by_sdk: BTreeMap::new(),
            by_license: BTreeMap::new(),
            by_language: BTreeMap::new(),
        }
    }
}

impl Statistics {
    pub fn record(&mut self, project: &ShowcaseProject) {
        *self.by_category.entry(project.category.clone()).or_default() += 1;
        for sdk in &project.satox_sdks {
            *self.by_sdk.entry(sdk.clone()).or_default() += 1;
        }
        if let Some(license) = &project.license {
            *self.by_license.entry(license.clone()).or_default() += 1;
        }
        *self.by_language.entry(project.language.clone()).or_default() += 1;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
    pub featured_projects: Vec<FeaturedProject>,
    pub recent_projects: Vec<RecentProject>,
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_views: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedProject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub author: Value,
    pub stars: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentProject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub author: Value,
    pub last_updated: String,
}
