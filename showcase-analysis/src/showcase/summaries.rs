//! Per-category summaries.

use std::collections::BTreeMap;

use chrono::DateTime;
use showcase_core::constants::{FEATURED_PER_CATEGORY, RECENT_PER_CATEGORY};

use super::types::{CategorySummary, FeaturedProject, RecentProject, ShowcaseProject};

/// Group projects by category with totals, featured projects (most stars
/// first) and recently updated projects (newest first).
pub fn category_summaries(projects: &[ShowcaseProject]) -> BTreeMap<String, CategorySummary> {
    let mut summaries: BTreeMap<String, CategorySummary> = BTreeMap::new();

    for project in projects {
        let summary = summaries
            .entry(project.category.clone())
            .or_insert_with(|| CategorySummary {
                name: project.category.clone(),
                count: 0,
                featured_projects: Vec::new(),
                recent_projects: Vec::new(),
                total_stars: 0,
                total_forks: 0,
                total_views: 0,
            });

        summary.count += 1;
        summary.total_stars += project.stars;
        summary.total_forks += project.forks;
        summary.total_views += project.views;

        if project.featured {
            summary.featured_projects.push(FeaturedProject {
                id: project.id.clone(),
                name: project.name.clone(),
                description: project.description.clone(),
                author: project.author.clone(),
                stars: project.stars,
            });
        }
        summary.recent_projects.push(RecentProject {
            id: project.id.clone(),
            name: project.name.clone(),
            description: project.description.clone(),
            author: project.author.clone(),
            last_updated: project.last_updated.clone(),
        });
    }

    for summary in summaries.values_mut() {
        summary.featured_projects.sort_by(|a, b| b.stars.cmp(&a.stars));
        summary.featured_projects.truncate(FEATURED_PER_CATEGORY);

        summary.recent_projects.sort_by(|a, b| {
            let a = DateTime::parse_from_rfc3339(&a.last_updated).ok();
            let b = DateTime::parse_from_rfc3339(&b.last_updated).ok();
            b.cmp(&a)
        });
        summary.recent_projects.truncate(RECENT_PER_CATEGORY);
    }

    summaries
}
