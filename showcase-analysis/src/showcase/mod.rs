//! Showcase index: discovers every project under the projects directory and
//! aggregates their metadata into one JSON document.

pub mod aggregator;
pub mod summaries;
pub mod types;

pub use aggregator::{write_showcase, ShowcaseAggregator};
pub use summaries::category_summaries;
pub use types::{
    CategorySummary, FeaturedProject, RecentProject, Screenshots, ShowcaseData, ShowcaseProject,
    Statistics,
};
