use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use showcase_analysis::showcase::ShowcaseAggregator;
use showcase_core::config::ShowcaseConfig;

use super::report;

#[derive(Debug, Parser)]
pub struct UpdateDataArgs {
    /// Directory holding `<username>/<project>` trees.
    #[arg(long)]
    pub projects_dir: Option<PathBuf>,

    /// Output path for the showcase data file.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(config: &ShowcaseConfig, root: &Path) -> Result<()> {
    let projects_dir = config.index.effective_projects_dir(root);
    let output = config.index.effective_output(root);

    let data = ShowcaseAggregator::from_config(config)
        .update(&projects_dir, &output)
        .map_err(report)?;

    println!("Updated showcase data with {} projects", data.total_projects);
    println!("Categories: {}", data.categories.len());

    let mut by_category: Vec<_> = data
        .statistics
        .by_category
        .iter()
        .filter(|(_, count)| **count > 0)
        .collect();
    by_category.sort_by(|a, b| b.1.cmp(a.1));
    println!("\nBy Category:");
    for (category, count) in by_category {
        println!("  {category}: {count}");
    }

    let mut by_sdk: Vec<_> = data.statistics.by_sdk.iter().collect();
    by_sdk.sort_by(|a, b| b.1.cmp(a.1));
    println!("\nBy SDK:");
    for (sdk, count) in by_sdk {
        println!("  {sdk}: {count}");
    }

    Ok(())
}
