use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use showcase_analysis::validation::validate_project;
use showcase_core::config::ShowcaseConfig;

use super::report;

#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Project directory containing the metadata record.
    pub path: PathBuf,
}

pub fn run(config: &ShowcaseConfig, args: &ValidateArgs) -> Result<()> {
    let metadata_file = config.classify.effective_metadata_file();
    let record = validate_project(&args.path, metadata_file).map_err(report)?;
    let name = record.get("name").and_then(|n| n.as_str()).unwrap_or_default();
    println!("Validated {metadata_file} for {name}");
    Ok(())
}
