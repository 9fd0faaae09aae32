use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use showcase_analysis::classifier::ProjectClassifier;
use showcase_core::config::ShowcaseConfig;
use showcase_core::errors::{MetadataError, ShowcaseErrorCode};

use super::report;

#[derive(Debug, Parser)]
pub struct CategorizeArgs {
    /// Project directory containing the metadata record.
    pub path: PathBuf,

    /// Re-classify even if a category is already set.
    #[arg(long, short)]
    pub force: bool,
}

pub fn run(config: &ShowcaseConfig, args: &CategorizeArgs) -> Result<()> {
    let classifier = ProjectClassifier::from_config(config);
    let result = if args.force {
        classifier.reclassify(&args.path)
    } else {
        classifier.classify(&args.path)
    };

    match result {
        Ok(outcome) if outcome.updated => {
            println!("Categorized {} as: {}", args.path.display(), outcome.category);
            Ok(())
        }
        Ok(outcome) => {
            println!("{} already categorized as: {}", args.path.display(), outcome.category);
            Ok(())
        }
        Err(err @ MetadataError::NotFound { .. }) => {
            tracing::warn!(code = err.error_code(), "{err}, skipping categorization");
            Ok(())
        }
        Err(err) => Err(report(err)),
    }
}
