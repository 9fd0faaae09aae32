//! Showcase command-line surface.
//!
//! # Commands
//! - `showcase categorize <path>` - assign a category to one project
//! - `showcase validate <path>` - check a project's metadata record
//! - `showcase update-data` - rebuild the showcase index

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use showcase_core::config::{CliOverrides, ShowcaseConfig};

pub mod commands;

/// Classify, validate, and index community showcase projects.
#[derive(Debug, Parser)]
#[command(name = "showcase", version)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,

    /// Repository root holding `showcase.toml`. Defaults to the current directory.
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Override the minimum winning score.
    #[arg(long, global = true)]
    pub min_score: Option<u32>,

    /// Follow symbolic links while walking project trees.
    #[arg(long, global = true)]
    pub follow_symlinks: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Assign a category to a project that does not have one yet.
    Categorize(commands::categorize::CategorizeArgs),

    /// Validate a project's metadata record.
    Validate(commands::validate::ValidateArgs),

    /// Rebuild the aggregated showcase data file.
    UpdateData(commands::update_data::UpdateDataArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };

        match self.cmd {
            Command::Categorize(ref args) => {
                let config = load_config(&root, self.overrides(None, None))?;
                commands::categorize::run(&config, args)
            }
            Command::Validate(ref args) => {
                let config = load_config(&root, self.overrides(None, None))?;
                commands::validate::run(&config, args)
            }
            Command::UpdateData(ref args) => {
                let overrides = self.overrides(args.projects_dir.clone(), args.output.clone());
                let config = load_config(&root, overrides)?;
                commands::update_data::run(&config, &root)
            }
        }
    }

    fn overrides(&self, projects_dir: Option<PathBuf>, output: Option<PathBuf>) -> CliOverrides {
        CliOverrides {
            min_score: self.min_score,
            follow_symlinks: self.follow_symlinks.then_some(true),
            projects_dir,
            output,
        }
    }
}

fn load_config(root: &std::path::Path, overrides: CliOverrides) -> Result<ShowcaseConfig> {
    ShowcaseConfig::load(root, Some(&overrides)).map_err(commands::report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_categorize_with_force() {
        let cli = Cli::try_parse_from(["showcase", "categorize", "projects/a/b", "--force"]).unwrap();
        match cli.cmd {
            Command::Categorize(args) => {
                assert!(args.force);
                assert_eq!(args.path, PathBuf::from("projects/a/b"));
            }
            other => panic!("Expected Categorize, got: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["showcase", "update-data", "--min-score", "7", "--output", "out.json"])
            .unwrap();
        assert_eq!(cli.min_score, Some(7));
        let overrides = match &cli.cmd {
            Command::UpdateData(args) => cli.overrides(args.projects_dir.clone(), args.output.clone()),
            other => panic!("Expected UpdateData, got: {:?}", other),
        };
        assert_eq!(overrides.output, Some(PathBuf::from("out.json")));
        assert_eq!(overrides.follow_symlinks, None);
    }

    #[test]
    fn missing_path_is_a_usage_error() {
        let err = Cli::try_parse_from(["showcase", "validate"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
