//! Subcommand implementations.

pub mod categorize;
pub mod update_data;
pub mod validate;

use showcase_core::errors::ShowcaseErrorCode;

/// Convert a coded error into an `anyhow` error carrying its report line.
pub fn report<E>(err: E) -> anyhow::Error
where
    E: ShowcaseErrorCode + std::fmt::Display,
{
    anyhow::anyhow!(err.report_string())
}
