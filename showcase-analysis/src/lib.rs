//! # showcase-analysis
//!
//! Analysis engine for the project showcase: walks a project tree, extracts
//! keywords, scores them against every category, and persists the winner.
//! Also hosts the metadata validator and the showcase index aggregator.

pub mod classifier;
pub mod extraction;
pub mod scanner;
pub mod scoring;
pub mod showcase;
pub mod validation;
