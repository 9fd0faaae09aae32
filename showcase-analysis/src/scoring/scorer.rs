//! Category scorer: ProjectData → ScoreVector → Category.

use showcase_core::constants::DEFAULT_MIN_SCORE;
use showcase_core::types::{Category, Sdk};

use super::score_vector::ScoreVector;
use super::table::{rule_for, SDK_BONUSES, STRUCTURAL_RULES};
use crate::extraction::ProjectData;

/// Accumulate keyword weights, SDK bonuses, and structural bonuses.
/// Pure: reads nothing but `data`.
pub fn score(data: &ProjectData) -> ScoreVector {
    let mut scores = ScoreVector::new();

    for rule in data.keywords.iter().filter_map(|k| rule_for(k)) {
        for &(category, weight) in rule.weights {
            scores.add(category, weight);
        }
    }

    let declared: Vec<Sdk> = data.sdks.iter().filter_map(|s| s.parse().ok()).collect();
    for &(sdk, category, bonus) in SDK_BONUSES {
        if declared.contains(&sdk) {
            scores.add(category, bonus);
        }
    }

    for rule in STRUCTURAL_RULES {
        if rule.fires(&data.files) {
            tracing::trace!(rule = rule.name, "structural bonus");
            scores.add(rule.category, rule.bonus);
        }
    }

    scores
}

/// Result of applying the selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub category: Category,
    /// Highest-scoring category before the threshold is applied.
    pub nominal: Category,
    pub score: u32,
}

impl Selection {
    pub fn fell_back(&self) -> bool {
        self.category != self.nominal
    }
}

/// Selection policy: strict maximum, canonical tie-break, fallback below
/// `min_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScorer {
    min_score: u32,
}

impl Default for CategoryScorer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCORE)
    }
}

impl CategoryScorer {
    pub fn new(min_score: u32) -> Self {
        Self { min_score }
    }

    pub fn min_score(&self) -> u32 {
        self.min_score
    }

    pub fn select(&self, scores: &ScoreVector) -> Selection {
        let (nominal, score) = scores.best();
        let category = if score < self.min_score {
            Category::FALLBACK
        } else {
            nominal
        };
        Selection {
            category,
            nominal,
            score,
        }
    }

    pub fn select_category(&self, scores: &ScoreVector) -> Category {
        self.select(scores).category
    }

    /// Score and select in one step.
    pub fn categorize(&self, data: &ProjectData) -> Selection {
        let scores = score(data);
        let selection = self.select(&scores);
        tracing::debug!(
            ?scores,
            nominal = %selection.nominal,
            score = selection.score,
            category = %selection.category,
            "scored project"
        );
        selection
    }
}
