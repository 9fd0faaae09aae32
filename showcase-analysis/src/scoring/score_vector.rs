//! Per-category score accumulator.

use std::fmt;

use showcase_core::types::Category;

/// One accumulator per category, indexed in canonical order.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ScoreVector {
    scores: [u32; Category::COUNT],
}

impl Default for ScoreVector {
    fn default() -> Self {
        Self {
            scores: [0; Category::COUNT],
        }
    }
}

impl ScoreVector {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, category: Category) -> u32 {
        self.scores[category.index()]
    }

    #[inline]
    pub fn add(&mut self, category: Category, weight: u32) {
        let slot = &mut self.scores[category.index()];
        *slot = slot.saturating_add(weight);
    }

    /// Scores in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(|&c| (c, self.get(c)))
    }

    /// Highest score, first category in canonical order on ties.
    /// An all-zero vector yields `(Custom, 0)`.
    pub fn best(&self) -> (Category, u32) {
        self.iter()
            .fold((Category::UNCLASSIFIED, 0), |best, (category, score)| {
                if score > best.1 {
                    (category, score)
                } else {
                    best
                }
            })
    }

    /// Categories with a non-zero score, highest first.
    pub fn ranked(&self) -> Vec<(Category, u32)> {
        let mut ranked: Vec<_> = self.iter().filter(|(_, s)| *s > 0).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl fmt::Debug for ScoreVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().filter(|(_, s)| *s > 0).map(|(c, s)| (c.as_str(), s)))
            .finish()
    }
}
