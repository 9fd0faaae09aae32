//! Category scoring: static weight table, score vector, and selection policy.

pub mod score_vector;
pub mod scorer;
pub mod table;

pub use score_vector::ScoreVector;
pub use scorer::{score, CategoryScorer, Selection};
pub use table::{KeywordRule, StructuralRule};
