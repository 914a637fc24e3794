pub mod overlap;
pub mod pipeline;
pub mod qualification;
pub mod ranking;
pub mod result;
pub mod scoring;
pub mod weights;

pub use overlap::{MatchRule, OverlapResult, overlap, overlap_with_rule};
pub use pipeline::{MatchingConfig, MatchingEngine};
pub use qualification::{GateDecision, QualificationResult, check_minimums, passes_minimums};
pub use ranking::{RankView, rank};
pub use result::MatchResult;
pub use scoring::{CompositeScore, ScoreBreakdown, score};
