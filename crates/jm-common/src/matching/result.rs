use serde::Serialize;

use super::{
    overlap::OverlapResult, qualification::QualificationResult, scoring::CompositeScore,
    scoring::ScoreBreakdown,
};
use crate::{CandidateProfile, JobRequirement, SkillSet};

/// Scoring output for one (job, candidate) pair. Ephemeral; never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub candidate_id: String,
    pub candidate_name: String,
    pub job_id: String,
    pub job_title: String,
    pub matched_tokens: SkillSet,
    /// Count of requirement tokens with at least one match.
    pub overlap_score: usize,
    /// Relative to the job's token count; 0 when the job has none.
    pub overlap_percent: u32,
    pub passes_hard_filters: bool,
    pub breakdown: ScoreBreakdown,
    pub algorithmic_score: u32,
    pub final_score: u32,
}

impl MatchResult {
    pub fn assemble(
        job: &JobRequirement,
        candidate: &CandidateProfile,
        overlap: OverlapResult,
        qualification: &QualificationResult,
        composite: CompositeScore,
    ) -> Self {
        let overlap_percent = overlap.percent();

        Self {
            candidate_id: candidate.id.clone(),
            candidate_name: candidate.name.clone(),
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            matched_tokens: overlap.matched,
            overlap_score: overlap.score,
            overlap_percent,
            passes_hard_filters: qualification.passes(),
            breakdown: composite.breakdown,
            algorithmic_score: composite.algorithmic_score,
            final_score: composite.final_score,
        }
    }
}
