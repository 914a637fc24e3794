use tracing::{debug, instrument};

use super::{
    overlap::{MatchRule, overlap_with_rule},
    qualification::check_minimums,
    ranking::{RankView, rank},
    result::MatchResult,
    scoring::score,
    weights::{MIN_ALGORITHMIC_SCORE, MIN_OVERLAP_SCORE},
};
use crate::{CandidateProfile, JobRequirement, Vocabulary, tokenizer::tokenize};

#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub vocabulary: Vocabulary,
    /// Algorithm view keeps results strictly above this.
    pub min_algorithmic_score: u32,
    /// Skill-overlap views keep results with at least this many matched tokens.
    pub min_overlap_score: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::builtin(),
            min_algorithmic_score: MIN_ALGORITHMIC_SCORE,
            min_overlap_score: MIN_OVERLAP_SCORE,
        }
    }
}

impl MatchingConfig {
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            ..Self::default()
        }
    }
}

/// Scores (job, candidate) pairs and builds the three ranked views.
///
/// Stateless apart from its config, so one engine can serve any number of
/// requests concurrently.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Overlap, hard minimums and composite score for one pair.
    /// The human rating is the one stored on the job for this candidate.
    pub fn evaluate(
        &self,
        job: &JobRequirement,
        candidate: &CandidateProfile,
        rule: MatchRule,
    ) -> MatchResult {
        let overlap = overlap_with_rule(&job.required_skill, &candidate.skills, rule);
        let qualification = check_minimums(candidate, job);
        let composite = score(
            job,
            candidate,
            job.rating_for(&candidate.id),
            &self.config.vocabulary,
        );

        if let Some(reasons) = qualification.failure_reasons() {
            debug!(
                job_id = %job.id,
                candidate_id = %candidate.id,
                %reasons,
                "candidate below job minimums"
            );
        }

        MatchResult::assemble(job, candidate, overlap, &qualification, composite)
    }

    /// Candidates sharing at least one exact skill token with the job.
    #[instrument(skip_all, fields(job_id = %job.id, candidates = candidates.len()))]
    pub fn match_results_for_job(
        &self,
        job: &JobRequirement,
        candidates: &[CandidateProfile],
    ) -> Vec<MatchResult> {
        if tokenize(&job.required_skill).is_empty() {
            debug!("job has no required skill tokens");
            return Vec::new();
        }

        let results = candidates
            .iter()
            .map(|candidate| self.evaluate(job, candidate, MatchRule::Exact))
            .filter(|result| self.meets_overlap_threshold(result));

        let ranked = rank(results, RankView::SkillOverlap);
        debug!(matched = ranked.len(), "ranked skill overlap view");
        ranked
    }

    /// Candidates whose algorithmic score clears the configured threshold.
    #[instrument(skip_all, fields(job_id = %job.id, candidates = candidates.len()))]
    pub fn algorithmic_matches_for_job(
        &self,
        job: &JobRequirement,
        candidates: &[CandidateProfile],
    ) -> Vec<MatchResult> {
        let min_score = self.config.min_algorithmic_score;

        let results = candidates
            .iter()
            .map(|candidate| self.evaluate(job, candidate, MatchRule::Exact))
            .filter(|result| {
                let keep = result.algorithmic_score > min_score;
                if !keep {
                    debug!(
                        candidate_id = %result.candidate_id,
                        algorithmic_score = result.algorithmic_score,
                        min_score,
                        "below algorithmic threshold"
                    );
                }
                keep
            });

        let ranked = rank(results, RankView::Algorithmic);
        debug!(matched = ranked.len(), "ranked algorithmic view");
        ranked
    }

    /// Jobs a candidate's declared skills reach under the containment rule.
    /// Equal-scoring jobs keep the order they were given in.
    #[instrument(skip_all, fields(candidate_id = %candidate.id, jobs = jobs.len()))]
    pub fn matched_jobs_for_candidate(
        &self,
        candidate: &CandidateProfile,
        jobs: &[JobRequirement],
    ) -> Vec<MatchResult> {
        let results = jobs
            .iter()
            .map(|job| self.evaluate(job, candidate, MatchRule::Containment))
            .filter(|result| self.meets_overlap_threshold(result));

        let ranked = rank(results, RankView::SkillOverlap);
        debug!(matched = ranked.len(), "ranked candidate job view");
        ranked
    }

    fn meets_overlap_threshold(&self, result: &MatchResult) -> bool {
        let keep = result.overlap_score >= self.config.min_overlap_score;
        if !keep {
            debug!(
                job_id = %result.job_id,
                candidate_id = %result.candidate_id,
                overlap_score = result.overlap_score,
                "no skill overlap"
            );
        }
        keep
    }
}
