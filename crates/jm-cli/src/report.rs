use chrono::{DateTime, Utc};
use jm_common::{
    CandidateProfile, JobRequirement, SkillSet,
    matching::{MatchResult, RankView},
};
use serde::Serialize;

/// Envelope for every command's JSON output.
#[derive(Debug, Serialize)]
pub struct Report<T: Serialize> {
    pub generated_at: DateTime<Utc>,
    pub view: &'static str,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Report<T> {
    pub fn new(view: &'static str, body: T) -> Self {
        Self {
            generated_at: Utc::now(),
            view,
            body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobMatches {
    pub job_id: String,
    pub job_title: String,
    pub ranked_by: RankView,
    pub results: Vec<MatchResult>,
}

impl JobMatches {
    pub fn new(job: &JobRequirement, ranked_by: RankView, results: Vec<MatchResult>) -> Self {
        Self {
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            ranked_by,
            results,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobsReport {
    pub jobs: Vec<JobMatches>,
}

#[derive(Debug, Serialize)]
pub struct CandidateJobsReport {
    pub candidate_id: String,
    pub candidate_name: String,
    pub results: Vec<MatchResult>,
}

impl CandidateJobsReport {
    pub fn new(candidate: &CandidateProfile, results: Vec<MatchResult>) -> Self {
        Self {
            candidate_id: candidate.id.clone(),
            candidate_name: candidate.name.clone(),
            results,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExtractedSkillsReport {
    pub extracted: SkillSet,
    /// Declared skills followed by newly extracted ones, ready to store as the profile's skills text.
    pub merged: SkillSet,
    pub skills_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_flattens_body_next_to_timestamp() {
        let report = Report::new(
            "candidate_jobs",
            CandidateJobsReport {
                candidate_id: "c-1".into(),
                candidate_name: "Asha".into(),
                results: Vec::new(),
            },
        );

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["view"], "candidate_jobs");
        assert_eq!(value["candidate_id"], "c-1");
        assert!(value["generated_at"].is_string());
        assert!(value["results"].as_array().unwrap().is_empty());
    }

    #[test]
    fn job_matches_record_their_ordering() {
        let job = JobRequirement {
            id: "j-1".into(),
            title: "Data Analyst".into(),
            ..JobRequirement::default()
        };

        let value = serde_json::to_value(JobMatches::new(&job, RankView::Algorithmic, Vec::new())).unwrap();
        assert_eq!(value["ranked_by"], "algorithmic");
        assert_eq!(value["job_title"], "Data Analyst");
    }
}
