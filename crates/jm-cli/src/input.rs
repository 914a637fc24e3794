use std::{fs, path::Path};

use jm_common::{CandidateProfile, JobRequirement, Vocabulary};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::CliError;

/// Reads a JSON array of records.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CliError> {
    let raw = read_text(path)?;
    let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// One skill per line. Without a file the builtin catalog is used.
pub fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary, CliError> {
    let Some(path) = path else {
        return Ok(Vocabulary::builtin());
    };

    let vocabulary = Vocabulary::from_lines(&read_text(path)?);
    if vocabulary.is_empty() {
        return Err(CliError::EmptyVocabulary(path.to_path_buf()));
    }

    info!(path = %path.display(), entries = vocabulary.len(), "loaded vocabulary");
    Ok(vocabulary)
}

pub fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn find_job<'a>(jobs: &'a [JobRequirement], job_id: &str) -> Result<&'a JobRequirement, CliError> {
    jobs.iter()
        .find(|job| job.id == job_id)
        .ok_or_else(|| CliError::UnknownJob(job_id.to_string()))
}

pub fn find_candidate<'a>(
    candidates: &'a [CandidateProfile],
    candidate_id: &str,
) -> Result<&'a CandidateProfile, CliError> {
    candidates
        .iter()
        .find(|candidate| candidate.id == candidate_id)
        .ok_or_else(|| CliError::UnknownCandidate(candidate_id.to_string()))
}
