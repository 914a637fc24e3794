use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing input: pass {flag} or set {env}")]
    MissingInput {
        flag: &'static str,
        env: &'static str,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("vocabulary file {0} has no entries")]
    EmptyVocabulary(PathBuf),
    #[error("no job with id {0}")]
    UnknownJob(String),
    #[error("no candidate with id {0}")]
    UnknownCandidate(String),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}
