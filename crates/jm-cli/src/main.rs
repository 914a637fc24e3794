mod error;
mod input;
mod report;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use jm_common::{
    CandidateProfile, JobRequirement,
    logging::{init_tracing_subscriber, install_tracing_panic_hook},
    matching::{MatchResult, MatchingConfig, MatchingEngine, RankView},
    vocabulary::merge_skills,
};
use serde::Serialize;
use tracing::info;

use crate::{
    error::CliError,
    input::{find_candidate, find_job, load_records, load_vocabulary, read_text},
    report::{CandidateJobsReport, ExtractedSkillsReport, JobMatches, JobsReport, Report},
};

#[derive(Debug, Parser)]
#[command(name = "jm-cli", about = "Rank candidates against job postings", version)]
struct Cli {
    /// JSON array of job postings
    #[arg(long, env = "JM_JOBS_FILE", global = true)]
    jobs: Option<PathBuf>,

    /// JSON array of candidate profiles
    #[arg(long, env = "JM_CANDIDATES_FILE", global = true)]
    candidates: Option<PathBuf>,

    /// Skill vocabulary, one entry per line (defaults to the builtin catalog)
    #[arg(long, env = "JM_VOCABULARY_FILE", global = true)]
    vocabulary_file: Option<PathBuf>,

    /// Algorithm view keeps only results scoring strictly above this
    #[arg(
        long,
        env = "JM_MIN_ALGORITHMIC_SCORE",
        global = true,
        default_value_t = jm_common::matching::weights::MIN_ALGORITHMIC_SCORE,
        value_parser = clap::value_parser!(u32).range(0..=100)
    )]
    min_algorithmic_score: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Candidates sharing required skill tokens with each job
    MatchResults {
        /// Only this job
        #[arg(long)]
        job_id: Option<String>,
    },
    /// Candidates ranked by the weighted skill/CGPA/experience score
    AlgorithmicMatches {
        #[arg(long)]
        job_id: Option<String>,
    },
    /// Jobs a candidate's declared skills reach
    CandidateJobs {
        #[arg(long)]
        candidate_id: String,
    },
    /// Known skills found in free text such as a resume
    ExtractSkills {
        #[arg(long)]
        text_file: PathBuf,
        /// Comma separated skills the candidate already declared
        #[arg(long, default_value = "")]
        declared: String,
    },
}

impl Cli {
    fn engine(&self) -> Result<MatchingEngine, CliError> {
        let vocabulary = load_vocabulary(self.vocabulary_file.as_deref())?;
        Ok(MatchingEngine::new(MatchingConfig {
            min_algorithmic_score: self.min_algorithmic_score,
            ..MatchingConfig::with_vocabulary(vocabulary)
        }))
    }

    fn load_jobs(&self) -> Result<Vec<JobRequirement>, CliError> {
        let path = required_path(self.jobs.as_deref(), "--jobs", "JM_JOBS_FILE")?;
        load_records(path)
    }

    fn load_candidates(&self) -> Result<Vec<CandidateProfile>, CliError> {
        let path = required_path(self.candidates.as_deref(), "--candidates", "JM_CANDIDATES_FILE")?;
        load_records(path)
    }
}

fn required_path<'a>(
    path: Option<&'a Path>,
    flag: &'static str,
    env: &'static str,
) -> Result<&'a Path, CliError> {
    path.ok_or(CliError::MissingInput { flag, env })
}

fn rank_jobs(
    jobs: &[JobRequirement],
    job_id: Option<&str>,
    ranked_by: RankView,
    mut rank_one: impl FnMut(&JobRequirement) -> Vec<MatchResult>,
) -> Result<JobsReport, CliError> {
    let selected = match job_id {
        Some(id) => vec![find_job(jobs, id)?],
        None => jobs.iter().collect(),
    };

    let jobs = selected
        .into_iter()
        .map(|job| JobMatches::new(job, ranked_by, rank_one(job)))
        .collect();
    Ok(JobsReport { jobs })
}

fn print_json<T: Serialize>(report: &Report<T>) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn run() -> Result<(), CliError> {
    let _ = dotenv();
    init_tracing_subscriber(env!("CARGO_PKG_NAME"));
    install_tracing_panic_hook(env!("CARGO_PKG_NAME"));

    let cli = Cli::parse();
    let engine = cli.engine()?;
    info!(
        vocabulary = engine.config().vocabulary.len(),
        min_algorithmic_score = engine.config().min_algorithmic_score,
        "matching engine ready"
    );

    match &cli.command {
        Command::MatchResults { job_id } => {
            let jobs = cli.load_jobs()?;
            let candidates = cli.load_candidates()?;
            let report = rank_jobs(&jobs, job_id.as_deref(), RankView::SkillOverlap, |job| {
                engine.match_results_for_job(job, &candidates)
            })?;
            print_json(&Report::new("match_results", report))
        }
        Command::AlgorithmicMatches { job_id } => {
            let jobs = cli.load_jobs()?;
            let candidates = cli.load_candidates()?;
            let report = rank_jobs(&jobs, job_id.as_deref(), RankView::Algorithmic, |job| {
                engine.algorithmic_matches_for_job(job, &candidates)
            })?;
            print_json(&Report::new("algorithmic_matches", report))
        }
        Command::CandidateJobs { candidate_id } => {
            let jobs = cli.load_jobs()?;
            let candidates = cli.load_candidates()?;
            let candidate = find_candidate(&candidates, candidate_id)?;
            let results = engine.matched_jobs_for_candidate(candidate, &jobs);
            print_json(&Report::new(
                "candidate_jobs",
                CandidateJobsReport::new(candidate, results),
            ))
        }
        Command::ExtractSkills {
            text_file,
            declared,
        } => {
            let text = read_text(text_file)?;
            let extracted = engine.config().vocabulary.extract(&text);
            let merged = merge_skills(declared, &extracted);
            let skills_text = merged.to_display_string();
            print_json(&Report::new(
                "extract_skills",
                ExtractedSkillsReport {
                    extracted,
                    merged,
                    skills_text,
                },
            ))
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("jm-cli failed: {err}");
        std::process::exit(1);
    }
}
