pub mod corrections;
pub mod logging;
pub mod matching;
pub mod skill_set;
pub mod tokenizer;
pub mod vocabulary;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use corrections::numeric::{
    deserialize_lenient_id, deserialize_lenient_number, deserialize_lenient_ratings,
    deserialize_lenient_text,
};

pub use skill_set::SkillSet;
pub use vocabulary::Vocabulary;

// Records owned by the profile/job CRUD layer. Matching only ever reads them.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(deserialize_with = "deserialize_lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub name: String,
    #[serde(default, alias = "contact")]
    pub email: Option<String>,
    /// Comma separated, as typed by the candidate (plus any merged resume skills).
    #[serde(
        default,
        alias = "skillsText",
        deserialize_with = "deserialize_lenient_text"
    )]
    pub skills: String,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub cgpa: Option<f64>,
    #[serde(
        default,
        rename = "experience",
        alias = "experienceYears",
        deserialize_with = "deserialize_lenient_number"
    )]
    pub experience_years: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    #[serde(deserialize_with = "deserialize_lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub title: String,
    /// Primary skill field. May hold a single skill or a free-text list.
    #[serde(
        default,
        rename = "requiredSkill",
        alias = "requiredSkills",
        alias = "requiredSkillText",
        deserialize_with = "deserialize_lenient_text"
    )]
    pub required_skill: String,
    /// Job description text, mined for vocabulary keywords.
    #[serde(
        default,
        rename = "jobDescription",
        alias = "description",
        deserialize_with = "deserialize_lenient_text"
    )]
    pub description: String,
    #[serde(
        default,
        rename = "requiredCGPA",
        alias = "requiredCgpa",
        deserialize_with = "deserialize_lenient_number"
    )]
    pub required_cgpa: Option<f64>,
    #[serde(
        default,
        rename = "requiredExperience",
        deserialize_with = "deserialize_lenient_number"
    )]
    pub required_experience: Option<f64>,
    /// Stored human ratings by candidate id. Not clamped here; scoring clamps on use.
    #[serde(
        default,
        alias = "humanRatings",
        deserialize_with = "deserialize_lenient_ratings"
    )]
    pub ratings: HashMap<String, f64>,
}

impl JobRequirement {
    pub fn rating_for(&self, candidate_id: &str) -> Option<f64> {
        self.ratings.get(candidate_id).copied()
    }
}
