use serde::Serialize;

use super::weights::{
    ALGORITHMIC_WEIGHT, COMPONENT_WEIGHTS, HUMAN_RATING_WEIGHT, MAX_HUMAN_RATING,
};
use crate::{
    CandidateProfile, JobRequirement, SkillSet, Vocabulary,
    corrections::{or_zero, positive_minimum},
    tokenizer::parse_skill_list,
};

/// Component scores on a 0–100 scale, kept unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub skill: f64,
    pub cgpa: f64,
    pub experience: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompositeScore {
    pub breakdown: ScoreBreakdown,
    /// Skill/CGPA/experience blend, 0–100.
    pub algorithmic_score: u32,
    /// Algorithmic score blended with the human rating, 0–100.
    pub final_score: u32,
}

/// Scores one (job, candidate) pair.
///
/// Skill score comes from vocabulary keywords found in the job description;
/// when there are none, from the job's primary skill field alone. Rounding
/// happens once for the algorithmic score and once for the final score.
pub fn score(
    requirement: &JobRequirement,
    candidate: &CandidateProfile,
    human_rating: Option<f64>,
    vocabulary: &Vocabulary,
) -> CompositeScore {
    let candidate_skills = parse_skill_list(&candidate.skills);

    let breakdown = ScoreBreakdown {
        skill: skill_score(requirement, &candidate_skills, vocabulary),
        cgpa: ratio_score(candidate.cgpa, requirement.required_cgpa),
        experience: ratio_score(candidate.experience_years, requirement.required_experience),
    };

    let algorithmic_score = algorithmic_score(&breakdown);
    let final_score = final_score(algorithmic_score, human_rating);

    CompositeScore {
        breakdown,
        algorithmic_score,
        final_score,
    }
}

pub fn skill_score(
    requirement: &JobRequirement,
    candidate_skills: &SkillSet,
    vocabulary: &Vocabulary,
) -> f64 {
    let keywords = vocabulary.extract(&requirement.description);
    if !keywords.is_empty() {
        let matched = keywords
            .iter()
            .filter(|keyword| candidate_skills.contains(keyword))
            .count();
        return matched as f64 / keywords.len() as f64 * 100.0;
    }

    let primary = requirement.required_skill.trim().to_lowercase();
    if !primary.is_empty() && candidate_skills.contains(&primary) {
        100.0
    } else {
        0.0
    }
}

/// 100 when the job sets no minimum, otherwise the candidate's share of it capped at 100.
pub fn ratio_score(actual: Option<f64>, required: Option<f64>) -> f64 {
    match positive_minimum(required) {
        Some(minimum) => (or_zero(actual) / minimum * 100.0).clamp(0.0, 100.0),
        None => 100.0,
    }
}

pub fn algorithmic_score(breakdown: &ScoreBreakdown) -> u32 {
    let blended = COMPONENT_WEIGHTS.skill * breakdown.skill
        + COMPONENT_WEIGHTS.cgpa * breakdown.cgpa
        + COMPONENT_WEIGHTS.experience * breakdown.experience;
    to_percent(blended)
}

/// Human rating clamped to 0–10, then scaled to 0–100. Absent counts as 0.
pub fn scaled_human_rating(human_rating: Option<f64>) -> f64 {
    or_zero(human_rating).clamp(0.0, MAX_HUMAN_RATING) * (100.0 / MAX_HUMAN_RATING)
}

pub fn final_score(algorithmic_score: u32, human_rating: Option<f64>) -> u32 {
    to_percent(
        ALGORITHMIC_WEIGHT * algorithmic_score as f64
            + HUMAN_RATING_WEIGHT * scaled_human_rating(human_rating),
    )
}

fn to_percent(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> JobRequirement {
        JobRequirement {
            id: "j-1".into(),
            title: "Frontend Developer".into(),
            required_skill: "react".into(),
            required_cgpa: Some(8.0),
            required_experience: Some(2.0),
            ..JobRequirement::default()
        }
    }

    fn candidate() -> CandidateProfile {
        CandidateProfile {
            id: "c-1".into(),
            name: "Asha".into(),
            skills: "react,node".into(),
            cgpa: Some(8.0),
            experience_years: Some(2.0),
            ..CandidateProfile::default()
        }
    }

    #[test]
    fn perfect_candidate_with_top_rating_scores_100() {
        let result = score(&job(), &candidate(), Some(10.0), &Vocabulary::builtin());

        assert_eq!(result.breakdown.skill, 100.0);
        assert_eq!(result.breakdown.cgpa, 100.0);
        assert_eq!(result.breakdown.experience, 100.0);
        assert_eq!(result.algorithmic_score, 100);
        assert_eq!(result.final_score, 100);
    }

    #[test]
    fn missing_rating_scales_final_to_80_percent() {
        let result = score(&job(), &candidate(), None, &Vocabulary::builtin());
        assert_eq!(result.algorithmic_score, 100);
        assert_eq!(result.final_score, 80);
    }

    #[test]
    fn description_keywords_take_precedence_over_primary_skill() {
        let mut job = job();
        job.description = "We use React, Redux and Figma".into();
        let vocabulary = Vocabulary::new(["react", "redux", "figma", "vue"]);

        let result = score(&job, &candidate(), None, &vocabulary);

        // 1 of 3 keywords matched
        assert!((result.breakdown.skill - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.algorithmic_score, 60);
        assert_eq!(result.final_score, 48);
    }

    #[test]
    fn primary_skill_must_be_declared_exactly() {
        let mut job = job();
        job.required_skill = " React ".into();
        let mut candidate = candidate();

        let skills = parse_skill_list(&candidate.skills);
        assert_eq!(skill_score(&job, &skills, &Vocabulary::default()), 100.0);

        candidate.skills = "react native".into();
        let skills = parse_skill_list(&candidate.skills);
        assert_eq!(skill_score(&job, &skills, &Vocabulary::default()), 0.0);
    }

    #[test]
    fn no_keywords_and_no_primary_skill_scores_zero() {
        let mut job = job();
        job.required_skill.clear();
        job.description = "Friendly team, great snacks".into();
        let vocabulary = Vocabulary::new(["rust"]);

        let skills = parse_skill_list("rust");
        assert_eq!(skill_score(&job, &skills, &vocabulary), 0.0);
    }

    #[test]
    fn ratio_scores_cap_at_100_and_ignore_absent_minimums() {
        assert_eq!(ratio_score(Some(9.0), Some(8.0)), 100.0);
        assert_eq!(ratio_score(Some(6.0), Some(8.0)), 75.0);
        assert_eq!(ratio_score(None, Some(8.0)), 0.0);
        assert_eq!(ratio_score(None, None), 100.0);
        assert_eq!(ratio_score(Some(1.0), Some(0.0)), 100.0);
        assert_eq!(ratio_score(Some(-3.0), Some(2.0)), 0.0);
    }

    #[test]
    fn partial_qualifications_blend_with_fixed_weights() {
        let mut candidate = candidate();
        candidate.cgpa = Some(6.0);
        candidate.experience_years = Some(1.0);

        let result = score(&job(), &candidate, Some(5.0), &Vocabulary::default());

        // 0.6*100 + 0.25*75 + 0.15*50 = 86.25
        assert_eq!(result.algorithmic_score, 86);
        // 0.8*86 + 0.2*50 = 78.8
        assert_eq!(result.final_score, 79);
    }

    #[test]
    fn human_rating_is_clamped_before_use() {
        assert_eq!(scaled_human_rating(Some(15.0)), 100.0);
        assert_eq!(scaled_human_rating(Some(-4.0)), 0.0);
        assert_eq!(scaled_human_rating(Some(f64::NAN)), 0.0);
        assert_eq!(scaled_human_rating(None), 0.0);
        assert_eq!(final_score(50, Some(42.0)), final_score(50, Some(10.0)));
    }

    #[test]
    fn scores_stay_within_bounds() {
        let empty = CandidateProfile::default();
        let result = score(&job(), &empty, Some(-1.0), &Vocabulary::builtin());

        assert_eq!(result.algorithmic_score, 0);
        assert_eq!(result.final_score, 0);
    }
}
