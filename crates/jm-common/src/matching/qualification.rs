use crate::{
    CandidateProfile, JobRequirement,
    corrections::{or_zero, positive_minimum},
};

/// Outcome of one hard minimum.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    /// The job sets no minimum (absent, zero or unparsable).
    NoMinimum,
    /// The candidate meets or exceeds the minimum.
    Pass,
    /// Excludes the pair from ranked output.
    BelowMinimum { reason: String },
}

impl GateDecision {
    pub fn passes(&self) -> bool {
        !matches!(self, GateDecision::BelowMinimum { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            GateDecision::BelowMinimum { reason } => Some(reason),
            GateDecision::NoMinimum | GateDecision::Pass => None,
        }
    }
}

/// All hard-minimum decisions for one (job, candidate) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct QualificationResult {
    pub decisions: Vec<(&'static str, GateDecision)>,
}

impl QualificationResult {
    pub fn new(decisions: Vec<(&'static str, GateDecision)>) -> Self {
        Self { decisions }
    }

    pub fn passes(&self) -> bool {
        self.decisions.iter().all(|(_, decision)| decision.passes())
    }

    /// `"check: reason"` for every failed minimum, `; ` separated.
    pub fn failure_reasons(&self) -> Option<String> {
        let reasons: Vec<_> = self
            .decisions
            .iter()
            .filter_map(|(name, decision)| decision.reason().map(|r| format!("{name}: {r}")))
            .collect();

        if reasons.is_empty() {
            None
        } else {
            Some(reasons.join("; "))
        }
    }
}

pub fn check_minimums(
    candidate: &CandidateProfile,
    requirement: &JobRequirement,
) -> QualificationResult {
    QualificationResult::new(vec![
        (
            "cgpa",
            check_minimum("cgpa", candidate.cgpa, requirement.required_cgpa),
        ),
        (
            "experience",
            check_minimum(
                "experience",
                candidate.experience_years,
                requirement.required_experience,
            ),
        ),
    ])
}

pub fn passes_minimums(candidate: &CandidateProfile, requirement: &JobRequirement) -> bool {
    check_minimums(candidate, requirement).passes()
}

fn check_minimum(label: &str, actual: Option<f64>, required: Option<f64>) -> GateDecision {
    let Some(minimum) = positive_minimum(required) else {
        return GateDecision::NoMinimum;
    };

    let actual = or_zero(actual);
    if actual >= minimum {
        GateDecision::Pass
    } else {
        GateDecision::BelowMinimum {
            reason: format!("{label}_below_minimum: {actual} < {minimum}"),
        }
    }
}
