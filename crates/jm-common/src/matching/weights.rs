//! Scoring policy. Fixed for output parity; not configurable per call.

pub const SKILL_WEIGHT: f64 = 0.60;
pub const CGPA_WEIGHT: f64 = 0.25;
pub const EXPERIENCE_WEIGHT: f64 = 0.15;

/// Share of the final score taken from the algorithmic score.
pub const ALGORITHMIC_WEIGHT: f64 = 0.80;
/// Share of the final score taken from the human rating (scaled to 0–100).
pub const HUMAN_RATING_WEIGHT: f64 = 0.20;
pub const MAX_HUMAN_RATING: f64 = 10.0;

/// Algorithm view surfaces only results strictly above this.
pub const MIN_ALGORITHMIC_SCORE: u32 = 30;
/// Skill-overlap views surface only results with at least this many matched tokens.
pub const MIN_OVERLAP_SCORE: usize = 1;

/// Blend of the three component scores into the algorithmic score.
pub const COMPONENT_WEIGHTS: ComponentWeights = ComponentWeights {
    skill: SKILL_WEIGHT,
    cgpa: CGPA_WEIGHT,
    experience: EXPERIENCE_WEIGHT,
};

#[derive(Debug, Clone, Copy)]
pub struct ComponentWeights {
    pub skill: f64,
    pub cgpa: f64,
    pub experience: f64,
}

impl ComponentWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.cgpa + self.experience
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((COMPONENT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
        assert!((ALGORITHMIC_WEIGHT + HUMAN_RATING_WEIGHT - 1.0).abs() < 1e-9);
    }
}
