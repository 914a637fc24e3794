use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use super::result::MatchResult;

/// Which score fields order a ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RankView {
    /// Structured skill views: overlap count, then overlap percent.
    SkillOverlap,
    /// Algorithm-only views: algorithmic score, then final score.
    Algorithmic,
    /// Rating-aware views: final score, then algorithmic score.
    Final,
}

impl RankView {
    fn keys(self, result: &MatchResult) -> (u64, u64) {
        match self {
            RankView::SkillOverlap => (
                result.overlap_score as u64,
                result.overlap_percent as u64,
            ),
            RankView::Algorithmic => (
                result.algorithmic_score as u64,
                result.final_score as u64,
            ),
            RankView::Final => (
                result.final_score as u64,
                result.algorithmic_score as u64,
            ),
        }
    }

    pub fn compare(self, a: &MatchResult, b: &MatchResult) -> Ordering {
        let (a_primary, a_secondary) = self.keys(a);
        let (b_primary, b_secondary) = self.keys(b);

        b_primary
            .cmp(&a_primary)
            .then(b_secondary.cmp(&a_secondary))
            .then_with(|| a.candidate_name.cmp(&b.candidate_name))
    }
}

/// Drops results that fail a hard minimum, then orders the rest.
///
/// Descending primary and secondary keys, then ascending candidate name
/// (byte order, case-sensitive). The sort is stable, so fully tied entries
/// keep their input order and ranking an already ranked list changes nothing.
pub fn rank(results: impl IntoIterator<Item = MatchResult>, view: RankView) -> Vec<MatchResult> {
    let mut ranked: Vec<_> = results
        .into_iter()
        .filter(|result| result.passes_hard_filters)
        .collect();

    ranked.sort_by(|a, b| view.compare(a, b));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SkillSet;
    use crate::matching::scoring::ScoreBreakdown;

    fn result(name: &str, overlap: usize, percent: u32, algorithmic: u32, final_score: u32) -> MatchResult {
        MatchResult {
            candidate_id: format!("id-{name}"),
            candidate_name: name.to_string(),
            job_id: "j-1".into(),
            job_title: "Backend Developer".into(),
            matched_tokens: SkillSet::new(),
            overlap_score: overlap,
            overlap_percent: percent,
            passes_hard_filters: true,
            breakdown: ScoreBreakdown {
                skill: 0.0,
                cgpa: 0.0,
                experience: 0.0,
            },
            algorithmic_score: algorithmic,
            final_score,
        }
    }

    fn names(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.candidate_name.as_str()).collect()
    }

    #[test]
    fn orders_by_overlap_then_percent_then_name() {
        let ranked = rank(
            vec![
                result("Chen", 1, 50, 0, 0),
                result("Bela", 2, 40, 0, 0),
                result("Ana", 2, 40, 0, 0),
                result("Dev", 2, 67, 0, 0),
            ],
            RankView::SkillOverlap,
        );

        assert_eq!(names(&ranked), ["Dev", "Ana", "Bela", "Chen"]);
    }

    #[test]
    fn name_tie_break_is_case_sensitive() {
        let ranked = rank(
            vec![result("anil", 1, 50, 0, 0), result("Zoya", 1, 50, 0, 0)],
            RankView::SkillOverlap,
        );
        assert_eq!(names(&ranked), ["Zoya", "anil"]);
    }

    #[test]
    fn excludes_results_failing_hard_filters() {
        let mut failing = result("Ana", 3, 100, 90, 90);
        failing.passes_hard_filters = false;

        let ranked = rank(vec![failing, result("Bela", 1, 10, 20, 20)], RankView::Algorithmic);
        assert_eq!(names(&ranked), ["Bela"]);
    }

    #[test]
    fn algorithmic_and_final_views_use_their_own_keys() {
        let input = vec![result("Ana", 0, 0, 70, 56), result("Bela", 0, 0, 65, 72)];

        assert_eq!(names(&rank(input.clone(), RankView::Algorithmic)), ["Ana", "Bela"]);
        assert_eq!(names(&rank(input, RankView::Final)), ["Bela", "Ana"]);
    }

    #[test]
    fn fully_tied_entries_keep_input_order() {
        let mut first = result("Sam", 1, 50, 40, 32);
        first.candidate_id = "first".into();
        let mut second = result("Sam", 1, 50, 40, 32);
        second.candidate_id = "second".into();

        let ranked = rank(vec![first, second], RankView::SkillOverlap);
        assert_eq!(ranked[0].candidate_id, "first");
        assert_eq!(ranked[1].candidate_id, "second");
    }

    #[test]
    fn ranking_is_idempotent() {
        let input = vec![
            result("Chen", 1, 50, 80, 64),
            result("Ana", 2, 40, 30, 24),
            result("Bela", 2, 40, 55, 44),
        ];

        for view in [RankView::SkillOverlap, RankView::Algorithmic, RankView::Final] {
            let once = rank(input.clone(), view);
            let twice = rank(once.clone(), view);
            assert_eq!(once, twice, "view {}", view.as_ref());
        }
    }

    #[test]
    fn empty_input_ranks_to_empty() {
        assert!(rank(Vec::new(), RankView::Final).is_empty());
    }
}
