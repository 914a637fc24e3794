use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::SkillSet;
use crate::tokenizer::{parse_skill_list, tokenize};

/// How a requirement token finds a counterpart among the candidate's skills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchRule {
    /// Token equality. Used by the structured skill view.
    #[default]
    Exact,
    /// Equality, or either token containing the other as a substring.
    ///
    /// Tolerates `react` vs `react native` style phrasing at the price of
    /// false positives on short tokens (`c` is inside `css`).
    // TODO: product review before hardening; a minimum token length would cut most false positives.
    Containment,
}

impl MatchRule {
    pub fn token_matches(self, requirement_token: &str, candidate_token: &str) -> bool {
        match self {
            MatchRule::Exact => requirement_token == candidate_token,
            MatchRule::Containment => {
                requirement_token == candidate_token
                    || candidate_token.contains(requirement_token)
                    || requirement_token.contains(candidate_token)
            }
        }
    }

    fn matches_any(self, requirement_token: &str, candidate: &SkillSet) -> bool {
        match self {
            MatchRule::Exact => candidate.contains(requirement_token),
            MatchRule::Containment => candidate
                .iter()
                .any(|skill| self.token_matches(requirement_token, skill)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapResult {
    /// Requirement tokens that found a match, in requirement order.
    pub matched: SkillSet,
    pub score: usize,
    pub requirement_count: usize,
    pub candidate_count: usize,
}

impl OverlapResult {
    /// Share of requirement tokens matched, 0–100. Zero when the requirement has no tokens.
    pub fn percent(&self) -> u32 {
        if self.requirement_count == 0 {
            return 0;
        }
        (self.score as f64 / self.requirement_count as f64 * 100.0).round() as u32
    }
}

/// Exact-token overlap between a requirement text and a candidate's skills text.
pub fn overlap(requirement_text: &str, candidate_text: &str) -> OverlapResult {
    overlap_with_rule(requirement_text, candidate_text, MatchRule::Exact)
}

/// The requirement side is always tokenized. Under [`MatchRule::Containment`]
/// the candidate side is read as a comma separated skill list, so declared
/// phrases like `react native` stay whole for substring checks.
pub fn overlap_with_rule(
    requirement_text: &str,
    candidate_text: &str,
    rule: MatchRule,
) -> OverlapResult {
    let requirement = tokenize(requirement_text);
    let candidate = match rule {
        MatchRule::Exact => tokenize(candidate_text),
        MatchRule::Containment => parse_skill_list(candidate_text),
    };
    overlap_sets(&requirement, &candidate, rule)
}

pub fn overlap_sets(requirement: &SkillSet, candidate: &SkillSet, rule: MatchRule) -> OverlapResult {
    let matched: SkillSet = requirement
        .iter()
        .filter(|token| rule.matches_any(token, candidate))
        .collect();

    OverlapResult {
        score: matched.len(),
        matched,
        requirement_count: requirement.len(),
        candidate_count: candidate.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_exact_token_overlap() {
        let result = overlap("React Node", "react, python");

        let expected: SkillSet = ["react"].into_iter().collect();
        assert_eq!(result.matched, expected);
        assert_eq!(result.score, 1);
        assert_eq!(result.requirement_count, 2);
        assert_eq!(result.candidate_count, 2);
        assert_eq!(result.percent(), 50);
    }

    #[test]
    fn exact_rule_does_not_match_fragments() {
        let result = overlap("react", "react-native");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn empty_requirement_has_zero_percent() {
        let result = overlap("", "react, python");
        assert_eq!(result.requirement_count, 0);
        assert_eq!(result.score, 0);
        assert_eq!(result.percent(), 0);
    }

    #[test]
    fn percent_rounds_to_nearest_integer() {
        let result = overlap("html css javascript", "html, css");
        assert_eq!(result.percent(), 67);
    }

    #[test]
    fn containment_matches_either_direction() {
        assert!(MatchRule::Containment.token_matches("react", "react native"));
        assert!(MatchRule::Containment.token_matches("node.js", "node"));
        assert!(MatchRule::Containment.token_matches("sql", "sql"));
        assert!(!MatchRule::Containment.token_matches("java", "python"));
        assert!(!MatchRule::Exact.token_matches("react", "react native"));
    }

    #[test]
    fn containment_overlap_reads_candidate_phrases_whole() {
        let result = overlap_with_rule("React, Node.js", "react native, node", MatchRule::Containment);

        assert_eq!(result.matched.as_slice(), ["react", "node.js"]);
        assert_eq!(result.candidate_count, 2);
    }

    #[test]
    fn containment_keeps_short_token_false_positives() {
        let result = overlap_with_rule("c", "css", MatchRule::Containment);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn matched_set_is_independent_of_token_order() {
        let forward = overlap("react node sql", "sql, react, go");
        let reversed = overlap("sql node react", "go, react, sql");

        assert_eq!(forward.matched, reversed.matched);
        assert_eq!(forward.score, reversed.score);
    }
}
