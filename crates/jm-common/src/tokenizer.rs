use once_cell::sync::Lazy;
use regex::Regex;

use crate::SkillSet;

/// Anything that cannot appear inside a skill name. Dots, plus signs,
/// hyphens and `#` stay attached so `node.js`, `c++` and `c#` survive.
static TOKEN_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9.+#\-]+").unwrap());

/// Splits free text (a required-skill field or a whole job description) into
/// lowercase skill tokens. Empty input gives an empty set.
pub fn tokenize(text: &str) -> SkillSet {
    let lowered = text.to_lowercase();
    TOKEN_SEPARATOR
        .split(&lowered)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Structured skill field: comma separated entries, each kept whole.
///
/// Unlike [`tokenize`], `"machine learning, c++"` yields two entries, not three.
pub fn parse_skill_list(text: &str) -> SkillSet {
    text.split(',')
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_empty_set() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ,;  ").is_empty());
    }

    #[test]
    fn keeps_dots_in_compound_tokens() {
        let tokens = tokenize("React, Node.js");
        let expected: SkillSet = ["react", "node.js"].into_iter().collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn keeps_plus_hash_and_hyphen() {
        let tokens = tokenize("C++ / C# and scikit-learn");
        assert_eq!(tokens.as_slice(), ["c++", "c#", "and", "scikit-learn"]);
    }

    #[test]
    fn splits_natural_language_and_dedupes() {
        let tokens = tokenize("Python developer (Python 3) with SQL; sql!");
        assert_eq!(tokens.as_slice(), ["python", "developer", "3", "with", "sql"]);
    }

    #[test]
    fn non_ascii_letters_separate_tokens() {
        let tokens = tokenize("java・spring");
        assert_eq!(tokens.as_slice(), ["java", "spring"]);
    }

    #[test]
    fn skill_list_keeps_multi_word_entries() {
        let skills = parse_skill_list(" Machine Learning, C++ ,, react ");
        assert_eq!(skills.as_slice(), ["machine learning", "c++", "react"]);
    }

    #[test]
    fn skill_list_of_blank_text_is_empty() {
        assert!(parse_skill_list("").is_empty());
        assert!(parse_skill_list(" , ,").is_empty());
    }
}
