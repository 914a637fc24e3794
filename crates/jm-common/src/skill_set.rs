use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Normalized skill tokens with set semantics.
///
/// Membership and equality ignore order, but iteration and serialization keep
/// first-insertion order so extracted skills read the way they were found.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
    ordered: Vec<String>,
    index: HashSet<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the token was already present or is blank.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if token.is_empty() || self.index.contains(&token) {
            return false;
        }
        self.index.insert(token.clone());
        self.ordered.push(token);
        true
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains(token)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.ordered.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    /// `", "`-joined, the form stored back onto a profile's skills field.
    pub fn to_display_string(&self) -> String {
        self.ordered.join(", ")
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

impl PartialEq for SkillSet {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for SkillSet {}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for SkillSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(tokens: Vec<String>) -> Self {
        tokens.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.ordered
    }
}
