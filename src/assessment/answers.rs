use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A respondent's raw answers keyed by question id.
///
/// Partial sets are valid; the engine tolerates missing answers and never
/// mutates a submitted set. Answers to questions that later become hidden
/// stay in the set but stop contributing to the score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or replace an answer. Used by the capture surface, not the engine.
    pub fn record(&mut self, question_id: impl Into<String>, answer: impl Into<String>) {
        self.answers.insert(question_id.into(), answer.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers
            .iter()
            .map(|(id, answer)| (id.as_str(), answer.as_str()))
    }
}

impl From<BTreeMap<String, String>> for AnswerSet {
    fn from(answers: BTreeMap<String, String>) -> Self {
        Self { answers }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(id, answer)| (id.into(), answer.into()))
                .collect(),
        }
    }
}
