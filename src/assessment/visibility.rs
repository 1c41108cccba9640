use std::collections::BTreeMap;

use super::answers::AnswerSet;
use super::catalog::{Question, QuestionCatalog};

impl QuestionCatalog {
    /// Whether a question is currently applicable given the answers so far.
    ///
    /// Unknown ids are never visible. Gates fail open: a question whose gate
    /// is hidden or unanswered stays visible, so a respondent is never
    /// silently blocked from a question whose gate was never resolved.
    pub fn is_visible(&self, answers: &AnswerSet, question_id: &str) -> bool {
        self.resolve_visibility(answers)
            .get(question_id)
            .copied()
            .unwrap_or(false)
    }

    /// Catalog-ordered questions that are currently applicable.
    ///
    /// Pure and restartable: safe to call after every new answer or once with
    /// a completed set, with identical results.
    pub fn visible_questions(&self, answers: &AnswerSet) -> Vec<&Question> {
        let resolved = self.resolve_visibility(answers);
        self.all_questions()
            .iter()
            .filter(|question| resolved.get(question.id.as_str()).copied().unwrap_or(false))
            .collect()
    }

    /// Single forward pass in catalog order; conditional rules only reference
    /// earlier questions, so each gate is resolved before its dependents.
    fn resolve_visibility(&self, answers: &AnswerSet) -> BTreeMap<&str, bool> {
        let mut resolved: BTreeMap<&str, bool> = BTreeMap::new();

        for question in self.all_questions() {
            let visible = match &question.conditional {
                None => true,
                Some(rule) => {
                    let gate_visible = resolved
                        .get(rule.question_id.as_str())
                        .copied()
                        .unwrap_or(true);
                    match answers.get(&rule.question_id) {
                        Some(answer) if gate_visible => rule.still_relevant.contains(answer),
                        _ => true,
                    }
                }
            };
            resolved.insert(question.id.as_str(), visible);
        }

        resolved
    }
}
