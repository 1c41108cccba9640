use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::catalog::{Category, QuestionCatalog, QuestionKind};

/// Caller errors surfaced synchronously from evaluation; there is no
/// partial-result mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("answer '{value}' is not a declared option for question '{question_id}'")]
    InvalidAnswer { question_id: String, value: String },
    #[error("answer submitted for unknown question '{question_id}'")]
    UnknownQuestion { question_id: String },
}

/// A single answered question that drove a large share of its question's
/// possible weight, surfaced so officers can see what pushed the score up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub question_id: String,
    pub category: Category,
    pub answer: String,
}

pub(crate) struct ScoreBreakdown {
    pub total: u32,
    pub by_category: BTreeMap<Category, u32>,
    pub risk_flags: Vec<RiskFlag>,
    pub crisis_indicators: Vec<String>,
}

/// Aggregate weights from applicable, answered choice questions.
///
/// Hidden questions are excluded even when answered; their answers stay in
/// the set untouched. The sum is commutative, so evaluating the same set
/// twice yields identical results.
pub(crate) fn evaluate_scores(
    catalog: &QuestionCatalog,
    answers: &AnswerSet,
) -> Result<ScoreBreakdown, EvaluationError> {
    for (question_id, _) in answers.iter() {
        if catalog.question(question_id).is_none() {
            return Err(EvaluationError::UnknownQuestion {
                question_id: question_id.to_string(),
            });
        }
    }

    let mut by_category: BTreeMap<Category, u32> =
        Category::ALL.iter().map(|category| (*category, 0)).collect();
    let mut total: u32 = 0;
    let mut risk_flags = Vec::new();
    let mut crisis_indicators = Vec::new();

    for question in catalog.visible_questions(answers) {
        if question.kind != QuestionKind::Choice {
            continue;
        }
        let Some(value) = answers.get(&question.id) else {
            continue;
        };

        let weight = question.risk_weights.get(value).copied().ok_or_else(|| {
            EvaluationError::InvalidAnswer {
                question_id: question.id.clone(),
                value: value.to_string(),
            }
        })?;

        total += weight;
        *by_category.entry(question.section).or_insert(0) += weight;

        // Flag answers above 60% of the question's maximum weight.
        if 5 * weight > 3 * question.max_weight() {
            risk_flags.push(RiskFlag {
                question_id: question.id.clone(),
                category: question.section,
                answer: value.to_string(),
            });
        }

        if question.crisis_options.contains(value) {
            crisis_indicators.push(question.id.clone());
        }
    }

    Ok(ScoreBreakdown {
        total,
        by_category,
        risk_flags,
        crisis_indicators,
    })
}
