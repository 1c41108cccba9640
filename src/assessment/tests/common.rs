use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::{
    assessment_router, AnswerSet, AssessmentEngine, AssessmentService, Category, Question,
    QuestionCatalog,
};

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::standard().expect("standard catalog is valid")
}

pub(super) fn service() -> AssessmentService {
    AssessmentService::standard().expect("standard catalog is valid")
}

pub(super) fn assessment_router_with_service() -> axum::Router {
    assessment_router(Arc::new(service()))
}

pub(super) fn answers(pairs: &[(&str, &str)]) -> AnswerSet {
    pairs.iter().copied().collect()
}

/// Unemployed (3) + care leaver (4) + supported mental health (2) = 9.
pub(super) fn scenario_answers() -> AnswerSet {
    answers(&[
        ("employment", "Unemployed"),
        ("care_leaver", "Yes"),
        ("mental_health", "Yes, currently receiving support"),
    ])
}

/// Answer set summing to exactly 20 without touching any crisis option.
pub(super) fn critical_answers() -> AnswerSet {
    answers(&[
        ("employment", "Unemployed"),
        ("benefits_support", "Applied and waiting"),
        ("debts", "Serious arrears or enforcement action"),
        ("care_leaver", "Yes"),
        ("left_care_when", "1-3 years ago"),
        ("institutional_discharge", "Yes, from hospital"),
        ("discharge_when", "Within the last year"),
        ("mental_health", "Yes, not receiving support"),
    ])
}

/// Minimal gate -> middle -> leaf chain for exercising visibility edge cases.
pub(super) fn chained_catalog() -> QuestionCatalog {
    QuestionCatalog::new(vec![
        Question::choice("gate", Category::Financial, "Gate", "", &[("a", 0), ("b", 1)]),
        Question::choice(
            "middle",
            Category::Financial,
            "Middle",
            "",
            &[("x", 1), ("y", 2)],
        )
        .hidden_unless("gate", &["a"]),
        Question::choice("leaf", Category::Financial, "Leaf", "", &[("x", 3)])
            .hidden_unless("middle", &["x"]),
    ])
    .expect("chained catalog is valid")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
