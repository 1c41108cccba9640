use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::answers::AnswerSet;
use super::service::AssessmentService;

/// Router builder exposing HTTP endpoints for evaluation and the catalog.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessments", post(evaluate_handler))
        .route("/api/v1/assessments/questions", get(questions_handler))
        .with_state(service)
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(answers): axum::Json<AnswerSet>,
) -> Response {
    match service.assess(&answers) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn questions_handler(
    State(service): State<Arc<AssessmentService>>,
) -> Response {
    let questions = service.engine().catalog().all_questions();
    (StatusCode::OK, axum::Json(questions)).into_response()
}
