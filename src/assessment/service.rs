use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::catalog::CatalogError;
use super::engine::{AssessmentEngine, AssessmentResult};
use super::scoring::EvaluationError;

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_reference(received_at: DateTime<Utc>) -> String {
    let sequence = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!(
        "HS-{}-{:04}",
        received_at.format("%Y%m%d%H%M"),
        sequence % 10_000
    )
}

/// Facade over the engine for the HTTP and CLI surfaces: assigns a case
/// reference, stamps receipt time, and logs the outcome.
pub struct AssessmentService {
    engine: AssessmentEngine,
}

impl AssessmentService {
    pub fn new(engine: AssessmentEngine) -> Self {
        Self { engine }
    }

    pub fn standard() -> Result<Self, CatalogError> {
        Ok(Self::new(AssessmentEngine::standard()?))
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    pub fn assess(&self, answers: &AnswerSet) -> Result<AssessmentRecord, EvaluationError> {
        let result = self.engine.evaluate(answers)?;
        let received_at = Utc::now();
        let reference = next_reference(received_at);

        tracing::info!(
            %reference,
            total_score = result.total_score,
            risk_band = result.risk_band.label(),
            services = result.recommended_services.len(),
            "assessment evaluated"
        );

        Ok(AssessmentRecord {
            reference,
            received_at,
            result,
        })
    }
}

/// Referenced, timestamped wrapper handed to downstream systems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub reference: String,
    pub received_at: DateTime<Utc>,
    pub result: AssessmentResult,
}
