use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::catalog::{CatalogError, Category, QuestionCatalog};
use super::classify::{ResponseCommitment, RiskBand};
use super::recommend::{RecommendationRules, RecommendedService};
use super::scoring::{self, EvaluationError, RiskFlag};

/// Stateless evaluator composing visibility, scoring, classification, and
/// recommendation over an injected catalog and rule table.
///
/// Holds no mutable state between calls; concurrent evaluation of
/// independent answer sets needs no locking.
pub struct AssessmentEngine {
    catalog: QuestionCatalog,
    rules: RecommendationRules,
}

impl AssessmentEngine {
    pub fn new(catalog: QuestionCatalog, rules: RecommendationRules) -> Self {
        Self { catalog, rules }
    }

    /// Engine over the built-in catalog and rule table.
    pub fn standard() -> Result<Self, CatalogError> {
        Ok(Self::new(
            QuestionCatalog::standard()?,
            RecommendationRules::standard(),
        ))
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Evaluate a complete or partial answer set into a single immutable
    /// result. Either a full result is produced or evaluation fails.
    pub fn evaluate(&self, answers: &AnswerSet) -> Result<AssessmentResult, EvaluationError> {
        let breakdown = scoring::evaluate_scores(&self.catalog, answers)?;

        let mut risk_band = RiskBand::classify(breakdown.total);
        if !breakdown.crisis_indicators.is_empty() {
            // Crisis answers escalate, never downgrade.
            risk_band = RiskBand::Critical;
        }

        let recommended_services = self.rules.recommend(&breakdown.by_category, answers);

        Ok(AssessmentResult {
            total_score: breakdown.total,
            category_scores: breakdown.by_category,
            risk_band,
            response_commitment: risk_band.commitment(),
            recommended_services,
            risk_flags: breakdown.risk_flags,
            crisis_indicators: breakdown.crisis_indicators,
        })
    }
}

/// The engine's sole structured output; field names and enum values are the
/// contract downstream systems integrate against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub total_score: u32,
    pub category_scores: BTreeMap<Category, u32>,
    pub risk_band: RiskBand,
    pub response_commitment: ResponseCommitment,
    pub recommended_services: BTreeSet<RecommendedService>,
    pub risk_flags: Vec<RiskFlag>,
    pub crisis_indicators: Vec<String>,
}
