//! Housing support assessment engine.
//!
//! Answers flow one direction: the catalog defines the questions, the
//! visibility resolver filters them against the answers so far, the scoring
//! pass aggregates option weights per category, and the classifier and
//! recommendation matcher turn the breakdown into a single immutable
//! [`AssessmentResult`]. Everything is pure computation over in-memory data;
//! the engine keeps no state between evaluations.

mod answers;
pub mod catalog;
mod classify;
mod engine;
mod recommend;
pub mod router;
mod scoring;
mod service;
mod visibility;

#[cfg(test)]
mod tests;

pub use answers::AnswerSet;
pub use catalog::{
    CatalogError, Category, ConditionalRule, Question, QuestionCatalog, QuestionKind,
};
pub use classify::{ResponseCommitment, RiskBand};
pub use engine::{AssessmentEngine, AssessmentResult};
pub use recommend::{FlagRule, RecommendationRules, RecommendedService, ThresholdRule};
pub use router::assessment_router;
pub use scoring::{EvaluationError, RiskFlag};
pub use service::{AssessmentRecord, AssessmentService};
