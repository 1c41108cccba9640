//! AnalyseMe derives a housing-support prioritisation signal from a structured
//! questionnaire: a weighted risk score, a risk band with a response-time
//! commitment, and a set of recommended services.
//!
//! The [`assessment`] module holds the evaluation engine; [`config`],
//! [`telemetry`], and [`error`] carry the service plumbing around it.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
