use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::catalog::Category;

/// Services an assessment can refer a respondent to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedService {
    DebtAndBenefitsAdvice,
    LeavingCareSupport,
    ResettlementSupport,
    ProbationTransitionSupport,
    CommunityHealthReferral,
    MentalHealthReferral,
}

impl RecommendedService {
    pub const fn label(self) -> &'static str {
        match self {
            RecommendedService::DebtAndBenefitsAdvice => "Debt and benefits advice",
            RecommendedService::LeavingCareSupport => "Leaving care support",
            RecommendedService::ResettlementSupport => "Resettlement support",
            RecommendedService::ProbationTransitionSupport => "Probation transition support",
            RecommendedService::CommunityHealthReferral => "Community health referral",
            RecommendedService::MentalHealthReferral => "Mental health referral",
        }
    }
}

/// Include `service` when the category's accumulated score reaches `minimum`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRule {
    pub category: Category,
    pub minimum: u32,
    pub service: RecommendedService,
}

/// Include `service` when a specific raw answer is present, regardless of
/// score. A single qualifying answer can warrant a referral on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagRule {
    pub question_id: String,
    pub answer: String,
    pub service: RecommendedService,
}

/// Static rule table mapping category scores and answer flags to services.
///
/// Rules are independent; all of them are evaluated and the result is a
/// deduplicated set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRules {
    pub thresholds: Vec<ThresholdRule>,
    pub flags: Vec<FlagRule>,
}

impl RecommendationRules {
    pub fn standard() -> Self {
        Self {
            thresholds: vec![
                ThresholdRule {
                    category: Category::Financial,
                    minimum: 3,
                    service: RecommendedService::DebtAndBenefitsAdvice,
                },
                ThresholdRule {
                    category: Category::CareExperience,
                    minimum: 4,
                    service: RecommendedService::LeavingCareSupport,
                },
                ThresholdRule {
                    category: Category::InstitutionalDischarge,
                    minimum: 3,
                    service: RecommendedService::ResettlementSupport,
                },
                ThresholdRule {
                    category: Category::Health,
                    minimum: 4,
                    service: RecommendedService::CommunityHealthReferral,
                },
            ],
            flags: vec![
                FlagRule {
                    question_id: "institutional_discharge".to_string(),
                    answer: "Yes, from prison".to_string(),
                    service: RecommendedService::ProbationTransitionSupport,
                },
                FlagRule {
                    question_id: "mental_health".to_string(),
                    answer: "Yes, not receiving support".to_string(),
                    service: RecommendedService::MentalHealthReferral,
                },
                FlagRule {
                    question_id: "mental_health".to_string(),
                    answer: "In crisis - need urgent support".to_string(),
                    service: RecommendedService::MentalHealthReferral,
                },
            ],
        }
    }

    pub fn recommend(
        &self,
        category_scores: &BTreeMap<Category, u32>,
        answers: &AnswerSet,
    ) -> BTreeSet<RecommendedService> {
        let mut services = BTreeSet::new();

        for rule in &self.thresholds {
            let score = category_scores.get(&rule.category).copied().unwrap_or(0);
            if score >= rule.minimum {
                services.insert(rule.service);
            }
        }

        for rule in &self.flags {
            if answers.get(&rule.question_id) == Some(rule.answer.as_str()) {
                services.insert(rule.service);
            }
        }

        services
    }
}
