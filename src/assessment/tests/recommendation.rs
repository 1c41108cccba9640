use std::collections::BTreeMap;

use super::common::*;
use crate::assessment::{
    Category, FlagRule, RecommendationRules, RecommendedService, ThresholdRule,
};

#[test]
fn scenario_triggers_financial_and_care_services() {
    let engine = engine();

    let result = engine.evaluate(&scenario_answers()).expect("evaluates");

    assert!(result
        .recommended_services
        .contains(&RecommendedService::DebtAndBenefitsAdvice));
    assert!(result
        .recommended_services
        .contains(&RecommendedService::LeavingCareSupport));
    // Health sits at 2, below its threshold.
    assert!(!result
        .recommended_services
        .contains(&RecommendedService::CommunityHealthReferral));
}

#[test]
fn flag_rule_fires_below_the_score_threshold() {
    let engine = engine();
    let set = answers(&[("mental_health", "Yes, not receiving support")]);

    let result = engine.evaluate(&set).expect("evaluates");

    assert!(!result
        .recommended_services
        .contains(&RecommendedService::CommunityHealthReferral));
    assert!(result
        .recommended_services
        .contains(&RecommendedService::MentalHealthReferral));
}

#[test]
fn prison_discharge_triggers_transition_support() {
    let engine = engine();
    let set = answers(&[("institutional_discharge", "Yes, from prison")]);

    let result = engine.evaluate(&set).expect("evaluates");

    assert!(result
        .recommended_services
        .contains(&RecommendedService::ProbationTransitionSupport));
    assert!(result
        .recommended_services
        .contains(&RecommendedService::ResettlementSupport));
}

#[test]
fn empty_answers_recommend_nothing() {
    let engine = engine();

    let result = engine
        .evaluate(&crate::assessment::AnswerSet::new())
        .expect("evaluates");

    assert!(result.recommended_services.is_empty());
}

#[test]
fn overlapping_rules_deduplicate() {
    let rules = RecommendationRules {
        thresholds: vec![ThresholdRule {
            category: Category::Financial,
            minimum: 1,
            service: RecommendedService::DebtAndBenefitsAdvice,
        }],
        flags: vec![FlagRule {
            question_id: "debts".to_string(),
            answer: "Serious arrears or enforcement action".to_string(),
            service: RecommendedService::DebtAndBenefitsAdvice,
        }],
    };

    let mut category_scores = BTreeMap::new();
    category_scores.insert(Category::Financial, 3);
    let set = answers(&[("debts", "Serious arrears or enforcement action")]);

    let services = rules.recommend(&category_scores, &set);

    assert_eq!(services.len(), 1);
    assert!(services.contains(&RecommendedService::DebtAndBenefitsAdvice));
}

#[test]
fn rules_are_evaluated_independently() {
    let engine = engine();
    // High financial pressure plus a care history: both rules fire.
    let set = answers(&[
        ("employment", "Unemployed"),
        ("debts", "Serious arrears or enforcement action"),
        ("care_leaver", "Yes"),
        ("left_care_when", "Within the last year"),
    ]);

    let result = engine.evaluate(&set).expect("evaluates");

    assert!(result
        .recommended_services
        .contains(&RecommendedService::DebtAndBenefitsAdvice));
    assert!(result
        .recommended_services
        .contains(&RecommendedService::LeavingCareSupport));
}
