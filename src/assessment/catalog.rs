use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// The four vulnerability domains tracked by the assessment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Financial,
    CareExperience,
    InstitutionalDischarge,
    Health,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Financial,
        Category::CareExperience,
        Category::InstitutionalDischarge,
        Category::Health,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Financial => "Financial",
            Category::CareExperience => "Care Experience",
            Category::InstitutionalDischarge => "Institutional Discharge",
            Category::Health => "Health",
        }
    }
}

/// How an answer is captured. Only choice answers carry risk weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Choice,
    FreeText,
    LongText,
}

/// Visibility gate referencing an earlier question's answer.
///
/// The gated question stays visible unless the referenced question is itself
/// visible, answered, and the answer falls outside `still_relevant`. An
/// unanswered or hidden gate therefore fails open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalRule {
    pub question_id: String,
    pub still_relevant: BTreeSet<String>,
}

/// One questionnaire entry: prompt, capture kind, option weights, and gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub section: Category,
    pub kind: QuestionKind,
    pub prompt: String,
    pub help: String,
    pub options: Vec<String>,
    pub risk_weights: BTreeMap<String, u32>,
    pub conditional: Option<ConditionalRule>,
    pub crisis_options: BTreeSet<String>,
}

impl Question {
    pub fn choice(
        id: &str,
        section: Category,
        prompt: &str,
        help: &str,
        options: &[(&str, u32)],
    ) -> Self {
        Self {
            id: id.to_string(),
            section,
            kind: QuestionKind::Choice,
            prompt: prompt.to_string(),
            help: help.to_string(),
            options: options.iter().map(|(option, _)| option.to_string()).collect(),
            risk_weights: options
                .iter()
                .map(|(option, weight)| (option.to_string(), *weight))
                .collect(),
            conditional: None,
            crisis_options: BTreeSet::new(),
        }
    }

    pub fn free_text(id: &str, section: Category, prompt: &str, help: &str) -> Self {
        Self::text(id, section, QuestionKind::FreeText, prompt, help)
    }

    pub fn long_text(id: &str, section: Category, prompt: &str, help: &str) -> Self {
        Self::text(id, section, QuestionKind::LongText, prompt, help)
    }

    fn text(id: &str, section: Category, kind: QuestionKind, prompt: &str, help: &str) -> Self {
        Self {
            id: id.to_string(),
            section,
            kind,
            prompt: prompt.to_string(),
            help: help.to_string(),
            options: Vec::new(),
            risk_weights: BTreeMap::new(),
            conditional: None,
            crisis_options: BTreeSet::new(),
        }
    }

    /// Gate this question on an earlier question's answer staying in the set.
    pub fn hidden_unless(mut self, question_id: &str, still_relevant: &[&str]) -> Self {
        self.conditional = Some(ConditionalRule {
            question_id: question_id.to_string(),
            still_relevant: still_relevant.iter().map(|answer| answer.to_string()).collect(),
        });
        self
    }

    /// Mark an option as an acute crisis indicator.
    pub fn crisis_on(mut self, option: &str) -> Self {
        self.crisis_options.insert(option.to_string());
        self
    }

    /// Largest weight this question can contribute.
    pub fn max_weight(&self) -> u32 {
        self.risk_weights.values().copied().max().unwrap_or(0)
    }
}

/// Malformed catalog definitions, rejected before the engine can start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate question id '{0}'")]
    DuplicateQuestion(String),
    #[error("choice question '{0}' declares no options")]
    MissingOptions(String),
    #[error("question '{question_id}' weights unknown option '{option}'")]
    UnknownWeightOption { question_id: String, option: String },
    #[error("question '{question_id}' declares option '{option}' without a risk weight")]
    UnweightedOption { question_id: String, option: String },
    #[error("text question '{0}' must not declare options or weights")]
    UnexpectedOptions(String),
    #[error("question '{question_id}' gates on '{reference}', which is not an earlier choice question")]
    ForwardReference {
        question_id: String,
        reference: String,
    },
    #[error("question '{question_id}' gates on answer '{answer}', which '{reference}' does not offer")]
    UnknownConditionalAnswer {
        question_id: String,
        reference: String,
        answer: String,
    },
    #[error("question '{question_id}' marks unknown option '{option}' as a crisis indicator")]
    UnknownCrisisOption { question_id: String, option: String },
}

/// Validated, immutable question catalog in display and evaluation order.
///
/// Construction fails fast on the invariants that would otherwise surface as
/// scoring bugs: weights for undeclared options, options without weights, and
/// forward or dangling conditional references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut earlier: BTreeMap<&str, &Question> = BTreeMap::new();

        for question in &questions {
            if earlier.contains_key(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }

            match question.kind {
                QuestionKind::Choice => {
                    if question.options.is_empty() {
                        return Err(CatalogError::MissingOptions(question.id.clone()));
                    }
                    for option in question.risk_weights.keys() {
                        if !question.options.iter().any(|declared| declared == option) {
                            return Err(CatalogError::UnknownWeightOption {
                                question_id: question.id.clone(),
                                option: option.clone(),
                            });
                        }
                    }
                    for option in &question.options {
                        if !question.risk_weights.contains_key(option) {
                            return Err(CatalogError::UnweightedOption {
                                question_id: question.id.clone(),
                                option: option.clone(),
                            });
                        }
                    }
                }
                QuestionKind::FreeText | QuestionKind::LongText => {
                    if !question.options.is_empty() || !question.risk_weights.is_empty() {
                        return Err(CatalogError::UnexpectedOptions(question.id.clone()));
                    }
                }
            }

            for option in &question.crisis_options {
                if !question.options.iter().any(|declared| declared == option) {
                    return Err(CatalogError::UnknownCrisisOption {
                        question_id: question.id.clone(),
                        option: option.clone(),
                    });
                }
            }

            if let Some(rule) = &question.conditional {
                let gate = earlier
                    .get(rule.question_id.as_str())
                    .copied()
                    .filter(|gate| gate.kind == QuestionKind::Choice)
                    .ok_or_else(|| CatalogError::ForwardReference {
                        question_id: question.id.clone(),
                        reference: rule.question_id.clone(),
                    })?;

                for answer in &rule.still_relevant {
                    if !gate.options.iter().any(|declared| declared == answer) {
                        return Err(CatalogError::UnknownConditionalAnswer {
                            question_id: question.id.clone(),
                            reference: rule.question_id.clone(),
                            answer: answer.clone(),
                        });
                    }
                }
            }

            earlier.insert(question.id.as_str(), question);
        }

        Ok(Self { questions })
    }

    /// The built-in housing-support questionnaire.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(vec![
            Question::choice(
                "employment",
                Category::Financial,
                "What is your current work situation?",
                "This helps us understand the pressure on your income.",
                &[
                    ("Employed full-time", 0),
                    ("Employed part-time", 1),
                    ("Unemployed", 3),
                    ("Unable to work due to health", 2),
                ],
            ),
            Question::choice(
                "benefits_support",
                Category::Financial,
                "Are you receiving the benefits you are entitled to?",
                "Missed entitlements are one of the quickest things we can fix.",
                &[
                    ("Yes, receiving everything I am entitled to", 0),
                    ("Applied and waiting", 1),
                    ("No, and I don't know what I can claim", 2),
                ],
            )
            .hidden_unless(
                "employment",
                &[
                    "Employed part-time",
                    "Unemployed",
                    "Unable to work due to health",
                ],
            ),
            Question::choice(
                "debts",
                Category::Financial,
                "Do you have debts or rent arrears at the moment?",
                "Include rent, council tax, utilities, and personal borrowing.",
                &[
                    ("No", 0),
                    ("Some, but manageable", 1),
                    ("Serious arrears or enforcement action", 3),
                ],
            ),
            Question::long_text(
                "money_detail",
                Category::Financial,
                "Tell us a bit more about the money pressures you are facing.",
                "Anything you share helps an officer prepare before contacting you.",
            )
            .hidden_unless(
                "debts",
                &["Some, but manageable", "Serious arrears or enforcement action"],
            ),
            Question::choice(
                "care_leaver",
                Category::CareExperience,
                "Have you ever been in local authority care?",
                "Care leavers are entitled to dedicated transition support.",
                &[("No", 0), ("Yes", 4)],
            ),
            Question::choice(
                "left_care_when",
                Category::CareExperience,
                "When did you leave care?",
                "",
                &[
                    ("More than 3 years ago", 1),
                    ("1-3 years ago", 2),
                    ("Within the last year", 3),
                ],
            )
            .hidden_unless("care_leaver", &["Yes"]),
            Question::choice(
                "institutional_discharge",
                Category::InstitutionalDischarge,
                "Have you recently been discharged from an institution?",
                "For example hospital, prison, or the armed forces.",
                &[
                    ("No", 0),
                    ("Yes, from hospital", 2),
                    ("Yes, from prison", 3),
                    ("Yes, from another institution", 2),
                ],
            ),
            Question::choice(
                "discharge_when",
                Category::InstitutionalDischarge,
                "When were you discharged?",
                "",
                &[
                    ("More than a year ago", 1),
                    ("Within the last year", 2),
                    ("Within the last 3 months", 3),
                ],
            )
            .hidden_unless(
                "institutional_discharge",
                &[
                    "Yes, from hospital",
                    "Yes, from prison",
                    "Yes, from another institution",
                ],
            ),
            Question::choice(
                "mental_health",
                Category::Health,
                "Do you have mental health difficulties affecting your housing situation?",
                "You can skip this question if you would rather not say.",
                &[
                    ("No", 0),
                    ("Yes, currently receiving support", 2),
                    ("Yes, not receiving support", 3),
                    ("In crisis - need urgent support", 4),
                ],
            )
            .crisis_on("In crisis - need urgent support"),
            Question::free_text(
                "health_support",
                Category::Health,
                "Who supports you with your health at the moment, if anyone?",
                "For example a GP, community team, or family member.",
            ),
        ])
    }

    /// Full ordered question sequence; order is display and evaluation order.
    pub fn all_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
