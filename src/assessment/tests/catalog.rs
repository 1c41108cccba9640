use crate::assessment::{CatalogError, Category, Question, QuestionCatalog};

#[test]
fn standard_catalog_loads() {
    let catalog = QuestionCatalog::standard().expect("standard catalog is valid");

    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.all_questions()[0].id, "employment");
    assert!(catalog.question("mental_health").is_some());
    assert!(catalog.question("does_not_exist").is_none());
}

#[test]
fn duplicate_question_ids_rejected() {
    let result = QuestionCatalog::new(vec![
        Question::choice("twice", Category::Financial, "First", "", &[("a", 0)]),
        Question::choice("twice", Category::Health, "Second", "", &[("b", 1)]),
    ]);

    assert_eq!(result, Err(CatalogError::DuplicateQuestion("twice".into())));
}

#[test]
fn weight_for_undeclared_option_rejected() {
    let mut question = Question::choice("q", Category::Financial, "Q", "", &[("a", 0)]);
    question.risk_weights.insert("ghost".to_string(), 2);

    let result = QuestionCatalog::new(vec![question]);

    assert_eq!(
        result,
        Err(CatalogError::UnknownWeightOption {
            question_id: "q".into(),
            option: "ghost".into(),
        })
    );
}

#[test]
fn option_without_weight_rejected() {
    let mut question =
        Question::choice("q", Category::Financial, "Q", "", &[("a", 0), ("b", 2)]);
    question.risk_weights.remove("b");

    let result = QuestionCatalog::new(vec![question]);

    assert_eq!(
        result,
        Err(CatalogError::UnweightedOption {
            question_id: "q".into(),
            option: "b".into(),
        })
    );
}

#[test]
fn choice_question_without_options_rejected() {
    let mut question = Question::choice("q", Category::Financial, "Q", "", &[("a", 0)]);
    question.options.clear();
    question.risk_weights.clear();

    let result = QuestionCatalog::new(vec![question]);

    assert_eq!(result, Err(CatalogError::MissingOptions("q".into())));
}

#[test]
fn forward_reference_rejected() {
    let result = QuestionCatalog::new(vec![
        Question::choice("first", Category::Financial, "First", "", &[("a", 0)])
            .hidden_unless("second", &["a"]),
        Question::choice("second", Category::Financial, "Second", "", &[("a", 0)]),
    ]);

    assert_eq!(
        result,
        Err(CatalogError::ForwardReference {
            question_id: "first".into(),
            reference: "second".into(),
        })
    );
}

#[test]
fn gate_on_text_question_rejected() {
    let result = QuestionCatalog::new(vec![
        Question::free_text("notes", Category::Health, "Notes", ""),
        Question::choice("q", Category::Health, "Q", "", &[("a", 0)])
            .hidden_unless("notes", &["a"]),
    ]);

    assert!(matches!(
        result,
        Err(CatalogError::ForwardReference { .. })
    ));
}

#[test]
fn gate_answer_must_be_offered_by_reference() {
    let result = QuestionCatalog::new(vec![
        Question::choice("gate", Category::Financial, "Gate", "", &[("a", 0)]),
        Question::choice("q", Category::Financial, "Q", "", &[("x", 1)])
            .hidden_unless("gate", &["missing"]),
    ]);

    assert_eq!(
        result,
        Err(CatalogError::UnknownConditionalAnswer {
            question_id: "q".into(),
            reference: "gate".into(),
            answer: "missing".into(),
        })
    );
}

#[test]
fn text_question_with_weights_rejected() {
    let mut question = Question::free_text("notes", Category::Health, "Notes", "");
    question.options.push("a".to_string());
    question.risk_weights.insert("a".to_string(), 1);

    let result = QuestionCatalog::new(vec![question]);

    assert_eq!(result, Err(CatalogError::UnexpectedOptions("notes".into())));
}

#[test]
fn crisis_option_must_be_declared() {
    let result = QuestionCatalog::new(vec![Question::choice(
        "q",
        Category::Health,
        "Q",
        "",
        &[("a", 0)],
    )
    .crisis_on("missing")]);

    assert_eq!(
        result,
        Err(CatalogError::UnknownCrisisOption {
            question_id: "q".into(),
            option: "missing".into(),
        })
    );
}
