use std::sync::Arc;

use tokio::io::BufReader;

use quiz_core::model::UnitId;
use quiz_core::time::fixed_clock;
use services::{Catalog, CatalogEntry, ContentLoader, QuizFlow, StaticSource};
use ui::QuizApp;
use ui::views::ViewError;
use ui::vm::start_session;

const SINGLE_QUESTION_DOC: &str = r#"{
    "title": "unidad 1",
    "questions": [
        {
            "prompt": "Which option is right?",
            "options": { "a": "the right one", "b": "the wrong one" },
            "correctKeys": ["a"],
            "explanations": { "a": "It says right on it." }
        }
    ]
}"#;

const MULTI_SELECT_DOC: &str = r#"{
    "title": "unidad 1",
    "questions": [
        {
            "prompt": "Which keys are needed?",
            "options": { "a": "yes", "b": "no", "c": "also yes" },
            "correctKeys": ["a", "c"]
        }
    ]
}"#;

fn flow_for(documents: &[(&str, &str)]) -> QuizFlow {
    let mut source = StaticSource::new();
    for (source_ref, body) in documents {
        source = source.with_document(*source_ref, *body);
    }
    let catalog = Catalog::new(vec![CatalogEntry::new(
        UnitId::new("unidad-1").unwrap(),
        "Unidad 1",
        "01_unidad.json",
        "unidad 1",
    )]);
    QuizFlow::new(catalog, ContentLoader::new(Arc::new(source))).with_clock(fixed_clock())
}

async fn run_script(flow: QuizFlow, script: &str) -> String {
    let app = QuizApp::new(flow);
    let mut output = Vec::new();
    let reader = BufReader::new(script.as_bytes());
    app.run_with(reader, &mut output).await.unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn perfect_run_passes_and_returns_to_the_menu() {
    let flow = flow_for(&[("01_unidad.json", SINGLE_QUESTION_DOC)]);

    let output = run_script(flow, "1\na\n\n\nq\n").await;

    assert!(output.contains("Loading Unidad 1..."));
    assert!(output.contains("Question 1 of 1"));
    assert!(output.contains("Which option is right?"));
    assert!(output.contains("  a. the right one"));
    assert!(output.contains("✅ Correct!"));
    assert!(output.contains("It says right on it."));
    assert!(output.contains("1 of 1 correct (100%)"));
    assert!(output.contains("Passed."));
    assert!(output.contains("Bye!"));
}

#[tokio::test]
async fn wrong_answer_shows_the_key_and_fails() {
    let flow = flow_for(&[("01_unidad.json", SINGLE_QUESTION_DOC)]);

    let output = run_script(flow, "1\nb\n\n\nq\n").await;

    assert!(output.contains("❌ Incorrect. Correct answer(s): A"));
    assert!(output.contains("  A. the right one: It says right on it."));
    assert!(output.contains("0 of 1 correct (0%)"));
    assert!(output.contains("Not passed."));
}

#[tokio::test]
async fn multi_select_requires_the_exact_set() {
    let flow = flow_for(&[("01_unidad.json", MULTI_SELECT_DOC)]);

    // Partial answer: one of the two required keys.
    let output = run_script(flow, "1\na\n\n\nq\n").await;

    assert!(output.contains("(select all that apply)"));
    assert!(output.contains("❌ Incorrect. Correct answer(s): A, C"));
    assert!(output.contains("0 of 1 correct (0%)"));
}

#[tokio::test]
async fn multi_select_accepts_a_comma_separated_exact_answer() {
    let flow = flow_for(&[("01_unidad.json", MULTI_SELECT_DOC)]);

    let output = run_script(flow, "1\na, c\n\n\nq\n").await;

    assert!(output.contains("✅ Correct!"));
    assert!(output.contains("1 of 1 correct (100%)"));
    assert!(output.contains("Passed."));
}

#[tokio::test]
async fn invalid_selections_reprompt_until_valid() {
    let flow = flow_for(&[("01_unidad.json", SINGLE_QUESTION_DOC)]);

    let output = run_script(flow, "1\nz\n\na\n\n\nq\n").await;

    assert!(output.contains("\"z\" is not one of the options."));
    assert!(output.contains("Type something first."));
    assert!(output.contains("✅ Correct!"));
}

#[tokio::test]
async fn load_failure_reports_and_returns_to_the_menu() {
    let flow = flow_for(&[]);

    let output = run_script(flow, "1\nq\n").await;

    assert!(output.contains("The questions could not be loaded."));
    assert!(output.contains("Bye!"));
}

#[tokio::test]
async fn menu_rejects_bad_choices_and_keeps_asking() {
    let flow = flow_for(&[]);

    let output = run_script(flow, "7\nx\nq\n").await;

    assert!(output.contains("Pick a number between 1 and 1, or q to quit."));
    assert!(output.contains("Pick a unit number, or q to quit."));
    assert!(output.contains("Bye!"));
}

#[tokio::test]
async fn end_of_input_mid_question_exits_cleanly() {
    let flow = flow_for(&[("01_unidad.json", SINGLE_QUESTION_DOC)]);

    let output = run_script(flow, "1\n").await;

    assert!(output.contains("Question 1 of 1"));
    assert!(!output.contains("Bye!"));
}

#[tokio::test]
async fn start_session_maps_failures_to_messages() {
    let mismatched = r#"{ "title": "unidad 9", "questions": [] }"#;
    let empty = r#"{ "title": "unidad 1", "questions": [] }"#;

    let flow = flow_for(&[("01_unidad.json", mismatched)]);
    let err = start_session(&flow, &UnitId::new("unidad-1").unwrap())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ViewError::TitleMismatch {
            expected: "unidad 1".into(),
            actual: "unidad 9".into(),
        }
    );

    let flow = flow_for(&[("01_unidad.json", empty)]);
    let err = start_session(&flow, &UnitId::new("unidad-1").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, ViewError::EmptyUnit);

    let flow = flow_for(&[]);
    let err = start_session(&flow, &UnitId::new("unidad-9").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, ViewError::UnknownUnit);
}
