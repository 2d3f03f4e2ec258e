// tests/validation_tests.rs

use problem_drill::models::import::{ImportKind, ImportTxtRequest};
use problem_drill::models::question::{
    CreateObjectiveRequest, CreateSubjectiveRequest, QuestionType,
};

fn objective(body: serde_json::Value) -> CreateObjectiveRequest {
    serde_json::from_value(body).expect("payload should deserialize")
}

#[test]
fn valid_objective_payload_keeps_answer_index() {
    let payload = objective(serde_json::json!({
        "question": " What is 1 + 1? ",
        "options": ["1", " 2 ", "3"],
        "answer_index": 1,
        "qtype": "single"
    }));

    assert_eq!(payload.check(), Ok(()));

    let question = payload.into_question();
    assert_eq!(question.answer_index, 1);
    assert!(question.answer_index < question.options.len());
    assert_eq!(question.question, "What is 1 + 1?");
    assert_eq!(question.options[1], "2");
    assert_eq!(question.qtype, QuestionType::Single);
    assert_eq!(question.source, None);
}

#[test]
fn qtype_defaults_to_single_and_judge_is_accepted() {
    let payload = objective(serde_json::json!({
        "question": "Q", "options": ["T", "F"], "answer_index": 0
    }));
    assert_eq!(payload.check(), Ok(()));
    assert_eq!(payload.into_question().qtype, QuestionType::Single);

    let payload = objective(serde_json::json!({
        "question": "Q", "options": ["T", "F"], "answer_index": 1, "qtype": "judge"
    }));
    assert_eq!(payload.check(), Ok(()));
    assert_eq!(payload.into_question().qtype, QuestionType::Judge);
}

#[test]
fn empty_qtype_counts_as_absent() {
    let payload = objective(serde_json::json!({
        "question": "Q", "options": ["a", "b"], "answer_index": 0, "qtype": ""
    }));

    assert_eq!(payload.check(), Ok(()));
    assert_eq!(payload.into_question().qtype, QuestionType::Single);
}

#[test]
fn objective_reasons_follow_field_order() {
    let cases = [
        (serde_json::json!({"options": ["a", "b"], "answer_index": 0}), "question must not be blank"),
        (serde_json::json!({"question": "\n\t", "options": [], "answer_index": 0}), "question must not be blank"),
        (serde_json::json!({"question": "Q", "answer_index": 0}), "options must contain at least two options"),
        (serde_json::json!({"question": "Q", "options": ["a", "b"], "answer_index": 0, "qtype": "multi"}), "qtype must be single or judge"),
        (serde_json::json!({"question": "Q", "options": ["a", "b"], "answer_index": 2}), "answer_index is out of range"),
        (serde_json::json!({"question": "Q", "options": ["a", "b"], "answer_index": -1}), "answer_index is out of range"),
        (serde_json::json!({"question": "Q", "options": ["a", "b"]}), "answer_index is out of range"),
        (serde_json::json!({"question": "Q", "options": ["a", "b"], "answer_index": 5, "qtype": "multi"}), "answer_index is out of range"),
    ];

    for (body, reason) in cases {
        assert_eq!(objective(body.clone()).check(), Err(reason.to_string()), "payload {}", body);
    }
}

#[test]
fn subjective_requires_question_and_answer() {
    let ok: CreateSubjectiveRequest =
        serde_json::from_value(serde_json::json!({"question": "Q", "answer": "A", "source": "x"})).unwrap();
    assert_eq!(ok.check(), Ok(()));
    assert_eq!(ok.into_question().source.as_deref(), Some("x"));

    let blank_question: CreateSubjectiveRequest =
        serde_json::from_value(serde_json::json!({"question": " ", "answer": " "})).unwrap();
    assert_eq!(blank_question.check(), Err("question must not be blank".to_string()));

    let missing_answer: CreateSubjectiveRequest =
        serde_json::from_value(serde_json::json!({"question": "Q"})).unwrap();
    assert_eq!(missing_answer.check(), Err("answer must not be blank".to_string()));
}

#[test]
fn import_request_checks_content_before_kind() {
    let both_bad: ImportTxtRequest =
        serde_json::from_value(serde_json::json!({"kind": "essay", "content": ""})).unwrap();
    assert_eq!(both_bad.check(), Err("content must not be blank".to_string()));

    let bad_kind: ImportTxtRequest =
        serde_json::from_value(serde_json::json!({"content": "#SUBJECTIVE"})).unwrap();
    assert_eq!(bad_kind.check(), Err("kind must be objective or subjective".to_string()));

    let ok: ImportTxtRequest =
        serde_json::from_value(serde_json::json!({"kind": "subjective", "content": "x", "source": ""}))
            .unwrap();
    assert_eq!(ok.check(), Ok(()));
    assert_eq!(ok.import_kind(), Some(ImportKind::Subjective));
    assert_eq!(ok.source(), "txt-import");
}
