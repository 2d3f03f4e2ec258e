// tests/store_tests.rs

use std::sync::Arc;

use problem_drill::config::Config;
use problem_drill::error::AppError;
use problem_drill::models::question::{ObjectiveQuestion, QuestionType, SubjectiveQuestion};
use problem_drill::parser::parse_subjective;
use problem_drill::store::{JsonStore, QuestionStore};

fn temp_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("drill_store_{}", uuid::Uuid::new_v4()))
}

fn objective(id: &str, answer_index: usize) -> ObjectiveQuestion {
    ObjectiveQuestion {
        id: id.to_string(),
        qtype: QuestionType::Single,
        question: format!("Question {}", id),
        options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        answer_index,
        source: None,
    }
}

#[tokio::test]
async fn missing_file_loads_as_empty() {
    let store = JsonStore::new(temp_dir().join("nothing.json"));

    let loaded: Vec<ObjectiveQuestion> = store.load().await.unwrap();

    assert!(loaded.is_empty());
}

#[tokio::test]
async fn write_then_read_round_trips() {
    let dir = temp_dir();
    let store = JsonStore::new(dir.join("bank.json"));
    let questions = vec![
        objective("a", 0),
        ObjectiveQuestion {
            qtype: QuestionType::Judge,
            source: Some("judge.txt".to_string()),
            ..objective("b", 1)
        },
    ];

    store.replace(&questions).await.unwrap();
    let loaded: Vec<ObjectiveQuestion> = store.load().await.unwrap();

    assert_eq!(loaded, questions);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("bank.json")).unwrap()).unwrap();
    assert_eq!(raw[0]["qtype"], "single");
    assert_eq!(raw[0]["source"], serde_json::Value::Null);
    assert_eq!(raw[1]["qtype"], "judge");
}

#[tokio::test]
async fn append_keeps_existing_records() {
    let store = JsonStore::new(temp_dir().join("bank.json"));
    store.replace(&[objective("a", 0), objective("b", 2)]).await.unwrap();

    let total = store.append(vec![objective("c", 1)]).await.unwrap();

    assert_eq!(total, 3);
    let loaded: Vec<ObjectiveQuestion> = store.load().await.unwrap();
    let ids: Vec<&str> = loaded.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn import_grows_bank_by_imported_count() {
    let config = Config::with_data_dir(temp_dir());
    let store = QuestionStore::new(&config);
    store
        .add_subjective(vec![SubjectiveQuestion {
            id: "seed".to_string(),
            question: "Seed?".to_string(),
            answer: "Yes.".to_string(),
            source: None,
        }])
        .await
        .unwrap();
    let before = store.subjective_questions().await.unwrap().len();

    let imported = parse_subjective("#SUBJECTIVE\nQ1\n#ANSWER\nA1\n#END\n#SUBJECTIVE\nQ2\n#ANSWER\nA2\n#END", "t");
    let count = imported.len();
    store.add_subjective(imported).await.unwrap();

    let after = store.subjective_questions().await.unwrap();
    assert_eq!(after.len(), before + count);
    assert_eq!(after[0].id, "seed");
}

#[tokio::test]
async fn concurrent_appends_do_not_lose_updates() {
    let config = Config::with_data_dir(temp_dir());
    let store = Arc::new(QuestionStore::new(&config));

    let mut tasks = Vec::new();
    for i in 0..20 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            store
                .add_objective(vec![objective(&i.to_string(), 0)])
                .await
                .unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(store.objective_questions().await.unwrap().len(), 20);
}

#[tokio::test]
async fn unparsable_file_is_an_error() {
    let dir = temp_dir();
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("bank.json"), "[{\"id\": 1}]").unwrap();
    let store = JsonStore::new(dir.join("bank.json"));

    let loaded: Result<Vec<SubjectiveQuestion>, _> = store.load().await;

    match loaded {
        Err(AppError::InternalServerError(msg)) => assert!(msg.contains("bank.json"), "{}", msg),
        other => panic!("expected an internal error, got {:?}", other),
    }
}
