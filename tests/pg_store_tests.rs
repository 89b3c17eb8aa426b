// tests/pg_store_tests.rs

use question_bank::{
    models::question::{NewQuestion, QuestionId, QuestionType, UpdateQuestionRequest},
    store::{PgQuestionStore, QuestionStore},
};
use sqlx::postgres::PgPoolOptions;

async fn connect() -> PgQuestionStore {
    // Note: requires a running Postgres reachable through DATABASE_URL.
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres for testing. Make sure DATABASE_URL is set.");

    let store = PgQuestionStore::new(pool);
    store.migrate().await.expect("Failed to migrate database");
    store
}

fn draft(text: &str) -> NewQuestion {
    NewQuestion {
        subject: "Math".to_string(),
        question_text: text.to_string(),
        option: vec!["3".to_string(), "4".to_string()],
        correct_answer: None,
        question_type: QuestionType::Scq,
        topic: Some("Arithmetic".to_string()),
        sub_topic: None,
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn pg_store_round_trips_a_question() {
    let store = connect().await;

    // 1. Batch insert
    let inserted = store
        .insert_many(vec![draft("2+2=?"), draft("3+3=?")])
        .await
        .unwrap();
    assert_eq!(inserted.len(), 2);
    assert_eq!(inserted[0].question_text, "2+2=?");
    assert_eq!(inserted[1].question_text, "3+3=?");
    let id = inserted[0].id;

    // 2. Lookup
    let fetched = store.find_by_id(&id).await.unwrap();
    assert_eq!(fetched.as_ref(), Some(&inserted[0]));

    // 3. Partial update
    let changes = UpdateQuestionRequest {
        question_type: Some(QuestionType::Mcq),
        ..Default::default()
    };
    let updated = store.update_by_id(&id, &changes).await.unwrap().unwrap();
    assert_eq!(updated.question_type, QuestionType::Mcq);
    assert_eq!(updated.option, inserted[0].option);
    assert_eq!(updated.topic, inserted[0].topic);

    // 4. Delete returns the snapshot, then the row is gone
    let deleted = store.delete_by_id(&id).await.unwrap();
    assert_eq!(deleted, Some(updated));
    assert_eq!(store.find_by_id(&id).await.unwrap(), None);

    store.delete_by_id(&inserted[1].id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn pg_store_misses_unknown_ids() {
    let store = connect().await;
    let id = QuestionId::generate();

    assert_eq!(store.find_by_id(&id).await.unwrap(), None);
    assert_eq!(store.delete_by_id(&id).await.unwrap(), None);

    let changes = UpdateQuestionRequest {
        question_text: Some("Changed".to_string()),
        ..Default::default()
    };
    assert_eq!(store.update_by_id(&id, &changes).await.unwrap(), None);
}
