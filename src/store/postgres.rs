// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, prelude::FromRow, types::Json};

use super::{QuestionStore, StoreError, StoreResult};
use crate::models::question::{NewQuestion, Question, QuestionId, UpdateQuestionRequest};

const COLUMNS: &str =
    "id, subject, question_text, options, correct_answer, question_type, topic, sub_topic";

/// Postgres caps bind parameters at 65535 per statement; eight per row.
const INSERT_CHUNK: usize = 1000;

/// Raw shape of a row in the 'questions' table.
#[derive(Debug, FromRow)]
struct QuestionRow {
    id: String,
    subject: String,
    question_text: String,
    options: Json<Vec<String>>,
    correct_answer: Option<String>,
    question_type: String,
    topic: Option<String>,
    sub_topic: Option<String>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = StoreError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        let id = row
            .id
            .parse::<QuestionId>()
            .map_err(|e| StoreError::new(format!("corrupt id '{}': {}", row.id, e)))?;
        let question_type = row.question_type.parse().map_err(StoreError::new)?;

        Ok(Question {
            id,
            subject: row.subject,
            question_text: row.question_text,
            option: row.options.0,
            correct_answer: row.correct_answer,
            question_type,
            topic: row.topic,
            sub_topic: row.sub_topic,
        })
    }
}

fn into_questions(rows: Vec<QuestionRow>) -> StoreResult<Vec<Question>> {
    rows.into_iter().map(Question::try_from).collect()
}

/// Question store backed by the 'questions' table.
#[derive(Debug, Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded migrations under `./migrations`.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn insert_many(&self, questions: Vec<NewQuestion>) -> StoreResult<Vec<Question>> {
        if questions.is_empty() {
            return Ok(Vec::new());
        }

        // Large batches span several statements; the transaction keeps them all-or-nothing.
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(questions.len());

        for chunk in questions.chunks(INSERT_CHUNK) {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
                "INSERT INTO questions ({}) ",
                COLUMNS
            ));

            builder.push_values(chunk, |mut row, q| {
                row.push_bind(QuestionId::generate().to_hex())
                    .push_bind(q.subject.clone())
                    .push_bind(q.question_text.clone())
                    .push_bind(Json(q.option.clone()))
                    .push_bind(q.correct_answer.clone())
                    .push_bind(q.question_type.as_str())
                    .push_bind(q.topic.clone())
                    .push_bind(q.sub_topic.clone());
            });
            builder.push(" RETURNING ");
            builder.push(COLUMNS);

            let rows: Vec<QuestionRow> = builder.build_query_as().fetch_all(&mut *tx).await?;
            inserted.extend(into_questions(rows)?);
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn find_by_id(&self, id: &QuestionId) -> StoreResult<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(&format!(
            "SELECT {} FROM questions WHERE id = $1",
            COLUMNS
        ))
        .bind(id.to_hex())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Question::try_from).transpose()
    }

    async fn find_all(&self) -> StoreResult<Vec<Question>> {
        // ObjectId hex sorts by creation time.
        let rows = sqlx::query_as::<_, QuestionRow>(&format!(
            "SELECT {} FROM questions ORDER BY id",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        into_questions(rows)
    }

    async fn update_by_id(
        &self,
        id: &QuestionId,
        changes: &UpdateQuestionRequest,
    ) -> StoreResult<Option<Question>> {
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE questions SET ");
        let mut separated = builder.separated(", ");

        if let Some(text) = &changes.question_text {
            separated.push("question_text = ");
            separated.push_bind_unseparated(text.clone());
        }

        if let Some(option) = &changes.option {
            separated.push("options = ");
            separated.push_bind_unseparated(Json(option.clone()));
        }

        if let Some(question_type) = changes.question_type {
            separated.push("question_type = ");
            separated.push_bind_unseparated(question_type.as_str());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.to_hex());
        builder.push(" RETURNING ");
        builder.push(COLUMNS);

        let row: Option<QuestionRow> = builder
            .build_query_as()
            .fetch_optional(&self.pool)
            .await?;

        row.map(Question::try_from).transpose()
    }

    async fn delete_by_id(&self, id: &QuestionId) -> StoreResult<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(&format!(
            "DELETE FROM questions WHERE id = $1 RETURNING {}",
            COLUMNS
        ))
        .bind(id.to_hex())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Question::try_from).transpose()
    }
}
