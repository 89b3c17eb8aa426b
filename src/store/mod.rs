// src/store/mod.rs

//! Storage layer for question documents.
//!
//! Handlers only see the [`QuestionStore`] trait; the concrete store is
//! picked at startup and injected through `AppState`.

pub mod memory;
pub mod postgres;

use std::{fmt, sync::Arc};

use async_trait::async_trait;

use crate::models::question::{NewQuestion, Question, QuestionId, UpdateQuestionRequest};

pub use memory::MemoryQuestionStore;
pub use postgres::PgQuestionStore;

/// Shared handle to whichever store the process was started with.
pub type DynQuestionStore = Arc<dyn QuestionStore>;

/// Opaque failure raised by a store. Lookup misses are not errors; they are
/// reported as `Ok(None)`.
#[derive(Debug)]
pub struct StoreError(String);

impl StoreError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Persists every draft and returns them with their assigned ids, in input order.
    async fn insert_many(&self, questions: Vec<NewQuestion>) -> StoreResult<Vec<Question>>;

    async fn find_by_id(&self, id: &QuestionId) -> StoreResult<Option<Question>>;

    /// Whole collection, in creation order.
    async fn find_all(&self) -> StoreResult<Vec<Question>>;

    /// Applies the supplied fields and returns the document after the change.
    async fn update_by_id(
        &self,
        id: &QuestionId,
        changes: &UpdateQuestionRequest,
    ) -> StoreResult<Option<Question>>;

    /// Removes the document and returns it as it was just before removal.
    async fn delete_by_id(&self, id: &QuestionId) -> StoreResult<Option<Question>>;
}
