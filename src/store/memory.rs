// src/store/memory.rs

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{QuestionStore, StoreResult};
use crate::models::question::{NewQuestion, Question, QuestionId, UpdateQuestionRequest};

/// In-process question collection, kept in insertion order. Backs the test suite.
#[derive(Debug, Default)]
pub struct MemoryQuestionStore {
    questions: RwLock<Vec<Question>>,
}

impl MemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn insert_many(&self, questions: Vec<NewQuestion>) -> StoreResult<Vec<Question>> {
        let inserted: Vec<Question> = questions
            .into_iter()
            .map(|q| q.into_question(QuestionId::generate()))
            .collect();

        self.questions.write().await.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn find_by_id(&self, id: &QuestionId) -> StoreResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.iter().find(|q| q.id == *id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Question>> {
        Ok(self.questions.read().await.clone())
    }

    async fn update_by_id(
        &self,
        id: &QuestionId,
        changes: &UpdateQuestionRequest,
    ) -> StoreResult<Option<Question>> {
        let mut questions = self.questions.write().await;
        Ok(questions.iter_mut().find(|q| q.id == *id).map(|question| {
            changes.apply_to(question);
            question.clone()
        }))
    }

    async fn delete_by_id(&self, id: &QuestionId) -> StoreResult<Option<Question>> {
        let mut questions = self.questions.write().await;
        let position = questions.iter().position(|q| q.id == *id);
        Ok(position.map(|idx| questions.remove(idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuestionType;

    fn draft(text: &str) -> NewQuestion {
        NewQuestion {
            subject: "Math".to_string(),
            question_text: text.to_string(),
            option: vec!["3".to_string(), "4".to_string()],
            correct_answer: Some("4".to_string()),
            question_type: QuestionType::Scq,
            topic: Some("Arithmetic".to_string()),
            sub_topic: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids_in_order() {
        let store = MemoryQuestionStore::new();
        let inserted = store
            .insert_many(vec![draft("2+2=?"), draft("3+3=?")])
            .await
            .unwrap();

        assert_eq!(inserted.len(), 2);
        assert_ne!(inserted[0].id, inserted[1].id);

        let all = store.find_all().await.unwrap();
        assert_eq!(all, inserted);
    }

    #[tokio::test]
    async fn update_touches_only_supplied_fields() {
        let store = MemoryQuestionStore::new();
        let original = store.insert_many(vec![draft("2+2=?")]).await.unwrap().remove(0);

        let changes = UpdateQuestionRequest {
            option: Some(vec!["4".to_string(), "5".to_string()]),
            ..Default::default()
        };
        let updated = store
            .update_by_id(&original.id, &changes)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.option, vec!["4", "5"]);
        assert_eq!(updated.subject, original.subject);
        assert_eq!(updated.question_text, original.question_text);
        assert_eq!(updated.question_type, original.question_type);
        assert_eq!(updated.topic, original.topic);
        assert_eq!(updated.sub_topic, original.sub_topic);
        assert_eq!(updated.correct_answer, original.correct_answer);
    }

    #[tokio::test]
    async fn delete_returns_snapshot_and_removes() {
        let store = MemoryQuestionStore::new();
        let original = store.insert_many(vec![draft("2+2=?")]).await.unwrap().remove(0);

        let deleted = store.delete_by_id(&original.id).await.unwrap();
        assert_eq!(deleted, Some(original.clone()));
        assert_eq!(store.find_by_id(&original.id).await.unwrap(), None);
        assert_eq!(store.delete_by_id(&original.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn unknown_id_misses() {
        let store = MemoryQuestionStore::new();
        let id = QuestionId::generate();
        assert_eq!(store.find_by_id(&id).await.unwrap(), None);
        let changes = UpdateQuestionRequest {
            question_type: Some(QuestionType::Int),
            ..Default::default()
        };
        assert_eq!(store.update_by_id(&id, &changes).await.unwrap(), None);
    }
}
