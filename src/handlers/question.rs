// src/handlers/question.rs

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::question::{CreateQuestionsRequest, NewQuestion, QuestionId, UpdateQuestionRequest},
    store::DynQuestionStore,
    utils::response::ApiResponse,
};

fn parse_id(raw: &str, message: &str) -> Result<QuestionId, AppError> {
    raw.parse::<QuestionId>()
        .map_err(|_| AppError::ValidationError(message.to_string()))
}

fn question_not_found() -> AppError {
    AppError::NotFound("Question not found".to_string())
}

/// Update or delete aimed at the collection itself rather than one question.
pub async fn missing_question_id() -> AppError {
    AppError::ValidationError("Invalid or missing question ID".to_string())
}

/// Adds one or more questions in a single batch.
///
/// Every question is validated before anything is written, so a bad entry
/// rejects the whole batch.
pub async fn create_questions(
    State(store): State<DynQuestionStore>,
    payload: Result<Json<CreateQuestionsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let questions = match payload.questions {
        Some(questions) if !questions.is_empty() => questions,
        _ => {
            return Err(AppError::ValidationError(
                "Provide valid question input".to_string(),
            ));
        }
    };

    let drafts = questions
        .into_iter()
        .enumerate()
        .map(|(idx, input)| {
            NewQuestion::try_from(input).map_err(|e| {
                AppError::ValidationError(format!("Invalid question at index {}: {}", idx, e.message()))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let added = store.insert_many(drafts).await.map_err(|e| {
        tracing::error!("Failed to add questions: {}", e);
        AppError::StorageFailure("Error occurred while adding questions".to_string())
    })?;

    tracing::info!(count = added.len(), "Questions added");

    Ok(ApiResponse::ok(added, "Questions added successfully"))
}

/// Lists every question in the collection.
pub async fn list_questions(
    State(store): State<DynQuestionStore>,
) -> Result<impl IntoResponse, AppError> {
    let questions = store.find_all().await?;

    Ok(ApiResponse::ok(questions, "Questions fetched successfully"))
}

/// Retrieves a single question by ID.
pub async fn get_question(
    State(store): State<DynQuestionStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Invalid question ID")?;

    let question = store
        .find_by_id(&id)
        .await?
        .ok_or_else(question_not_found)?;

    Ok(ApiResponse::ok(question, "Question fetched successfully"))
}

/// Updates `questionText`, `option` and/or `questionType` of a question.
/// Fields absent from the body keep their current value.
pub async fn update_question(
    State(store): State<DynQuestionStore>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Invalid or missing question ID")?;
    let Json(payload) = payload?;

    if payload.is_empty() {
        return Err(AppError::ValidationError(
            "No valid fields provided for update".to_string(),
        ));
    }

    payload.validate()?;

    let updated = store
        .update_by_id(&id, &payload)
        .await?
        .ok_or_else(question_not_found)?;

    tracing::info!(id = %id, "Question updated");

    Ok(ApiResponse::ok(updated, "Question updated successfully"))
}

/// Deletes a question by ID, returning the document as it was before removal.
pub async fn delete_question(
    State(store): State<DynQuestionStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Invalid question ID")?;

    let deleted = store
        .delete_by_id(&id)
        .await?
        .ok_or_else(question_not_found)?;

    tracing::info!(id = %id, "Question deleted");

    Ok(ApiResponse::ok(deleted, "Question deleted successfully"))
}
