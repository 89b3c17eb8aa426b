// src/models/question.rs

use std::{fmt, str::FromStr};

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::Validate;

use crate::error::AppError;

/// Storage-assigned identifier: a 24-character lowercase hex ObjectId.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(ObjectId);

impl QuestionId {
    /// Allocates a fresh identifier. Only stores call this.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl FromStr for QuestionId {
    type Err = bson::oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self)
    }
}

impl Serialize for QuestionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Closed set of question kinds: single choice, multiple choice, integer answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestionType {
    Scq,
    Mcq,
    Int,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Scq => "SCQ",
            QuestionType::Mcq => "MCQ",
            QuestionType::Int => "INT",
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCQ" => Ok(QuestionType::Scq),
            "MCQ" => Ok(QuestionType::Mcq),
            "INT" => Ok(QuestionType::Int),
            other => Err(format!("unknown question type '{}'", other)),
        }
    }
}

/// A persisted question document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: QuestionId,

    pub subject: String,

    pub question_text: String,

    /// Answer choices, in display order.
    pub option: Vec<String>,

    /// Not cross-checked against `option` or `question_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,

    pub question_type: QuestionType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_topic: Option<String>,
}

/// A question that passed schema validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub subject: String,
    pub question_text: String,
    pub option: Vec<String>,
    pub correct_answer: Option<String>,
    pub question_type: QuestionType,
    pub topic: Option<String>,
    pub sub_topic: Option<String>,
}

impl NewQuestion {
    /// Binds the draft to its storage-assigned identifier.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            subject: self.subject,
            question_text: self.question_text,
            option: self.option,
            correct_answer: self.correct_answer,
            question_type: self.question_type,
            topic: self.topic,
            sub_topic: self.sub_topic,
        }
    }
}

/// DTO for creating questions in bulk.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionsRequest {
    pub questions: Option<Vec<QuestionInput>>,
}

/// One question as submitted by the client.
/// Fields are optional here so that missing ones surface as validation errors.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    #[validate(
        required(message = "subject is required"),
        length(min = 1, message = "subject cannot be empty")
    )]
    pub subject: Option<String>,

    #[validate(
        required(message = "questionText is required"),
        length(min = 1, message = "questionText cannot be empty")
    )]
    pub question_text: Option<String>,

    #[validate(
        required(message = "option is required"),
        length(min = 1, message = "option must contain at least one choice")
    )]
    pub option: Option<Vec<String>>,

    pub correct_answer: Option<String>,

    #[validate(required(message = "questionType is required"))]
    pub question_type: Option<QuestionType>,

    pub topic: Option<String>,

    pub sub_topic: Option<String>,
}

impl TryFrom<QuestionInput> for NewQuestion {
    type Error = AppError;

    fn try_from(input: QuestionInput) -> Result<Self, Self::Error> {
        input.validate()?;

        let missing = |field: &str| AppError::ValidationError(format!("{} is required", field));

        Ok(NewQuestion {
            subject: input.subject.ok_or_else(|| missing("subject"))?,
            question_text: input.question_text.ok_or_else(|| missing("questionText"))?,
            option: input.option.ok_or_else(|| missing("option"))?,
            correct_answer: input.correct_answer,
            question_type: input.question_type.ok_or_else(|| missing("questionType"))?,
            topic: input.topic,
            sub_topic: input.sub_topic,
        })
    }
}

/// DTO for updating a question. Only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionRequest {
    #[validate(length(min = 1, message = "questionText cannot be empty"))]
    pub question_text: Option<String>,

    #[validate(length(min = 1, message = "option must contain at least one choice"))]
    pub option: Option<Vec<String>>,

    pub question_type: Option<QuestionType>,
}

impl UpdateQuestionRequest {
    /// True when the request carries no updatable field.
    pub fn is_empty(&self) -> bool {
        self.question_text.is_none() && self.option.is_none() && self.question_type.is_none()
    }

    /// Applies the supplied fields onto an existing document.
    pub fn apply_to(&self, question: &mut Question) {
        if let Some(text) = &self.question_text {
            question.question_text = text.clone();
        }
        if let Some(option) = &self.option {
            question.option = option.clone();
        }
        if let Some(question_type) = self.question_type {
            question.question_type = question_type;
        }
    }
}
