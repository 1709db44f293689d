//! Driving port for question mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewQuestion, Question, QuestionId};

/// Outcome of creating a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedQuestion {
    pub question: Question,
    /// Count of stored questions after the insert.
    pub total_questions: usize,
}

/// Outcome of deleting a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedQuestion {
    pub deleted: QuestionId,
    /// Count of stored questions after the delete.
    pub total_questions: usize,
}

/// Domain use-case port for creating and deleting questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionCommand: Send + Sync {
    /// Store a validated question.
    async fn create(&self, question: NewQuestion) -> Result<CreatedQuestion, Error>;

    /// Remove a question. An unknown id is `NotFound` and changes nothing.
    async fn delete(&self, id: QuestionId) -> Result<DeletedQuestion, Error>;
}
