//! Driving port for quiz question selection.

use async_trait::async_trait;

use crate::domain::{Error, Question, QuizRequest};

/// Domain use-case port for quiz rounds.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizQuery: Send + Sync {
    /// Pick one unseen question uniformly at random.
    ///
    /// Returns `Ok(None)` once every eligible question has been seen.
    async fn next_question(&self, request: &QuizRequest) -> Result<Option<Question>, Error>;
}
