//! Write-side question service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{CreatedQuestion, DeletedQuestion, QuestionCommand, QuestionRepository};
use crate::domain::{Error, NewQuestion, QuestionId};

/// Question mutation service implementing [`QuestionCommand`].
#[derive(Clone)]
pub struct QuestionCommandService<Q> {
    questions: Arc<Q>,
}

impl<Q> QuestionCommandService<Q> {
    /// Create a service over the given repository.
    pub fn new(questions: Arc<Q>) -> Self {
        Self { questions }
    }
}

impl<Q> QuestionCommandService<Q>
where
    Q: QuestionRepository,
{
    async fn total(&self) -> Result<usize, Error> {
        self.questions
            .count()
            .await
            .map_err(Error::from)
    }
}

#[async_trait]
impl<Q> QuestionCommand for QuestionCommandService<Q>
where
    Q: QuestionRepository,
{
    async fn create(&self, question: NewQuestion) -> Result<CreatedQuestion, Error> {
        let created = self
            .questions
            .insert(&question)
            .await
            .map_err(Error::from)?;
        info!(
            question_id = %created.id,
            category = %created.category,
            "question created"
        );
        let total_questions = self.total().await?;
        Ok(CreatedQuestion {
            question: created,
            total_questions,
        })
    }

    async fn delete(&self, id: QuestionId) -> Result<DeletedQuestion, Error> {
        let existing = self
            .questions
            .find_by_id(id)
            .await
            .map_err(Error::from)?;
        if existing.is_none() {
            return Err(Error::not_found(format!("question {id} does not exist")));
        }

        let removed = self
            .questions
            .delete(id)
            .await
            .map_err(Error::from)?;
        if !removed {
            // Lost a race with a concurrent delete.
            return Err(Error::not_found(format!("question {id} does not exist")));
        }
        info!(question_id = %id, "question deleted");

        let total_questions = self.total().await?;
        Ok(DeletedQuestion {
            deleted: id,
            total_questions,
        })
    }
}

#[cfg(test)]
#[path = "question_command_service_tests.rs"]
mod tests;
