//! Quiz question selection.
//!
//! Picks one question the player has not seen yet, uniformly at random from
//! the eligible candidates.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::domain::ports::{QuestionFilter, QuestionRepository, QuizQuery};
use crate::domain::{Error, Question, QuizCategory, QuizRequest};

/// Quiz service implementing [`QuizQuery`].
pub struct QuizService<Q> {
    questions: Arc<Q>,
    rng: Mutex<SmallRng>,
}

impl<Q> QuizService<Q> {
    /// Create a service drawing from an entropy-seeded generator.
    pub fn new(questions: Arc<Q>) -> Self {
        Self::with_rng(questions, SmallRng::from_entropy())
    }

    /// Create a service with a reproducible generator.
    pub fn with_seed(questions: Arc<Q>, seed: u64) -> Self {
        Self::with_rng(questions, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(questions: Arc<Q>, rng: SmallRng) -> Self {
        Self {
            questions,
            rng: Mutex::new(rng),
        }
    }

    fn pick(&self, mut candidates: Vec<Question>) -> Result<Option<Question>, Error> {
        if candidates.is_empty() {
            return Ok(None);
        }
        let index = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| Error::internal("quiz random generator lock poisoned"))?;
            rng.gen_range(0..candidates.len())
        };
        Ok(Some(candidates.swap_remove(index)))
    }
}

fn candidate_filter(request: &QuizRequest) -> QuestionFilter {
    let filter = QuestionFilter::all().excluding(request.previous_questions.iter().copied());
    match request.category {
        QuizCategory::All => filter,
        QuizCategory::Only(category) => filter.in_category(category),
    }
}

#[async_trait]
impl<Q> QuizQuery for QuizService<Q>
where
    Q: QuestionRepository,
{
    async fn next_question(&self, request: &QuizRequest) -> Result<Option<Question>, Error> {
        let candidates = self
            .questions
            .filter(&candidate_filter(request))
            .await
            .map_err(Error::from)?;
        debug!(
            candidates = candidates.len(),
            seen = request.previous_questions.len(),
            "selecting quiz question"
        );
        self.pick(candidates)
    }
}

#[cfg(test)]
#[path = "quiz_service_tests.rs"]
mod tests;
