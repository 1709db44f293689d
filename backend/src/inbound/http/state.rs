//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! driving ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CategoryRepository, QuestionCommand, QuestionRepository, QuizQuery, TriviaQuery,
};
use crate::domain::{QuestionCommandService, QuizService, TriviaQueryService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Category and question reads.
    pub trivia: Arc<dyn TriviaQuery>,
    /// Question creation and deletion.
    pub questions: Arc<dyn QuestionCommand>,
    /// Quiz question selection.
    pub quiz: Arc<dyn QuizQuery>,
}

impl HttpState {
    /// Bundle explicit port implementations.
    pub fn new(
        trivia: Arc<dyn TriviaQuery>,
        questions: Arc<dyn QuestionCommand>,
        quiz: Arc<dyn QuizQuery>,
    ) -> Self {
        Self {
            trivia,
            questions,
            quiz,
        }
    }

    /// Wire the domain services over a pair of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryTriviaStore;
    ///
    /// let store = Arc::new(InMemoryTriviaStore::with_default_categories());
    /// let _state = HttpState::from_repositories(store.clone(), store);
    /// ```
    pub fn from_repositories<Q, C>(questions: Arc<Q>, categories: Arc<C>) -> Self
    where
        Q: QuestionRepository + 'static,
        C: CategoryRepository + 'static,
    {
        Self::new(
            Arc::new(TriviaQueryService::new(questions.clone(), categories)),
            Arc::new(QuestionCommandService::new(questions.clone())),
            Arc::new(QuizService::new(questions)),
        )
    }
}
