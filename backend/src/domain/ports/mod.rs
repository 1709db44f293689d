//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe what the domain needs from a store.
//! Driving ports (`TriviaQuery`, `QuestionCommand`, `QuizQuery`) are what the
//! inbound HTTP adapter calls.

mod macros;
pub(crate) use macros::define_port_error;

mod category_repository;
mod question_command;
mod question_repository;
mod quiz_query;
mod trivia_query;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
#[cfg(test)]
pub use question_command::MockQuestionCommand;
pub use question_command::{CreatedQuestion, DeletedQuestion, QuestionCommand};
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::{QuestionFilter, QuestionRepository, QuestionRepositoryError};
#[cfg(test)]
pub use quiz_query::MockQuizQuery;
pub use quiz_query::QuizQuery;
#[cfg(test)]
pub use trivia_query::MockTriviaQuery;
pub use trivia_query::{CategoryQuestionsPage, QuestionPage, SearchPage, TriviaQuery};
