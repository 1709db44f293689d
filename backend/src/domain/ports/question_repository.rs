//! Driven port for question persistence and the filter vocabulary it accepts.

use async_trait::async_trait;

use crate::domain::{CategoryId, NewQuestion, Question, QuestionId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by question repository adapters.
    pub enum QuestionRepositoryError {
        /// Repository connection could not be established.
        Connection => "question repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "question repository query failed: {message}",
    }
}

/// Predicate applied when listing questions.
///
/// Every criterion is optional; the default filter matches all questions.
/// Results are always ordered by ascending id.
///
/// # Examples
/// ```
/// use backend::domain::ports::QuestionFilter;
/// use backend::domain::{CategoryId, QuestionId};
///
/// let filter = QuestionFilter::all()
///     .in_category(CategoryId::new(1))
///     .excluding([QuestionId::new(4)]);
/// assert_eq!(filter.category(), Some(CategoryId::new(1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    text_contains: Option<String>,
    category: Option<CategoryId>,
    excluded: Vec<QuestionId>,
}

impl QuestionFilter {
    /// Match every question.
    pub fn all() -> Self {
        Self::default()
    }

    /// Keep questions whose text contains `term`, ignoring case.
    pub fn containing(mut self, term: impl Into<String>) -> Self {
        self.text_contains = Some(term.into());
        self
    }

    /// Keep questions in exactly this category.
    pub fn in_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Drop questions with any of these ids.
    pub fn excluding(mut self, ids: impl IntoIterator<Item = QuestionId>) -> Self {
        self.excluded.extend(ids);
        self
    }

    /// Substring that question text must contain, ignoring case.
    pub fn text_contains(&self) -> Option<&str> {
        self.text_contains.as_deref()
    }

    /// Category a question must belong to.
    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    /// Ids that never match.
    pub fn excluded(&self) -> &[QuestionId] {
        &self.excluded
    }

    /// Evaluate the predicate against a single question.
    ///
    /// Store adapters that filter in memory use this directly; SQL adapters
    /// must stay equivalent to it.
    pub fn matches(&self, question: &Question) -> bool {
        let text_ok = self.text_contains.as_deref().is_none_or(|term| {
            question
                .question
                .to_lowercase()
                .contains(&term.to_lowercase())
        });
        let category_ok = self
            .category
            .is_none_or(|category| question.category == category);
        text_ok && category_ok && !self.excluded.contains(&question.id)
    }
}

/// Store primitives for questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Return the questions matching `filter`, ascending by id.
    async fn filter(&self, filter: &QuestionFilter)
    -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Fetch a question by identifier.
    async fn find_by_id(&self, id: QuestionId)
    -> Result<Option<Question>, QuestionRepositoryError>;

    /// Count every stored question.
    async fn count(&self) -> Result<usize, QuestionRepositoryError>;

    /// Persist a new question and return it with its assigned id.
    async fn insert(&self, question: &NewQuestion) -> Result<Question, QuestionRepositoryError>;

    /// Delete a question, returning whether a record was removed.
    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError>;
}
