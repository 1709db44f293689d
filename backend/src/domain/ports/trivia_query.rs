//! Driving port for read-only trivia queries.
//!
//! Inbound adapters call this port to list categories and page through
//! questions without touching persistence concerns.

use async_trait::async_trait;
use pagination::PageNumber;

use crate::domain::{Category, CategoryId, CategoryMap, Error, Question};

/// One page of the full question listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Count of every stored question, not just this page.
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// One page of search matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub questions: Vec<Question>,
    /// Number of matches on this page only, mirroring what clients have
    /// always received; the full match count is not reported.
    pub total_results: usize,
}

/// One page of the questions filed under a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestionsPage {
    pub questions: Vec<Question>,
    /// Count of every question in the category.
    pub total_questions: usize,
    pub categories: Vec<Category>,
    /// Label of the requested category, if it exists.
    pub current_category: Option<String>,
}

/// Domain use-case port for trivia reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaQuery: Send + Sync {
    /// Every category as an id to label map. Never reports `NotFound`.
    async fn list_categories(&self) -> Result<CategoryMap, Error>;

    /// A page of all questions. An empty page is `NotFound`.
    async fn list_questions(&self, page: PageNumber) -> Result<QuestionPage, Error>;

    /// A page of questions whose text contains `term`, ignoring case.
    /// An empty page is `NotFound`.
    async fn search_questions(&self, term: &str, page: PageNumber) -> Result<SearchPage, Error>;

    /// A page of questions in `category`. An empty page is `NotFound`.
    async fn questions_by_category(
        &self,
        category: CategoryId,
        page: PageNumber,
    ) -> Result<CategoryQuestionsPage, Error>;
}
