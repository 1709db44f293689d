//! Read-side trivia service.
//!
//! Composes the question and category repositories with the pager to serve
//! the [`TriviaQuery`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{DEFAULT_PAGE_SIZE, PageNumber, into_page, page_count};
use tracing::debug;

use crate::domain::ports::{
    CategoryQuestionsPage, CategoryRepository, QuestionFilter, QuestionPage, QuestionRepository,
    SearchPage, TriviaQuery,
};
use crate::domain::{CategoryId, CategoryMap, Error, Question};

fn non_empty_page(
    page: PageNumber,
    matches: Vec<Question>,
    what: &str,
) -> Result<Vec<Question>, Error> {
    let pages = page_count(matches.len(), DEFAULT_PAGE_SIZE);
    let questions = into_page(page, matches, DEFAULT_PAGE_SIZE);
    if questions.is_empty() {
        debug!(page = %page, pages, what, "requested page holds no questions");
        return Err(Error::not_found(format!("no {what} on page {page}")));
    }
    Ok(questions)
}

/// Trivia read service implementing [`TriviaQuery`].
#[derive(Clone)]
pub struct TriviaQueryService<Q, C> {
    questions: Arc<Q>,
    categories: Arc<C>,
}

impl<Q, C> TriviaQueryService<Q, C> {
    /// Create a service over the given repositories.
    pub fn new(questions: Arc<Q>, categories: Arc<C>) -> Self {
        Self {
            questions,
            categories,
        }
    }
}

impl<Q, C> TriviaQueryService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn matching(&self, filter: &QuestionFilter) -> Result<Vec<Question>, Error> {
        self.questions
            .filter(filter)
            .await
            .map_err(Error::from)
    }
}

#[async_trait]
impl<Q, C> TriviaQuery for TriviaQueryService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn list_categories(&self) -> Result<CategoryMap, Error> {
        let categories = self
            .categories
            .list_all()
            .await
            .map_err(Error::from)?;
        Ok(categories.into_iter().collect())
    }

    async fn list_questions(&self, page: PageNumber) -> Result<QuestionPage, Error> {
        let all = self.matching(&QuestionFilter::all()).await?;
        let total_questions = all.len();
        let questions = non_empty_page(page, all, "questions")?;
        let categories = self.list_categories().await?;
        Ok(QuestionPage {
            questions,
            total_questions,
            categories,
        })
    }

    async fn search_questions(&self, term: &str, page: PageNumber) -> Result<SearchPage, Error> {
        let matches = self
            .matching(&QuestionFilter::all().containing(term))
            .await?;
        let questions = non_empty_page(page, matches, "search results")?;
        Ok(SearchPage {
            total_results: questions.len(),
            questions,
        })
    }

    async fn questions_by_category(
        &self,
        category: CategoryId,
        page: PageNumber,
    ) -> Result<CategoryQuestionsPage, Error> {
        let in_category = self
            .matching(&QuestionFilter::all().in_category(category))
            .await?;
        let total_questions = in_category.len();
        let categories = self
            .categories
            .list_all()
            .await
            .map_err(Error::from)?;
        let current = self
            .categories
            .find_by_id(category)
            .await
            .map_err(Error::from)?;
        let questions = non_empty_page(page, in_category, "questions in category")?;
        Ok(CategoryQuestionsPage {
            questions,
            total_questions,
            categories,
            current_category: current.map(|found| found.kind),
        })
    }
}

#[cfg(test)]
#[path = "trivia_query_service_tests.rs"]
mod tests;
