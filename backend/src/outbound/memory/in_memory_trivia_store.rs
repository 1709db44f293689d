//! Mutex-guarded in-memory implementation of both trivia repositories.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, QuestionFilter, QuestionRepository,
    QuestionRepositoryError,
};
use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId, default_categories};

#[derive(Debug)]
struct StoreState {
    questions: BTreeMap<QuestionId, Question>,
    categories: BTreeMap<CategoryId, Category>,
    last_id: i32,
    unavailable: bool,
}

/// In-memory question and category store.
///
/// Questions are keyed by id, so listings come back in ascending id order.
/// Ids increase monotonically and are never reused after a delete.
///
/// # Examples
/// ```
/// use backend::outbound::memory::InMemoryTriviaStore;
///
/// let store = InMemoryTriviaStore::with_default_categories();
/// assert_eq!(store.question_count(), 0);
/// ```
#[derive(Debug)]
pub struct InMemoryTriviaStore {
    state: Mutex<StoreState>,
}

impl Default for InMemoryTriviaStore {
    fn default() -> Self {
        Self::with_categories(Vec::new())
    }
}

impl InMemoryTriviaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given categories and no questions.
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                questions: BTreeMap::new(),
                categories: categories
                    .into_iter()
                    .map(|category| (category.id, category))
                    .collect(),
                last_id: 0,
                unavailable: false,
            }),
        }
    }

    /// Create a store holding the standard six categories.
    pub fn with_default_categories() -> Self {
        Self::with_categories(default_categories())
    }

    /// Add questions in order, assigning the next free ids.
    #[must_use]
    pub fn with_questions(self, questions: impl IntoIterator<Item = NewQuestion>) -> Self {
        {
            let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            for question in questions {
                Self::store(&mut state, question);
            }
        }
        self
    }

    /// Simulate a lost database connection; every call then fails.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .unavailable = unavailable;
    }

    /// Number of stored questions.
    pub fn question_count(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .questions
            .len()
    }

    fn store(state: &mut StoreState, question: NewQuestion) -> Question {
        state.last_id = state.last_id.saturating_add(1);
        let stored = question.into_question(QuestionId::new(state.last_id));
        state.questions.insert(stored.id, stored.clone());
        stored
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, String> {
        let state = self
            .state
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())?;
        if state.unavailable {
            return Err("in-memory store unavailable".to_owned());
        }
        Ok(state)
    }

    fn questions(&self) -> Result<MutexGuard<'_, StoreState>, QuestionRepositoryError> {
        self.lock().map_err(QuestionRepositoryError::connection)
    }

    fn categories(&self) -> Result<MutexGuard<'_, StoreState>, CategoryRepositoryError> {
        self.lock().map_err(CategoryRepositoryError::connection)
    }
}

#[async_trait]
impl QuestionRepository for InMemoryTriviaStore {
    async fn filter(
        &self,
        filter: &QuestionFilter,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let state = self.questions()?;
        Ok(state
            .questions
            .values()
            .filter(|question| filter.matches(question))
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        Ok(self.questions()?.questions.get(&id).cloned())
    }

    async fn count(&self) -> Result<usize, QuestionRepositoryError> {
        Ok(self.questions()?.questions.len())
    }

    async fn insert(&self, question: &NewQuestion) -> Result<Question, QuestionRepositoryError> {
        let mut state = self.questions()?;
        if state.last_id == i32::MAX {
            return Err(QuestionRepositoryError::query("question id space exhausted"));
        }
        Ok(Self::store(&mut state, question.clone()))
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        Ok(self.questions()?.questions.remove(&id).is_some())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryTriviaStore {
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        Ok(self.categories()?.categories.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        Ok(self.categories()?.categories.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;
    use rstest::{fixture, rstest};

    fn new_question(text: &str, category: i32) -> NewQuestion {
        NewQuestion::new(
            text,
            "answer",
            CategoryId::new(category),
            Difficulty::new(1).expect("valid difficulty"),
        )
        .expect("valid question")
    }

    #[fixture]
    fn store() -> InMemoryTriviaStore {
        InMemoryTriviaStore::with_default_categories().with_questions([
            new_question("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", 4),
            new_question("What movie earned Tom Hanks his third straight Oscar nomination?", 5),
            new_question("Which Dutch graphic artist was initials M C?", 2),
        ])
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_never_reused(store: InMemoryTriviaStore) {
        assert!(QuestionRepository::delete(&store, QuestionId::new(3)).await.expect("delete"));
        let added = store
            .insert(&new_question("A fresh one", 1))
            .await
            .expect("insert");
        assert_eq!(added.id, QuestionId::new(4));
    }

    #[rstest]
    #[tokio::test]
    async fn filter_preserves_ascending_id_order(store: InMemoryTriviaStore) {
        let all = store.filter(&QuestionFilter::all()).await.expect("filter");
        let ids: Vec<i32> = all.iter().map(|q| q.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let matches = store
            .filter(&QuestionFilter::all().containing("WHAT"))
            .await
            .expect("filter");
        let ids: Vec<i32> = matches.iter().map(|q| q.id.get()).collect();
        assert_eq!(ids, vec![2]);
    }

    #[rstest]
    #[tokio::test]
    async fn deleting_unknown_id_changes_nothing(store: InMemoryTriviaStore) {
        let removed = QuestionRepository::delete(&store, QuestionId::new(99))
            .await
            .expect("delete");
        assert!(!removed);
        assert_eq!(store.question_count(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn categories_list_in_id_order(store: InMemoryTriviaStore) {
        let categories = store.list_all().await.expect("categories");
        assert_eq!(categories.len(), 6);
        let found = CategoryRepository::find_by_id(&store, CategoryId::new(3))
            .await
            .expect("lookup");
        assert_eq!(found.map(|c| c.kind), Some("Geography".to_owned()));
    }

    #[rstest]
    #[tokio::test]
    async fn unavailable_store_reports_connection_errors(store: InMemoryTriviaStore) {
        store.set_unavailable(true);
        let err = store.count().await.expect_err("unavailable");
        assert!(matches!(err, QuestionRepositoryError::Connection { .. }));
        let err = store.list_all().await.expect_err("unavailable");
        assert!(matches!(err, CategoryRepositoryError::Connection { .. }));

        store.set_unavailable(false);
        assert_eq!(store.count().await.expect("available again"), 3);
    }
}
