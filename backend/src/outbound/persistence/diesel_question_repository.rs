//! PostgreSQL-backed `QuestionRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{QuestionFilter, QuestionRepository, QuestionRepositoryError};
use crate::domain::{CategoryId, Difficulty, NewQuestion, Question, QuestionId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewQuestionRow, QuestionRow};
use super::pool::{DbPool, PoolError};
use super::schema::questions;

/// Diesel-backed implementation of the `QuestionRepository` port.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> QuestionRepositoryError {
    map_basic_pool_error(error, |message| {
        QuestionRepositoryError::connection(message)
    })
}

fn map_diesel_error(error: diesel::result::Error) -> QuestionRepositoryError {
    map_basic_diesel_error(
        error,
        QuestionRepositoryError::query,
        QuestionRepositoryError::connection,
    )
}

/// Build an `ILIKE` pattern matching `term` literally anywhere in the text.
///
/// PostgreSQL treats backslash as the default escape character.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn row_to_question(row: QuestionRow) -> Result<Question, QuestionRepositoryError> {
    let difficulty = Difficulty::new(row.difficulty).map_err(|err| {
        QuestionRepositoryError::query(format!("question {} holds invalid data: {err}", row.id))
    })?;
    Ok(Question {
        id: QuestionId::new(row.id),
        question: row.question,
        answer: row.answer,
        category: CategoryId::new(row.category),
        difficulty,
    })
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn filter(
        &self,
        filter: &QuestionFilter,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = questions::table
            .select(QuestionRow::as_select())
            .order(questions::id.asc())
            .into_boxed();
        if let Some(term) = filter.text_contains() {
            query = query.filter(questions::question.ilike(contains_pattern(term)));
        }
        if let Some(category) = filter.category() {
            query = query.filter(questions::category.eq(category.get()));
        }
        if !filter.excluded().is_empty() {
            let excluded: Vec<i32> = filter.excluded().iter().map(|id| id.get()).collect();
            query = query.filter(questions::id.ne_all(excluded));
        }

        let rows: Vec<QuestionRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_question).collect()
    }

    async fn find_by_id(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<QuestionRow> = questions::table
            .find(id.get())
            .select(QuestionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_question).transpose()
    }

    async fn count(&self) -> Result<usize, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = questions::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        usize::try_from(total)
            .map_err(|_| QuestionRepositoryError::query(format!("invalid question count {total}")))
    }

    async fn insert(&self, question: &NewQuestion) -> Result<Question, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewQuestionRow {
            question: question.question(),
            answer: question.answer(),
            category: question.category().get(),
            difficulty: question.difficulty().get(),
        };

        let row: QuestionRow = diesel::insert_into(questions::table)
            .values(&new_row)
            .returning(QuestionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_question(row)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(questions::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
