//! Trivia questions and the validated input used to create them.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::CategoryId;

/// Store-assigned question identifier, never reused after deletion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i32, example = 5)]
pub struct QuestionId(i32);

impl QuestionId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty rating; always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i32, example = 2)]
pub struct Difficulty(i32);

impl Difficulty {
    /// Validate a raw rating.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Difficulty;
    ///
    /// assert!(Difficulty::new(3).is_ok());
    /// assert!(Difficulty::new(0).is_err());
    /// ```
    pub fn new(value: i32) -> Result<Self, QuestionValidationError> {
        if value < 1 {
            return Err(QuestionValidationError::NonPositiveDifficulty { value });
        }
        Ok(Self(value))
    }

    /// Return the raw rating.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i32::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A persisted trivia question.
///
/// Serialises as `{"id", "question", "answer", "category", "difficulty"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    /// Store-assigned identifier.
    pub id: QuestionId,
    /// Question text.
    #[schema(example = "What is the heaviest organ in the human body?")]
    pub question: String,
    /// Expected answer.
    #[schema(example = "The Liver")]
    pub answer: String,
    /// Referenced category; may dangle.
    pub category: CategoryId,
    /// Difficulty rating.
    pub difficulty: Difficulty,
}

/// Validation failures raised while building a [`NewQuestion`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionValidationError {
    /// A required field was absent or `null`.
    #[error("{field} is required")]
    MissingField { field: &'static str },
    /// A text field held only whitespace.
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },
    /// Difficulty below 1.
    #[error("difficulty must be at least 1, got {value}")]
    NonPositiveDifficulty { value: i32 },
}

impl QuestionValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::BlankField { field } => field,
            Self::NonPositiveDifficulty { .. } => "difficulty",
        }
    }
}

/// Unvalidated question fields as supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    /// Question text.
    pub question: Option<String>,
    /// Expected answer.
    pub answer: Option<String>,
    /// Raw category id.
    pub category: Option<i32>,
    /// Raw difficulty rating.
    pub difficulty: Option<i32>,
}

/// A question ready to be stored; all fields present and valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl NewQuestion {
    /// Build from already validated parts.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: Difficulty,
    ) -> Result<Self, QuestionValidationError> {
        Ok(Self {
            question: non_blank("question", question.into())?,
            answer: non_blank("answer", answer.into())?,
            category,
            difficulty,
        })
    }

    /// Question text.
    pub fn question(&self) -> &str {
        self.question.as_str()
    }

    /// Expected answer.
    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    /// Target category.
    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// Difficulty rating.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Attach a store-assigned identifier.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

fn non_blank(field: &'static str, value: String) -> Result<String, QuestionValidationError> {
    if value.trim().is_empty() {
        return Err(QuestionValidationError::BlankField { field });
    }
    Ok(value)
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T, QuestionValidationError> {
    value.ok_or(QuestionValidationError::MissingField { field })
}

impl TryFrom<QuestionDraft> for NewQuestion {
    type Error = QuestionValidationError;

    fn try_from(draft: QuestionDraft) -> Result<Self, Self::Error> {
        let question = required("question", draft.question)?;
        let answer = required("answer", draft.answer)?;
        let difficulty = Difficulty::new(required("difficulty", draft.difficulty)?)?;
        let category = CategoryId::new(required("category", draft.category)?);
        Self::new(question, answer, category, difficulty)
    }
}
