//! Quiz round inputs.

use super::{CategoryId, QuestionId};

/// Category scope of a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    /// Draw from every category.
    All,
    /// Draw only from one category.
    Only(CategoryId),
}

impl QuizCategory {
    /// Raw id clients send to select every category.
    pub const ALL_ID: i32 = 0;

    /// Interpret a raw client id, where `0` means every category.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{CategoryId, QuizCategory};
    ///
    /// assert_eq!(QuizCategory::from_raw(0), QuizCategory::All);
    /// assert_eq!(QuizCategory::from_raw(3), QuizCategory::Only(CategoryId::new(3)));
    /// ```
    pub fn from_raw(id: i32) -> Self {
        if id == Self::ALL_ID {
            Self::All
        } else {
            Self::Only(CategoryId::new(id))
        }
    }
}

/// Request for the next question of a quiz round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub category: QuizCategory,
    pub previous_questions: Vec<QuestionId>,
}
