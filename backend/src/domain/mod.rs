//! Domain primitives, ports, and services.
//!
//! Purpose: define strongly typed trivia entities and the use-case services
//! that operate on them, independent of HTTP and SQL concerns.
//!
//! Public surface:
//! - `Question`, `NewQuestion`, `QuestionDraft`: stored and incoming questions.
//! - `Category`, `CategoryMap`: read-only categories and their id to label map.
//! - `QuizCategory`, `QuizRequest`: quiz round inputs.
//! - `TriviaQueryService`, `QuestionCommandService`, `QuizService`: driving
//!   port implementations over the driven repository ports.
//! - `Error`, `ErrorCode`, `TraceId`: transport agnostic failures and request
//!   correlation.

pub mod category;
pub mod error;
pub mod ports;
pub mod question;
pub mod question_command_service;
pub mod quiz;
pub mod quiz_service;
pub mod trace_id;
pub mod trivia_query_service;

pub use self::category::{Category, CategoryId, CategoryMap, default_categories};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::question::{
    Difficulty, NewQuestion, Question, QuestionDraft, QuestionId, QuestionValidationError,
};
pub use self::question_command_service::QuestionCommandService;
pub use self::quiz::{QuizCategory, QuizRequest};
pub use self::quiz_service::QuizService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::trivia_query_service::TriviaQueryService;
