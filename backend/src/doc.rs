//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every trivia endpoint and the DTOs they exchange.
//! Swagger UI serves it in debug builds and `openapi-dump` prints it for
//! external tooling.

use utoipa::OpenApi;

use crate::domain::{Category, CategoryId, CategoryMap, Difficulty, Question, QuestionId};
use crate::inbound::http::categories::{CategoriesResponse, CategoryQuestionsResponse};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::questions::{
    CreateQuestionRequest, CreatedQuestionResponse, DeletedQuestionResponse, QuestionsResponse,
    SearchRequest, SearchResponse,
};
use crate::inbound::http::quizzes::{QuizCategoryBody, QuizRequestBody, QuizResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        description = "Question bank with paginated browsing, search, and quiz rounds."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::category_questions,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::create_question,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::questions::search_questions,
        crate::inbound::http::quizzes::next_quiz_question,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Category,
        CategoryId,
        CategoryMap,
        Question,
        QuestionId,
        Difficulty,
        ErrorEnvelope,
        CategoriesResponse,
        CategoryQuestionsResponse,
        QuestionsResponse,
        SearchResponse,
        CreatedQuestionResponse,
        DeletedQuestionResponse,
        CreateQuestionRequest,
        SearchRequest,
        QuizCategoryBody,
        QuizRequestBody,
        QuizResponse,
    )),
    tags(
        (name = "categories", description = "Read-only category listings"),
        (name = "questions", description = "Browse, search, create, and delete questions"),
        (name = "quizzes", description = "Quiz rounds drawing unseen questions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
