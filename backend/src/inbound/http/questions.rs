//! Question HTTP handlers.
//!
//! ```text
//! GET    /questions?page=N
//! POST   /questions
//! DELETE /questions/{id}
//! POST   /questions/search?page=N
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use utoipa::ToSchema;

use crate::domain::ports::{CreatedQuestion, DeletedQuestion, QuestionPage, SearchPage};
use crate::domain::{
    CategoryId, CategoryMap, Difficulty, Error, ErrorCode, NewQuestion, Question, QuestionDraft,
    QuestionId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::page::PageQuery;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, decode_object, lenient_int, missing_field_error,
};

/// Request payload for creating a question.
///
/// `category` and `difficulty` accept integers or numeric strings.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateQuestionRequest {
    /// Question text; required and non-blank.
    #[schema(example = "What is the largest lake in Africa?")]
    pub question: Option<String>,
    /// Expected answer; required and non-blank.
    #[schema(example = "Lake Victoria")]
    pub answer: Option<String>,
    /// Category id; required.
    #[schema(value_type = Option<i32>, example = 3)]
    pub category: Option<Value>,
    /// Difficulty of at least 1; required.
    #[schema(value_type = Option<i32>, example = 2)]
    pub difficulty: Option<Value>,
}

/// Request payload for searching questions.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct SearchRequest {
    /// Case-insensitive substring to look for; required.
    #[serde(rename = "searchTerm", alias = "search_term")]
    #[schema(example = "title")]
    pub search_term: Option<String>,
}

/// Response body for `GET /questions`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionsResponse {
    /// `true` for every successful response.
    pub success: bool,
    /// Questions on the requested page, ascending by id.
    pub questions: Vec<Question>,
    /// Every stored question, not just this page.
    pub total_questions: usize,
    /// Every category, keyed by id.
    pub categories: CategoryMap,
    /// Always `null` for the unfiltered listing.
    pub current_category: Option<String>,
}

impl From<QuestionPage> for QuestionsResponse {
    fn from(page: QuestionPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            categories: page.categories,
            current_category: None,
        }
    }
}

/// Response body for `POST /questions/search`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    /// `true` for every successful response.
    pub success: bool,
    /// Questions on the requested page, ascending by id.
    pub questions: Vec<Question>,
    /// Matches on this page only.
    pub total_results: usize,
    /// Always `null`; search spans every category.
    pub current_category: Option<String>,
}

impl From<SearchPage> for SearchResponse {
    fn from(page: SearchPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_results: page.total_results,
            current_category: None,
        }
    }
}

/// Response body for `POST /questions`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedQuestionResponse {
    /// `true` for every successful response.
    pub success: bool,
    /// Id assigned by the store.
    #[schema(value_type = i32)]
    pub id: QuestionId,
    /// Stored question text.
    pub question: String,
    /// Stored answer.
    pub answer: String,
    /// Category the question was filed under.
    #[schema(value_type = i32)]
    pub category: CategoryId,
    /// Stored difficulty.
    #[schema(value_type = i32)]
    pub difficulty: Difficulty,
    /// Stored questions after the insert.
    pub total_questions: usize,
}

impl From<CreatedQuestion> for CreatedQuestionResponse {
    fn from(created: CreatedQuestion) -> Self {
        let CreatedQuestion {
            question,
            total_questions,
        } = created;
        Self {
            success: true,
            id: question.id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
            total_questions,
        }
    }
}

/// Response body for `DELETE /questions/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedQuestionResponse {
    /// `true` for every successful response.
    pub success: bool,
    /// Id of the removed question.
    #[schema(value_type = i32)]
    pub deleted_id: QuestionId,
    /// Stored questions after the delete.
    pub total_questions: usize,
}

impl From<DeletedQuestion> for DeletedQuestionResponse {
    fn from(deleted: DeletedQuestion) -> Self {
        Self {
            success: true,
            deleted_id: deleted.deleted,
            total_questions: deleted.total_questions,
        }
    }
}

fn parse_create_request(body: Map<String, Value>) -> Result<NewQuestion, Error> {
    let payload: CreateQuestionRequest = decode_object(body, "question")?;
    let draft = QuestionDraft {
        question: payload.question,
        answer: payload.answer,
        category: lenient_int(
            payload.category,
            FieldName::new("category"),
            ErrorCode::BadRequest,
        )?,
        difficulty: lenient_int(
            payload.difficulty,
            FieldName::new("difficulty"),
            ErrorCode::BadRequest,
        )?,
    };
    NewQuestion::try_from(draft).map_err(|err| {
        Error::bad_request(err.to_string()).with_details(json!({ "field": err.field() }))
    })
}

fn parse_search_request(body: Map<String, Value>) -> Result<String, Error> {
    let payload: SearchRequest = decode_object(body, "search")?;
    payload
        .search_term
        .ok_or_else(|| {
            missing_field_error(FieldName::new("searchTerm"), ErrorCode::UnprocessableEntity)
        })
}

/// Page through every question.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "A page of questions", body = QuestionsResponse),
        (status = 404, description = "No questions on this page", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<QuestionsResponse>> {
    let page = state.trivia.list_questions(query.page_number()).await?;
    Ok(web::Json(page.into()))
}

/// Store a new question.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created", body = CreatedQuestionResponse),
        (status = 400, description = "A required field is missing or invalid", body = ErrorEnvelope),
        (status = 422, description = "Body absent or unparseable", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "createQuestion"
)]
#[post("/questions")]
pub async fn create_question(
    state: web::Data<HttpState>,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<HttpResponse> {
    let new_question = parse_create_request(payload.into_inner())?;
    let created = state.questions.create(new_question).await?;
    Ok(HttpResponse::Created().json(CreatedQuestionResponse::from(created)))
}

/// Delete a question by id.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(("id" = i32, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "Question deleted", body = DeletedQuestionResponse),
        (status = 404, description = "No such question", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "deleteQuestion"
)]
#[delete("/questions/{id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DeletedQuestionResponse>> {
    let deleted = state
        .questions
        .delete(QuestionId::new(path.into_inner()))
        .await?;
    Ok(web::Json(deleted.into()))
}

/// Case-insensitive substring search over question text.
#[utoipa::path(
    post,
    path = "/questions/search",
    params(PageQuery),
    request_body = SearchRequest,
    responses(
        (status = 200, description = "A page of matches", body = SearchResponse),
        (status = 404, description = "No matches on this page", body = ErrorEnvelope),
        (status = 422, description = "Body absent or search term missing", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "searchQuestions"
)]
#[post("/questions/search")]
pub async fn search_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<web::Json<SearchResponse>> {
    let term = parse_search_request(payload.into_inner())?;
    let page = state
        .trivia
        .search_questions(&term, query.page_number())
        .await?;
    Ok(web::Json(page.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(value: Value) -> Map<String, Value> {
        serde_json::from_value(value).expect("request shape")
    }

    #[rstest]
    fn create_accepts_numeric_strings() {
        let parsed = parse_create_request(request(json!({
            "question": "Who discovered penicillin?",
            "answer": "Alexander Fleming",
            "category": "1",
            "difficulty": 3,
        })))
        .expect("valid payload");
        assert_eq!(parsed.category().get(), 1);
        assert_eq!(parsed.difficulty().get(), 3);
    }

    #[rstest]
    #[case::empty_object(json!({}), ErrorCode::UnprocessableEntity)]
    #[case::unknown_keys_only(json!({"title": "x"}), ErrorCode::BadRequest)]
    #[case::non_string_question(
        json!({"question": 7, "answer": "A", "category": 1, "difficulty": 1}),
        ErrorCode::UnprocessableEntity
    )]
    #[case::missing_answer(
        json!({"question": "Q", "category": 1, "difficulty": 1}),
        ErrorCode::BadRequest
    )]
    #[case::null_category(
        json!({"question": "Q", "answer": "A", "category": null, "difficulty": 1}),
        ErrorCode::BadRequest
    )]
    #[case::bad_difficulty(
        json!({"question": "Q", "answer": "A", "category": 1, "difficulty": "hard"}),
        ErrorCode::BadRequest
    )]
    #[case::zero_difficulty(
        json!({"question": "Q", "answer": "A", "category": 1, "difficulty": 0}),
        ErrorCode::BadRequest
    )]
    fn create_rejections_map_to_codes(#[case] body: Value, #[case] expected: ErrorCode) {
        let err = parse_create_request(request(body)).expect_err("rejected");
        assert_eq!(err.code(), expected);
    }

    #[rstest]
    #[case(json!({"searchTerm": "Title"}), Some("Title"))]
    #[case(json!({"search_term": "title"}), Some("title"))]
    #[case(json!({"searchTerm": ""}), Some(""))]
    #[case(json!({}), None)]
    #[case(json!({"searchTerm": null}), None)]
    fn search_term_is_required(#[case] body: Value, #[case] expected: Option<&str>) {
        match (parse_search_request(request(body)), expected) {
            (Ok(term), Some(expected)) => assert_eq!(term, expected),
            (Err(err), None) => assert_eq!(err.code(), ErrorCode::UnprocessableEntity),
            (outcome, _) => panic!("unexpected outcome {outcome:?}"),
        }
    }
}
