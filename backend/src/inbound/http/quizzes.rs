//! Quiz HTTP handler.
//!
//! ```text
//! POST /quizzes {"previous_questions": [1, 4], "quiz_category": {"id": 0, "type": "click"}}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, Question, QuestionId, QuizCategory, QuizRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, decode_object, lenient_int, missing_field_error,
};

/// Category selector sent by quiz clients.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct QuizCategoryBody {
    /// Category id, or `0` for every category.
    #[schema(value_type = Option<i32>, example = 0)]
    pub id: Option<Value>,
    /// Display label echoed by clients; ignored.
    #[serde(rename = "type")]
    #[schema(example = "click")]
    pub kind: Option<String>,
}

/// Request payload for `POST /quizzes`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct QuizRequestBody {
    /// Category to draw from; required.
    pub quiz_category: Option<QuizCategoryBody>,
    /// Ids already asked this round.
    #[schema(example = json!([1, 4]))]
    pub previous_questions: Option<Vec<i32>>,
}

/// Response body for `POST /quizzes`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    /// `true` for every successful response.
    pub success: bool,
    /// `null` once every eligible question has been asked.
    pub question: Option<Question>,
}

// Missing quiz fields answer 404 rather than 400; existing clients rely on it.
fn parse_quiz_request(body: Map<String, Value>) -> Result<QuizRequest, Error> {
    let payload: QuizRequestBody = decode_object(body, "quiz")?;
    let category = payload.quiz_category.ok_or_else(|| {
        missing_field_error(FieldName::new("quiz_category"), ErrorCode::NotFound)
    })?;
    let raw_id = lenient_int(category.id, FieldName::new("quiz_category.id"), ErrorCode::NotFound)?
        .ok_or_else(|| {
            missing_field_error(FieldName::new("quiz_category.id"), ErrorCode::NotFound)
        })?;
    let previous = payload.previous_questions.ok_or_else(|| {
        missing_field_error(FieldName::new("previous_questions"), ErrorCode::NotFound)
    })?;
    Ok(QuizRequest {
        category: QuizCategory::from_raw(raw_id),
        previous_questions: previous.into_iter().map(QuestionId::new).collect(),
    })
}

/// Draw the next unseen quiz question.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestBody,
    responses(
        (status = 200, description = "Next question, or null when exhausted", body = QuizResponse),
        (status = 404, description = "A quiz field is missing", body = ErrorEnvelope),
        (status = 422, description = "Body absent or unparseable", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["quizzes"],
    operation_id = "nextQuizQuestion"
)]
#[post("/quizzes")]
pub async fn next_quiz_question(
    state: web::Data<HttpState>,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<web::Json<QuizResponse>> {
    let request = parse_quiz_request(payload.into_inner())?;
    let question = state.quiz.next_question(&request).await?;
    Ok(web::Json(QuizResponse {
        success: true,
        question,
    }))
}
