//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while turning every
//! failure, including extractor rejections and unknown routes, into the
//! fixed `{"success": false, "error": <status>, "message": <text>}` envelope.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::{Method, StatusCode};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Failure body returned for every error status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false`.
    #[schema(example = false)]
    pub success: bool,
    /// HTTP status code, repeated in the body.
    #[schema(example = 404)]
    pub error: u16,
    /// Fixed public message for the status.
    #[schema(example = "Source not found")]
    pub message: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
        ErrorCode::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Public message for a status; internal detail never reaches clients.
pub fn public_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad request",
        StatusCode::NOT_FOUND => "Source not found",
        StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable",
        _ => "Internal Server Error",
    }
}

impl ErrorEnvelope {
    /// Build the envelope for `status`.
    pub fn for_status(status: StatusCode) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: public_message(status).to_owned(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let trace_id = self.trace_id().unwrap_or_default();
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(trace_id, message = self.message(), "request failed");
        } else {
            debug!(
                trace_id,
                code = self.code().as_str(),
                message = self.message(),
                "request rejected"
            );
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorEnvelope::for_status(status))
    }
}

/// Route JSON body rejections (missing, malformed, wrong content type) to
/// the 422 envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::unprocessable(format!("request body rejected: {err}")).into()
}

/// Route unparseable path segments, such as a non-numeric id, to 404.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::not_found(format!("path rejected: {err}")).into()
}

/// Route malformed query strings to the 422 envelope.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::unprocessable(format!("query string rejected: {err}")).into()
}

/// Fallback for requests matching no route.
///
/// `OPTIONS` requests are CORS preflights and get an empty 204; the allow
/// headers come from the wrapping CORS middleware.
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    if req.method() == Method::OPTIONS {
        return Ok(HttpResponse::NoContent().finish());
    }
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}
