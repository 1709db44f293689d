//! Category HTTP handlers.
//!
//! ```text
//! GET /categories
//! GET /categories/{id}/questions?page=N
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::CategoryQuestionsPage;
use crate::domain::{Category, CategoryId, CategoryMap, Question};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::page::PageQuery;
use crate::inbound::http::state::HttpState;

/// Response body for `GET /categories`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    /// `true` for every successful response.
    pub success: bool,
    /// Every category, keyed by id.
    pub categories: CategoryMap,
}

/// Response body for `GET /categories/{id}/questions`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    /// `true` for every successful response.
    pub success: bool,
    /// Questions on the requested page, ascending by id.
    pub questions: Vec<Question>,
    /// Questions in the category across all pages.
    pub total_questions: usize,
    /// Every category as `{id, type}` records.
    pub categories: Vec<Category>,
    /// Label of the requested category; `null` when it does not exist.
    #[schema(example = "Science")]
    pub current_category: Option<String>,
}

impl From<CategoryQuestionsPage> for CategoryQuestionsResponse {
    fn from(page: CategoryQuestionsPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            categories: page.categories,
            current_category: page.current_category,
        }
    }
}

/// List every category as an id to label map.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<CategoriesResponse>> {
    let categories = state.trivia.list_categories().await?;
    Ok(web::Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// Page through the questions filed under one category.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category identifier"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 404, description = "No questions on this page", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "listCategoryQuestions"
)]
#[get("/categories/{id}/questions")]
pub async fn category_questions(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<CategoryQuestionsResponse>> {
    let category = CategoryId::new(path.into_inner());
    let page = state
        .trivia
        .questions_by_category(category, query.page_number())
        .await?;
    Ok(web::Json(page.into()))
}
