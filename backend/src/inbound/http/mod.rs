//! HTTP inbound adapter exposing the trivia REST endpoints.

pub mod categories;
pub mod error;
pub mod health;
pub mod page;
pub mod questions;
pub mod quizzes;
pub mod state;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register extractor error handlers and every trivia route.
///
/// Callers still attach [`HttpState`](state::HttpState),
/// [`HealthState`](health::HealthState) and the
/// [`route_not_found`](error::route_not_found) default service.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::{configure, error::route_not_found};
///
/// let _app = App::new()
///     .configure(configure)
///     .default_service(web::to(route_not_found));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(categories::list_categories)
        .service(categories::category_questions)
        .service(questions::list_questions)
        .service(questions::search_questions)
        .service(questions::create_question)
        .service(questions::delete_question)
        .service(quizzes::next_quiz_question)
        .service(health::ready)
        .service(health::live);
}
