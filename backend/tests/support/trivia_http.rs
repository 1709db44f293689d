//! Shared helpers driving the trivia app through `actix_web::test`.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::HeaderMap;
use actix_web::{App, test, web};
use backend::Trace;
use backend::domain::{Category, CategoryId, Difficulty, NewQuestion};
use backend::inbound::http::configure;
use backend::inbound::http::error::route_not_found;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::middleware::permissive_cors;
use backend::outbound::memory::InMemoryTriviaStore;
use serde_json::Value;

/// Status, headers, and decoded JSON body of one response.
pub(crate) struct JsonResponse {
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Value,
}

/// Build a question for seeding.
pub(crate) fn new_question(text: &str, category: i32, difficulty: i32) -> NewQuestion {
    NewQuestion::new(
        text,
        format!("answer to {text}"),
        CategoryId::new(category),
        Difficulty::new(difficulty).expect("valid difficulty"),
    )
    .expect("valid question")
}

/// Store with `{1: Science, 2: Art}` and `count` questions alternating
/// between the two categories, starting with category 1.
pub(crate) fn seeded_store(count: i32) -> Arc<InMemoryTriviaStore> {
    let categories = [
        Category::new(CategoryId::new(1), "Science"),
        Category::new(CategoryId::new(2), "Art"),
    ];
    let questions =
        (1..=count).map(|n| new_question(&format!("Question {n}"), 2 - (n % 2), 1 + n % 5));
    Arc::new(InMemoryTriviaStore::with_categories(categories).with_questions(questions))
}

/// Send `request` to a fresh app over `store` and decode the body.
pub(crate) async fn send(
    store: Arc<InMemoryTriviaStore>,
    request: test::TestRequest,
) -> JsonResponse {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::from_repositories(
                store.clone(),
                store,
            )))
            .app_data(web::Data::new(HealthState::new()))
            .wrap(permissive_cors())
            .wrap(Trace)
            .configure(configure)
            .default_service(web::to(route_not_found)),
    )
    .await;
    let res = test::call_service(&app, request.to_request()).await;
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    JsonResponse {
        status,
        headers,
        body,
    }
}
