//! End-to-end HTTP tests for the trivia routes over the in-memory store.

#[path = "support/trivia_http.rs"]
mod trivia_http;

use actix_web::http::{Method, StatusCode, header};
use actix_web::test::TestRequest;
use backend::domain::TRACE_ID_HEADER;
use backend::middleware::cors::{ALLOWED_HEADERS, ALLOWED_METHODS};
use backend::outbound::memory::InMemoryTriviaStore;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;
use trivia_http::{seeded_store, send};

fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().expect("numeric id"))
        .collect()
}

fn assert_envelope(body: &Value, status: u16, message: &str) {
    assert_eq!(
        body,
        &json!({ "success": false, "error": status, "message": message })
    );
}

#[actix_web::test]
async fn categories_are_keyed_by_id() {
    let res = send(seeded_store(0), TestRequest::get().uri("/categories")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({ "success": true, "categories": { "1": "Science", "2": "Art" } })
    );
}

#[actix_web::test]
async fn empty_category_table_is_an_empty_map() {
    let store = Arc::new(InMemoryTriviaStore::new());
    let res = send(store, TestRequest::get().uri("/categories")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "success": true, "categories": {} }));
}

#[rstest]
#[case("/questions", (1..=10).collect())]
#[case("/questions?page=2", (11..=12).collect())]
#[case("/questions?page=abc", (1..=10).collect())]
#[actix_web::test]
async fn questions_are_paged(#[case] uri: &str, #[case] expected: Vec<i64>) {
    let res = send(seeded_store(12), TestRequest::get().uri(uri)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(ids(&res.body), expected);
    assert_eq!(res.body["success"], true);
    assert_eq!(res.body["total_questions"], 12);
    assert_eq!(res.body["categories"], json!({ "1": "Science", "2": "Art" }));
    assert_eq!(res.body["current_category"], Value::Null);
}

#[rstest]
#[case("/questions?page=3")]
#[case("/questions?page=0")]
#[case("/questions?page=-1")]
#[actix_web::test]
async fn pages_out_of_range_are_not_found(#[case] uri: &str) {
    let res = send(seeded_store(12), TestRequest::get().uri(uri)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_envelope(&res.body, 404, "Source not found");
}

#[actix_web::test]
async fn category_questions_report_category_label() {
    let res = send(
        seeded_store(12),
        TestRequest::get().uri("/categories/1/questions"),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(ids(&res.body), vec![1, 3, 5, 7, 9, 11]);
    assert_eq!(res.body["total_questions"], 6);
    assert_eq!(res.body["current_category"], "Science");
    assert_eq!(
        res.body["categories"],
        json!([{ "id": 1, "type": "Science" }, { "id": 2, "type": "Art" }])
    );
}

#[rstest]
#[case("/categories/9/questions")]
#[case("/categories/abc/questions")]
#[actix_web::test]
async fn unknown_or_malformed_category_is_not_found(#[case] uri: &str) {
    let res = send(seeded_store(12), TestRequest::get().uri(uri)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_envelope(&res.body, 404, "Source not found");
}

#[actix_web::test]
async fn create_returns_created_question_and_total() {
    let store = seeded_store(3);
    let res = send(
        store.clone(),
        TestRequest::post().uri("/questions").set_json(json!({
            "question": "Which planet is known as the red planet?",
            "answer": "Mars",
            "category": "1",
            "difficulty": 2,
        })),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(
        res.body,
        json!({
            "success": true,
            "id": 4,
            "question": "Which planet is known as the red planet?",
            "answer": "Mars",
            "category": 1,
            "difficulty": 2,
            "total_questions": 4,
        })
    );

    let listed = send(
        store.clone(),
        TestRequest::get().uri("/categories/1/questions"),
    )
    .await;
    assert_eq!(ids(&listed.body).last(), Some(&4));

    let last_page = send(store, TestRequest::get().uri("/questions?page=1")).await;
    assert_eq!(ids(&last_page.body), vec![1, 2, 3, 4]);
    assert_eq!(last_page.body["total_questions"], 4);
}

#[actix_web::test]
async fn created_question_lands_last_on_final_page() {
    let store = seeded_store(10);
    let before = send(store.clone(), TestRequest::get().uri("/questions")).await;
    let res = send(
        store.clone(),
        TestRequest::post().uri("/questions").set_json(json!({
            "question": "What is the capital of Peru?",
            "answer": "Lima",
            "category": 2,
            "difficulty": "1",
        })),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["id"], 11);
    assert_eq!(
        res.body["total_questions"].as_i64(),
        before.body["total_questions"].as_i64().map(|n| n + 1)
    );

    let page_two = send(store, TestRequest::get().uri("/questions?page=2")).await;
    assert_eq!(ids(&page_two.body), vec![11]);
    assert_eq!(page_two.body["total_questions"], 11);
}

#[rstest]
#[case::missing_answer(json!({"question": "Q", "category": 1, "difficulty": 1}), 400, "Bad request")]
#[case::null_difficulty(
    json!({"question": "Q", "answer": "A", "category": 1, "difficulty": null}),
    400,
    "Bad request"
)]
#[case::unknown_keys_only(json!({"title": "x"}), 400, "Bad request")]
#[case::empty_object(json!({}), 422, "Unprocessable")]
#[case::not_an_object(json!([1, 2]), 422, "Unprocessable")]
#[actix_web::test]
async fn create_rejections_use_envelope(
    #[case] body: Value,
    #[case] status: u16,
    #[case] message: &str,
) {
    let store = seeded_store(3);
    let res = send(
        store.clone(),
        TestRequest::post().uri("/questions").set_json(body),
    )
    .await;
    assert_eq!(res.status.as_u16(), status);
    assert_envelope(&res.body, status, message);
    assert_eq!(store.question_count(), 3);
}

#[actix_web::test]
async fn create_without_body_is_unprocessable() {
    let res = send(seeded_store(0), TestRequest::post().uri("/questions")).await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_envelope(&res.body, 422, "Unprocessable");
}

#[actix_web::test]
async fn delete_removes_question() {
    let store = seeded_store(3);
    let res = send(store.clone(), TestRequest::delete().uri("/questions/2")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({ "success": true, "deleted_id": 2, "total_questions": 2 })
    );
    assert_eq!(store.question_count(), 2);
}

#[rstest]
#[case("/questions/99")]
#[case("/questions/abc")]
#[actix_web::test]
async fn delete_unknown_id_leaves_store_unchanged(#[case] uri: &str) {
    let store = seeded_store(3);
    let res = send(store.clone(), TestRequest::delete().uri(uri)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_envelope(&res.body, 404, "Source not found");
    assert_eq!(store.question_count(), 3);
}

#[actix_web::test]
async fn search_is_case_insensitive_and_counts_the_page() {
    let res = send(
        seeded_store(12),
        TestRequest::post()
            .uri("/questions/search")
            .set_json(json!({ "searchTerm": "QUESTION 1" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(ids(&res.body), vec![1, 10, 11, 12]);
    assert_eq!(res.body["total_results"], 4);
    assert_eq!(res.body["current_category"], Value::Null);
}

#[actix_web::test]
async fn search_total_is_page_length_not_match_count() {
    let res = send(
        seeded_store(12),
        TestRequest::post()
            .uri("/questions/search?page=2")
            .set_json(json!({ "searchTerm": "question" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(ids(&res.body), vec![11, 12]);
    assert_eq!(res.body["total_results"], 2);
}

#[rstest]
#[case(json!({ "searchTerm": "xyz-no-match" }), 404, "Source not found")]
#[case(json!({}), 422, "Unprocessable")]
#[actix_web::test]
async fn search_failures_use_envelope(
    #[case] body: Value,
    #[case] status: u16,
    #[case] message: &str,
) {
    let res = send(
        seeded_store(12),
        TestRequest::post().uri("/questions/search").set_json(body),
    )
    .await;
    assert_eq!(res.status.as_u16(), status);
    assert_envelope(&res.body, status, message);
}

#[actix_web::test]
async fn quiz_returns_unseen_question_from_category() {
    let res = send(
        seeded_store(4),
        TestRequest::post().uri("/quizzes").set_json(json!({
            "previous_questions": [1],
            "quiz_category": { "id": 1, "type": "Science" },
        })),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["success"], true);
    assert_eq!(res.body["question"]["id"], 3);
}

#[actix_web::test]
async fn quiz_returns_null_once_exhausted() {
    let res = send(
        seeded_store(3),
        TestRequest::post().uri("/quizzes").set_json(json!({
            "previous_questions": [1, 2, 3],
            "quiz_category": { "id": 0 },
        })),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "success": true, "question": null }));
}

#[rstest]
#[case(json!({ "previous_questions": [] }), 404, "Source not found")]
#[case(json!({ "quiz_category": { "id": 1 } }), 404, "Source not found")]
#[case(json!({ "category": 1 }), 404, "Source not found")]
#[case(json!({}), 422, "Unprocessable")]
#[case(json!({ "previous_questions": ["x"], "quiz_category": { "id": 1 } }), 422, "Unprocessable")]
#[actix_web::test]
async fn quiz_rejections_use_envelope(
    #[case] body: Value,
    #[case] status: u16,
    #[case] message: &str,
) {
    let res = send(
        seeded_store(3),
        TestRequest::post().uri("/quizzes").set_json(body),
    )
    .await;
    assert_eq!(res.status.as_u16(), status);
    assert_envelope(&res.body, status, message);
}

#[rstest]
#[case(TestRequest::get().uri("/questions"))]
#[case(TestRequest::get().uri("/categories"))]
#[case(TestRequest::post().uri("/quizzes").set_json(
    json!({ "previous_questions": [], "quiz_category": { "id": 0 } })
))]
#[case(TestRequest::post().uri("/questions/search").set_json(json!({ "searchTerm": "" })))]
#[actix_web::test]
async fn store_faults_are_redacted(#[case] request: TestRequest) {
    let store = seeded_store(3);
    store.set_unavailable(true);
    let res = send(store, request).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_envelope(&res.body, 500, "Internal Server Error");
    assert!(res.headers.contains_key(TRACE_ID_HEADER));
}

#[actix_web::test]
async fn unknown_route_uses_envelope() {
    let res = send(seeded_store(0), TestRequest::get().uri("/nowhere")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_envelope(&res.body, 404, "Source not found");
}

#[rstest]
#[case(Method::GET, "/questions")]
#[case(Method::GET, "/nowhere")]
#[case(Method::DELETE, "/questions/42")]
#[actix_web::test]
async fn every_response_carries_cors_headers(#[case] method: Method, #[case] uri: &str) {
    let res = send(
        seeded_store(3),
        TestRequest::default().method(method).uri(uri),
    )
    .await;
    let value_of = |name: header::HeaderName| {
        res.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    assert_eq!(
        value_of(header::ACCESS_CONTROL_ALLOW_ORIGIN).as_deref(),
        Some("*")
    );
    assert_eq!(
        value_of(header::ACCESS_CONTROL_ALLOW_HEADERS).as_deref(),
        Some(ALLOWED_HEADERS)
    );
    assert_eq!(
        value_of(header::ACCESS_CONTROL_ALLOW_METHODS).as_deref(),
        Some(ALLOWED_METHODS)
    );
}

#[rstest]
#[case("/questions")]
#[case("/questions/3")]
#[case("/quizzes")]
#[actix_web::test]
async fn preflight_is_answered_with_cors_headers(#[case] uri: &str) {
    let res = send(
        seeded_store(3),
        TestRequest::default()
            .method(Method::OPTIONS)
            .uri(uri)
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST")),
    )
    .await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert_eq!(res.body, Value::Null);
    assert_eq!(
        res.headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .and_then(|value| value.to_str().ok()),
        Some(ALLOWED_METHODS)
    );
    assert_eq!(
        res.headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[actix_web::test]
async fn readiness_probe_answers_before_server_start() {
    let res = send(seeded_store(0), TestRequest::get().uri("/health/ready")).await;
    assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
    let live = send(seeded_store(0), TestRequest::get().uri("/health/live")).await;
    assert_eq!(live.status, StatusCode::OK);
}
