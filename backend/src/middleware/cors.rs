//! Permissive cross-origin headers applied to every response.

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// Headers browsers may send on cross-origin requests.
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Methods browsers may use on cross-origin requests.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, OPTIONS";

/// Build the header middleware that opens the API to any origin.
///
/// Headers already set by a handler are left untouched.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::middleware::permissive_cors;
///
/// let _app = App::new().wrap(permissive_cors());
/// ```
pub fn permissive_cors() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    #[rstest]
    #[case(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")]
    #[case(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS)]
    #[case(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS)]
    #[actix_web::test]
    async fn responses_carry_cors_headers(
        #[case] name: header::HeaderName,
        #[case] expected: &str,
    ) {
        let app = test::init_service(
            App::new()
                .wrap(permissive_cors())
                .route("/", web::get().to(|| async { HttpResponse::NotFound().finish() })),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let value = res
            .headers()
            .get(&name)
            .expect("cors header present")
            .to_str()
            .expect("ascii header");
        assert_eq!(value, expected);
    }
}
