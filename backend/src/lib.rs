//! Trivia question bank backend.
//!
//! Hexagonal layout: `domain` holds the services and ports, `inbound::http`
//! adapts them to actix-web, and `outbound` provides Diesel and in-memory
//! stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
pub use settings::TriviaSettings;
