//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryTriviaStore;
use backend::outbound::persistence::{DieselCategoryRepository, DieselQuestionRepository};

use super::ServerConfig;

/// Build handler state over Diesel when a pool is configured, otherwise over
/// an in-memory store seeded with the default categories.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL question store");
            HttpState::from_repositories(
                Arc::new(DieselQuestionRepository::new(pool.clone())),
                Arc::new(DieselCategoryRepository::new(pool.clone())),
            )
        }
        None => {
            warn!("no database configured; questions are kept in memory");
            let store = Arc::new(InMemoryTriviaStore::with_default_categories());
            HttpState::from_repositories(store.clone(), store)
        }
    };
    web::Data::new(state)
}
