//! Driven port for read-only category lookups.

use async_trait::async_trait;

use crate::domain::{Category, CategoryId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by category repository adapters.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection => "category repository connection failed: {message}",
        /// Query failed during execution.
        Query => "category repository query failed: {message}",
    }
}

/// Read-only access to the seeded categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Return every category, ascending by id.
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// Fetch a category by identifier.
    async fn find_by_id(&self, id: CategoryId)
    -> Result<Option<Category>, CategoryRepositoryError>;
}
