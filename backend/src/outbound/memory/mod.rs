//! In-process store adapters.
//!
//! Used by tests and by deployments started without a database URL.

mod in_memory_trivia_store;

pub use in_memory_trivia_store::InMemoryTriviaStore;
