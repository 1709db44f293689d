//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns such
//! as tracing and cross-origin headers.

pub mod cors;
pub mod trace;

pub use cors::permissive_cors;
pub use trace::Trace;
