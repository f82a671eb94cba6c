//! HTTP surface for the Sidera content service.
//!
//! Routes, query parsing, and the admin dashboard live here as pure
//! functions over plain values; the binary owns the listener. The content
//! core is O(1) and side-effect-free, so a single blocking accept loop is
//! the whole concurrency story.

pub mod admin;
pub mod query;
pub mod response;
pub mod routes;

pub use query::{query_param, split_url};
pub use response::ApiResponse;
pub use routes::dispatch;
