//! Browser UI for the SQL injection lab.
//!
//! One page with a search box. Submitting a term runs the interpolated
//! search and the parameterized search against the same catalog and shows
//! both statements with their results, one panel above the other.
//!
//! ```text
//! GET /?q=<term>            HTML page with both panels
//! GET /api/search?q=<term>  the same comparison as JSON
//! GET /health               "ok"
//! ```
//!
//! Routing is plain functions over [`Request`] and [`Response`]; [`serve`]
//! adapts them to a hyper HTTP/1 connection loop.

pub mod comparison;
pub mod error;
pub mod request;
pub mod response;
pub mod routes;
pub mod server;
pub mod templates;

pub use comparison::{Comparison, QueryPanel};
pub use error::{Result, WebError};
pub use request::{Method, Request};
pub use response::Response;
pub use routes::App;
pub use server::{serve, serve_listener, ServerConfig, DEFAULT_BIND};
