//! HTTP Utilities
//!
//! - Client construction from `HttpConfig`
//! - Header construction and merging that never overrides caller headers
//! - Request bodies and request construction
//! - Typed response decoding
//! - `JsonClient`, the verb-level entry point

pub mod body;
pub mod client;
pub mod headers;
pub mod json_client;
pub mod request;
pub mod response;

pub use body::{HttpBody, RawBody};
pub use client::build_http_client_from_config;
pub use headers::{APPLICATION_JSON, HttpHeaderBuilder, bearer_auth_value};
pub use json_client::JsonClient;
pub use request::{build_request, prepare_request};
pub use response::{is_json_content_type, read_response_as, read_response_text};
