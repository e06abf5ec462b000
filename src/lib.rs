//! http-json-ext
//!
//! Convenience helpers over `reqwest` for JSON APIs: build POST/DELETE
//! requests with a JSON or pre-built body and an optional bearer token, send
//! them without buffering the body, and decode responses into typed results
//! that always carry the HTTP status.
//!
//! ```rust,ignore
//! use http_json_ext::prelude::*;
//!
//! let client = JsonClient::new(reqwest::Client::new(), JsonOptions::default());
//! let cancel = CancellationToken::new();
//! let created: BaseResponse = client
//!     .post_and_read_as("https://api.example.com/items", Some(&json!({"name": "x"})), Some("abc"), &cancel)
//!     .await?;
//! println!("status {}", created.status_code);
//! ```
#![deny(unsafe_code)]

pub mod error;
pub mod execution;
pub mod json;
pub mod types;
pub mod utils;

pub use error::{ClientError, Result};
pub use execution::http::{HttpBody, JsonClient, RawBody, read_response_as};
pub use json::{IgnoreCondition, JsonOptions, NamingPolicy};
pub use tokio_util::sync::CancellationToken;
pub use types::{ApiError, ApiResponse, ApiResult, BaseResponse, HttpConfig};
pub use utils::run_cancellable;

/// Common imports for callers.
pub mod prelude {
    pub use crate::error::{ClientError, Result};
    pub use crate::execution::http::{HttpBody, JsonClient, RawBody, read_response_as};
    pub use crate::json::{IgnoreCondition, JsonOptions, NamingPolicy};
    pub use crate::types::{ApiError, ApiResponse, ApiResult, BaseResponse, HttpConfig};
    pub use serde_json::json;
    pub use tokio_util::sync::CancellationToken;
}
