//! Configuration and result types.

pub mod http;
pub mod response;

pub use http::{HttpConfig, HttpConfigBuilder};
pub use response::{ApiError, ApiResponse, ApiResult, BaseResponse};
