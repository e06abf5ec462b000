//! Error Handling Module
//!
//! - Core error type (`ClientError`) and the crate `Result` alias
//! - `From` conversions for invalid header names and values
//!
//! # Example
//!
//! ```rust,ignore
//! use http_json_ext::error::ClientError;
//!
//! let error = ClientError::Cancelled;
//! assert!(error.is_cancelled());
//! assert_eq!(error.status_code(), None);
//! ```

mod conversions;
pub mod types;

pub use types::*;
