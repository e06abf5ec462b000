//! Type Conversions for ClientError
//!
//! `From` implementations for the header construction errors raised while
//! attaching authorization and content headers.

use super::types::ClientError;
use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};

impl From<InvalidHeaderValue> for ClientError {
    fn from(err: InvalidHeaderValue) -> Self {
        Self::ConfigurationError(format!("Invalid header value: {err}"))
    }
}

impl From<InvalidHeaderName> for ClientError {
    fn from(err: InvalidHeaderName) -> Self {
        Self::ConfigurationError(format!("Invalid header name: {err}"))
    }
}
