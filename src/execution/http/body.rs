//! Request body variants
//!
//! A payload is either pre-built content passed through untouched (`Raw`) or a
//! JSON tree (`Json`). Typed models become a tree through
//! [`crate::JsonClient::json_body`], which applies the client's `JsonOptions`.

use bytes::Bytes;

/// HTTP request body type
#[derive(Debug)]
pub enum HttpBody {
    /// Tree written as `application/json` exactly as given
    Json(serde_json::Value),
    /// Pre-built content attached unchanged
    Raw(RawBody),
}

impl HttpBody {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Raw(RawBody::Bytes { .. }) => "bytes",
            Self::Raw(RawBody::Multipart(_)) => "multipart",
        }
    }
}

/// Pre-built request content.
#[derive(Debug)]
pub enum RawBody {
    /// Opaque bytes with an optional media type
    Bytes {
        bytes: Bytes,
        content_type: Option<String>,
    },
    /// Multipart form body (sets its own boundary content type)
    Multipart(reqwest::multipart::Form),
}

impl RawBody {
    pub fn bytes(bytes: impl Into<Bytes>, content_type: Option<&str>) -> Self {
        Self::Bytes {
            bytes: bytes.into(),
            content_type: content_type.map(str::to_string),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::bytes(text.into(), Some("text/plain; charset=utf-8"))
    }

    pub fn multipart(form: reqwest::multipart::Form) -> Self {
        Self::Multipart(form)
    }
}

impl From<RawBody> for HttpBody {
    fn from(raw: RawBody) -> Self {
        Self::Raw(raw)
    }
}

impl From<reqwest::multipart::Form> for HttpBody {
    fn from(form: reqwest::multipart::Form) -> Self {
        Self::Raw(RawBody::Multipart(form))
    }
}

impl From<serde_json::Value> for HttpBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}
