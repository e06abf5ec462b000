//! Typed response shapes
//!
//! Every decode target implements [`ApiResponse`]: it can be built empty, can
//! receive the HTTP status, and can hold a raw error text. `BaseResponse` and
//! `ApiResult<T>` cover the common cases.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Capability set required by the response decoder.
pub trait ApiResponse: DeserializeOwned + Default {
    /// Record the HTTP status of the response this value was decoded from.
    fn set_status_code(&mut self, status: u16);

    /// Record a raw error text (used when the body is not JSON).
    fn set_error_message(&mut self, message: String);
}

/// Error payload carried by a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

impl ApiError {
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }
}

// Servers send either `"error": "text"` or `"error": {"message": ...}`.
impl<'de> Deserialize<'de> for ApiError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Detail {
            #[serde(default)]
            code: Option<serde_json::Value>,
            #[serde(default)]
            message: Option<String>,
            #[serde(default)]
            param: Option<String>,
            #[serde(default, rename = "type")]
            error_type: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Detail(Detail),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(message) => ApiError::from_message(message),
            Repr::Detail(d) => ApiError {
                code: d.code,
                message: d.message,
                param: d.param,
                error_type: d.error_type,
            },
        })
    }
}

/// Minimal response: object tag, optional error and the HTTP status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(skip)]
    pub status_code: u16,
}

impl BaseResponse {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().and_then(|e| e.message.as_deref())
    }
}

impl ApiResponse for BaseResponse {
    fn set_status_code(&mut self, status: u16) {
        self.status_code = status;
    }

    fn set_error_message(&mut self, message: String) {
        self.error = Some(ApiError::from_message(message));
    }
}

/// A payload of type `T` plus the status and error slots.
///
/// `data` is flattened, so `{"id": 1, "error": null}` decodes into
/// `ApiResult { data: Item { id: 1 }, error: None, .. }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResult<T> {
    #[serde(skip)]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResult<T> {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().and_then(|e| e.message.as_deref())
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: DeserializeOwned + Default> ApiResponse for ApiResult<T> {
    fn set_status_code(&mut self, status: u16) {
        self.status_code = status;
    }

    fn set_error_message(&mut self, message: String) {
        self.error = Some(ApiError::from_message(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
    struct Gone {
        status: u16,
        message: String,
    }

    #[test]
    fn error_accepts_string_or_object() {
        let r: BaseResponse = serde_json::from_value(json!({"error": "boom"})).unwrap();
        assert_eq!(r.error_message(), Some("boom"));

        let r: BaseResponse = serde_json::from_value(json!({
            "error": {"message": "bad key", "type": "auth", "code": 401}
        }))
        .unwrap();
        let err = r.error.unwrap();
        assert_eq!(err.error_type.as_deref(), Some("auth"));
        assert_eq!(err.code, Some(json!(401)));
    }

    #[test]
    fn api_result_flattens_payload() {
        let r: ApiResult<Gone> =
            serde_json::from_value(json!({"status": 404, "message": "gone"})).unwrap();
        assert_eq!(r.data.status, 404);
        assert_eq!(r.data.message, "gone");
        assert!(r.is_success());
        assert_eq!(r.status_code, 0);
    }

    #[test]
    fn setters_fill_slots() {
        let mut r = ApiResult::<Gone>::default();
        r.set_status_code(502);
        r.set_error_message("upstream down".into());
        assert_eq!(r.status_code, 502);
        assert_eq!(r.error_message(), Some("upstream down"));
        assert!(!r.is_success());
    }
}
