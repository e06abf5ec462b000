//! Request headers
//!
//! `HttpHeaderBuilder` collects the headers a request derives from its token
//! and body; `apply_missing_headers` merges them into the request without
//! touching anything the caller already set.

use crate::error::{ClientError, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// Media type used for serialized request bodies.
pub const APPLICATION_JSON: &str = "application/json";

/// Build the `Authorization: Bearer <token>` value.
///
/// Returns `None` for an empty token so no header is sent at all. The value is
/// marked sensitive so it is redacted from `Debug` output.
pub fn bearer_auth_value(token: &str) -> Result<Option<HeaderValue>> {
    if token.is_empty() {
        return Ok(None);
    }
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|e| ClientError::ConfigurationError(format!("Invalid bearer token: {e}")))?;
    value.set_sensitive(true);
    Ok(Some(value))
}

/// Copy every header of `extra` whose name is not already present in `base`.
pub fn apply_missing_headers(base: &mut HeaderMap, extra: HeaderMap) {
    let mut current: Option<HeaderName> = None;
    for (name, value) in extra {
        // `HeaderMap::into_iter` yields `None` names for repeated values.
        if let Some(name) = name {
            current = if base.contains_key(&name) {
                None
            } else {
                Some(name)
            };
        }
        if let Some(name) = &current {
            base.append(name.clone(), value);
        }
    }
}

/// Collects request headers; later calls replace earlier values of the same name.
#[derive(Debug, Default)]
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bearer authorization; `None` and the empty token add nothing.
    pub fn with_bearer_auth(mut self, token: Option<&str>) -> Result<Self> {
        if let Some(value) = token.map(bearer_auth_value).transpose()?.flatten() {
            self.headers.insert(AUTHORIZATION, value);
        }
        Ok(self)
    }

    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        self
    }

    pub fn with_content_type(mut self, media_type: &str) -> Result<Self> {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_str(media_type)?);
        Ok(self)
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ClientError::ConfigurationError(format!("Invalid header name '{name}': {e}"))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            ClientError::ConfigurationError(format!("Invalid header value for '{name}': {e}"))
        })?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Add every entry of a configured header table.
    pub fn with_custom_headers(self, custom_headers: &HashMap<String, String>) -> Result<Self> {
        custom_headers
            .iter()
            .try_fold(self, |builder, (name, value)| builder.with_header(name, value))
    }

    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_auth_and_body_headers() {
        let headers = HttpHeaderBuilder::new()
            .with_bearer_auth(Some("test-token"))
            .unwrap()
            .with_json_content_type()
            .with_header("x-request-source", "tests")
            .unwrap()
            .build();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test-token");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get("x-request-source").unwrap(), "tests");
    }

    #[test]
    fn empty_token_adds_no_header() {
        assert!(bearer_auth_value("").unwrap().is_none());
        for token in [None, Some("")] {
            let headers = HttpHeaderBuilder::new().with_bearer_auth(token).unwrap().build();
            assert!(headers.get(AUTHORIZATION).is_none());
        }
    }

    #[test]
    fn bearer_value_is_sensitive() {
        let value = bearer_auth_value("abc").unwrap().unwrap();
        assert!(value.is_sensitive());
        assert_eq!(value, "Bearer abc");
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let err = bearer_auth_value("abc\ndef").unwrap_err();
        assert!(matches!(err, ClientError::ConfigurationError(_)));
    }

    #[test]
    fn bad_content_type_is_a_configuration_error() {
        let err = HttpHeaderBuilder::new()
            .with_content_type("text/plain\r\n")
            .unwrap_err();
        assert!(matches!(err, ClientError::ConfigurationError(_)));
    }

    #[test]
    fn custom_headers_reject_invalid_names() {
        let table = HashMap::from([("bad header".to_string(), "v".to_string())]);
        assert!(HttpHeaderBuilder::new().with_custom_headers(&table).is_err());
    }

    #[test]
    fn missing_headers_do_not_override_existing() {
        let mut base = HeaderMap::new();
        base.insert(AUTHORIZATION, HeaderValue::from_static("Basic xyz"));

        let mut extra = HeaderMap::new();
        extra.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        extra.append("x-tag", HeaderValue::from_static("a"));
        extra.append("x-tag", HeaderValue::from_static("b"));

        apply_missing_headers(&mut base, extra);

        assert_eq!(base.get(AUTHORIZATION).unwrap(), "Basic xyz");
        assert_eq!(base.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(base.get_all("x-tag").iter().count(), 2);
    }
}
