//! HTTP client builder utilities

use crate::error::{ClientError, Result};
use crate::execution::http::headers::HttpHeaderBuilder;
use crate::types::HttpConfig;

/// Build an HTTP client from HttpConfig
///
/// Only the settings present in `config` are applied; everything else keeps
/// reqwest's defaults.
///
/// # Example
/// ```rust,ignore
/// use http_json_ext::types::HttpConfig;
/// use http_json_ext::execution::http::client::build_http_client_from_config;
///
/// let config = HttpConfig::default();
/// let client = build_http_client_from_config(&config)?;
/// ```
pub fn build_http_client_from_config(config: &HttpConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| ClientError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    if !config.headers.is_empty() {
        let headers = HttpHeaderBuilder::new()
            .with_custom_headers(&config.headers)?
            .build();
        builder = builder.default_headers(headers);
    }

    builder.build().map_err(|e| {
        ClientError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_build_http_client_default() {
        assert!(build_http_client_from_config(&HttpConfig::default()).is_ok());
    }

    #[test]
    fn test_build_http_client_with_timeouts_and_agent() {
        let config = HttpConfig::builder()
            .timeout(Some(Duration::from_secs(30)))
            .connect_timeout(Some(Duration::from_secs(10)))
            .user_agent(Some("test-agent/1.0"))
            .build();
        assert!(build_http_client_from_config(&config).is_ok());
    }

    #[test]
    fn test_build_http_client_rejects_bad_header() {
        let config = HttpConfig::builder().header("bad header", "v").build();
        let err = build_http_client_from_config(&config).unwrap_err();
        assert!(matches!(err, ClientError::ConfigurationError(_)));
    }
}
