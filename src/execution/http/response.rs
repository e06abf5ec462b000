//! Typed response decoding
//!
//! A response is decoded as JSON only when its `Content-Type` is exactly
//! `application/json` (ASCII case-insensitive, parameters included in the
//! comparison) and is then read with the caller's `JsonOptions`. Anything else
//! yields `T::default()` with the raw body text in its error slot. The status
//! code is set on every successful return.

use crate::error::{ClientError, Result};
use crate::execution::http::headers::APPLICATION_JSON;
use crate::json::JsonOptions;
use crate::types::ApiResponse;
use crate::utils::run_cancellable;
use reqwest::Response;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use tokio_util::sync::CancellationToken;

/// Whether the headers declare an exact `application/json` body.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(APPLICATION_JSON))
}

/// Decode `response` into `T`, honoring `cancel` while the body is read.
pub async fn read_response_as<T: ApiResponse>(
    response: Response,
    options: &JsonOptions,
    cancel: &CancellationToken,
) -> Result<T> {
    run_cancellable(cancel, decode_response(response, options)).await
}

/// Read the whole body as text; a failed read is an error.
pub async fn read_response_text(response: Response, cancel: &CancellationToken) -> Result<String> {
    run_cancellable(cancel, async move {
        response.text().await.map_err(ClientError::ReadBody)
    })
    .await
}

async fn decode_response<T: ApiResponse>(response: Response, options: &JsonOptions) -> Result<T> {
    let status = response.status().as_u16();

    let mut result = if is_json_content_type(response.headers()) {
        let bytes = response.bytes().await.map_err(ClientError::ReadBody)?;
        options.from_slice::<T>(&bytes).map_err(|source| ClientError::Decode {
            type_name: std::any::type_name::<T>(),
            status,
            source,
        })?
    } else {
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("<none>")
            .to_string();
        let text = response.text().await.map_err(ClientError::ReadBody)?;
        tracing::debug!(
            status,
            content_type = %content_type,
            "non-JSON response; passing body through as error text"
        );
        let mut fallback = T::default();
        fallback.set_error_message(text);
        fallback
    };

    result.set_status_code(status);
    Ok(result)
}
