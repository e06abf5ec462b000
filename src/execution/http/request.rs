//! Request construction
//!
//! Two entry points share one implementation:
//! - `build_request` creates a fresh request for a URL;
//! - `prepare_request` decorates a caller-provided request and never replaces
//!   a header the caller already set.

use crate::error::{ClientError, Result};
use crate::execution::http::body::{HttpBody, RawBody};
use crate::execution::http::headers::{HttpHeaderBuilder, apply_missing_headers};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Request, RequestBuilder, Url};

/// Build a new request for `url` with an optional body and bearer token.
pub fn build_request(
    client: &reqwest::Client,
    method: Method,
    url: &str,
    body: Option<HttpBody>,
    token: Option<&str>,
) -> Result<Request> {
    let parsed = Url::parse(url).map_err(|e| ClientError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    prepare_request(client, Request::new(method, parsed), body, token)
}

/// Attach a body and bearer token to an existing request.
///
/// Headers already present on `request` win over the ones derived here. A
/// multipart body on a request that already declares a `Content-Type` is
/// rejected, since the form boundary must appear in that header.
pub fn prepare_request(
    client: &reqwest::Client,
    mut request: Request,
    body: Option<HttpBody>,
    token: Option<&str>,
) -> Result<Request> {
    let kind = body.as_ref().map(HttpBody::kind).unwrap_or("none");
    let mut headers = HttpHeaderBuilder::new().with_bearer_auth(token)?;

    match body {
        None => {}
        Some(HttpBody::Json(value)) => {
            let bytes = serde_json::to_vec(&value).map_err(ClientError::Serialize)?;
            headers = headers.with_json_content_type();
            *request.body_mut() = Some(bytes.into());
        }
        Some(HttpBody::Raw(RawBody::Bytes {
            bytes,
            content_type,
        })) => {
            if let Some(content_type) = content_type {
                headers = headers.with_content_type(&content_type)?;
            }
            *request.body_mut() = Some(bytes.into());
        }
        Some(HttpBody::Raw(RawBody::Multipart(form))) => {
            if request.headers().contains_key(CONTENT_TYPE) {
                return Err(ClientError::ConfigurationError(
                    "request already sets Content-Type; cannot attach a multipart body".into(),
                ));
            }
            request = RequestBuilder::from_parts(client.clone(), request)
                .multipart(form)
                .build()?;
        }
    }

    let derived = headers.build();
    let with_auth = derived.contains_key(AUTHORIZATION);
    apply_missing_headers(request.headers_mut(), derived);

    tracing::trace!(
        method = %request.method(),
        url = %request.url(),
        body = kind,
        auth = with_auth,
        "request prepared"
    );
    Ok(request)
}
