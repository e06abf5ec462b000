//! JSON client
//!
//! `JsonClient` pairs a `reqwest::Client` with an explicit `JsonOptions` and
//! exposes the request-building, dispatch and typed-decoding verbs. The options
//! shape outgoing models and are used again to read JSON responses. It holds no
//! mutable state; clones share the underlying connection pool.

use crate::error::{ClientError, Result};
use crate::execution::http::body::{HttpBody, RawBody};
use crate::execution::http::client::build_http_client_from_config;
use crate::execution::http::request::{build_request, prepare_request};
use crate::execution::http::response::{read_response_as, read_response_text};
use crate::json::JsonOptions;
use crate::types::{ApiResponse, HttpConfig};
use crate::utils::run_cancellable;
use reqwest::{Method, Request, Response};
use serde::Serialize;
use std::ops::Deref;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Default)]
pub struct JsonClient {
    http_client: reqwest::Client,
    json: JsonOptions,
}

impl Deref for JsonClient {
    type Target = reqwest::Client;
    fn deref(&self) -> &Self::Target {
        &self.http_client
    }
}

impl JsonClient {
    pub fn new(http_client: reqwest::Client, json: JsonOptions) -> Self {
        Self { http_client, json }
    }

    /// Build the transport from `config` and wrap it.
    pub fn from_config(config: &HttpConfig, json: JsonOptions) -> Result<Self> {
        Ok(Self::new(build_http_client_from_config(config)?, json))
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    pub fn json_options(&self) -> &JsonOptions {
        &self.json
    }

    /// Serialize `model` with the client's options into a JSON body.
    pub fn json_body<B: Serialize + ?Sized>(&self, model: &B) -> Result<HttpBody> {
        self.json.to_value(model).map(HttpBody::Json)
    }

    /// Build a new request for `url`.
    pub fn build_request(
        &self,
        method: Method,
        url: &str,
        body: Option<HttpBody>,
        token: Option<&str>,
    ) -> Result<Request> {
        build_request(&self.http_client, method, url, body, token)
    }

    /// Attach a body and token to a caller-provided request, keeping its headers.
    pub fn prepare_request(
        &self,
        request: Request,
        body: Option<HttpBody>,
        token: Option<&str>,
    ) -> Result<Request> {
        prepare_request(&self.http_client, request, body, token)
    }

    /// Send `request` and return as soon as the response headers are in.
    ///
    /// The body is left unread so the caller can stream it.
    pub async fn send(&self, request: Request, cancel: &CancellationToken) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "sending request");

        let response = run_cancellable(cancel, async {
            self.http_client
                .execute(request)
                .await
                .map_err(ClientError::Transport)
        })
        .await?;

        tracing::debug!(%method, %url, status = response.status().as_u16(), "response headers received");
        Ok(response)
    }

    /// POST `url` with an optional body and token; headers-only dispatch.
    pub async fn request_raw(
        &self,
        url: &str,
        body: Option<HttpBody>,
        token: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Response> {
        let request = self.build_request(Method::POST, url, body, token)?;
        self.send(request, cancel).await
    }

    /// Send a caller-provided request after attaching body and token.
    pub async fn request_raw_with(
        &self,
        request: Request,
        body: Option<HttpBody>,
        token: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Response> {
        let request = self.prepare_request(request, body, token)?;
        self.send(request, cancel).await
    }

    /// POST without a cancellation signal, using the transport's default behavior.
    pub async fn post_json(
        &self,
        url: &str,
        body: Option<HttpBody>,
        token: Option<&str>,
    ) -> Result<Response> {
        let request = self.build_request(Method::POST, url, body, token)?;
        Ok(self.http_client.execute(request).await?)
    }

    /// POST `model` as JSON and decode the response into `T`.
    pub async fn post_and_read_as<T, B>(
        &self,
        url: &str,
        model: Option<&B>,
        token: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<T>
    where
        T: ApiResponse,
        B: Serialize + ?Sized,
    {
        let body = model.map(|m| self.json_body(m)).transpose()?;
        let response = self.request_raw(url, body, token, cancel).await?;
        read_response_as(response, &self.json, cancel).await
    }

    /// POST pre-built content (e.g. a multipart upload) and decode into `T`.
    pub async fn post_file_and_read_as<T: ApiResponse>(
        &self,
        url: &str,
        content: RawBody,
        token: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<T> {
        let response = self
            .request_raw(url, Some(HttpBody::Raw(content)), token, cancel)
            .await?;
        read_response_as(response, &self.json, cancel).await
    }

    /// POST pre-built content and return the response body as text.
    pub async fn post_file_and_read_as_string(
        &self,
        url: &str,
        content: RawBody,
        token: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let response = self
            .request_raw(url, Some(HttpBody::Raw(content)), token, cancel)
            .await?;
        read_response_text(response, cancel).await
    }

    /// DELETE `url` and decode the response into `T`.
    pub async fn delete_and_read_as<T: ApiResponse>(
        &self,
        url: &str,
        token: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<T> {
        let request = self.build_request(Method::DELETE, url, None, token)?;
        let response = self.send(request, cancel).await?;
        read_response_as(response, &self.json, cancel).await
    }
}
