//! Centralized HTTP client with retry logic, error classification,
//! and auth header injection.
//!
//! Every request goes through the same pipeline:
//! 1. attach `Content-Type: application/json` and, when a session token
//!    is present in session storage, `Authorization: Bearer <token>`;
//! 2. send via the [`HttpPort`] transport;
//! 3. classify non-2xx responses into an [`ApiError`];
//! 4. retry retryable failures with exponential backoff.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use webchat_types::config::RetryConfig;
use webchat_types::{ApiError, Result};

use crate::auth::SESSION_TOKEN_KEY;
use crate::ports::{ClockPort, HttpPort, HttpRequest, KeyValuePort, Method};

/// Per-request overrides for the retry budget and timeout.
#[derive(Debug, Clone, Copy)]
pub struct RequestOptions {
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    pub timeout_ms: u64,
}

impl From<RetryConfig> for RequestOptions {
    fn from(c: RetryConfig) -> Self {
        Self {
            max_retries: c.max_retries,
            retry_delay_ms: c.retry_delay_ms,
            timeout_ms: c.timeout_ms,
        }
    }
}

impl RequestOptions {
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

pub struct ApiClient {
    base_url: String,
    http: Rc<dyn HttpPort>,
    clock: Rc<dyn ClockPort>,
    session_store: Rc<dyn KeyValuePort>,
    defaults: RequestOptions,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        retry: RetryConfig,
        http: Rc<dyn HttpPort>,
        clock: Rc<dyn ClockPort>,
        session_store: Rc<dyn KeyValuePort>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            http,
            clock,
            session_store,
            defaults: retry.into(),
        }
    }

    pub fn default_options(&self) -> RequestOptions {
        self.defaults
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request(Method::Get, endpoint, None, self.defaults).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        self.post_with(endpoint, body, self.defaults).await
    }

    pub async fn post_with<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        opts: RequestOptions,
    ) -> Result<T> {
        let body = serde_json::to_string(body)?;
        self.request(Method::Post, endpoint, Some(body), opts).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_string(body)?;
        self.request(Method::Put, endpoint, Some(body), self.defaults)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request(Method::Delete, endpoint, None, self.defaults)
            .await
    }

    /// Core request method with the retry loop.
    ///
    /// Issues up to `max_retries + 1` attempts. Auth and validation
    /// errors short-circuit; everything else backs off with a doubling
    /// delay between attempts and surfaces the last error.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
        opts: RequestOptions,
    ) -> Result<T> {
        let mut last_error: Option<ApiError> = None;

        for attempt in 0..=opts.max_retries {
            match self
                .execute(method, endpoint, body.clone(), opts.timeout_ms)
                .await
            {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if !e.is_retryable() {
                        return Err(e);
                    }
                    if attempt == opts.max_retries {
                        return Err(e);
                    }

                    let delay = opts.retry_delay_ms * (1u64 << attempt);
                    log::debug!(
                        "retrying {} {} in {}ms (attempt {}/{}): {}",
                        method.as_str(),
                        endpoint,
                        delay,
                        attempt + 1,
                        opts.max_retries,
                        e
                    );
                    last_error = Some(e);
                    self.clock.sleep(delay).await;
                }
            }
        }

        // Unreachable: the loop always returns on the final attempt
        Err(last_error.unwrap_or_else(|| ApiError::network("request failed after retries")))
    }

    /// One attempt: build, send, classify, decode.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
        timeout_ms: u64,
    ) -> Result<T> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.session_store.get(SESSION_TOKEN_KEY) {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let req = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body,
            timeout_ms,
        };

        let resp = self.http.send(req).await?;
        if !resp.is_ok() {
            return Err(classify_response(resp.status, &resp.body));
        }

        Ok(serde_json::from_str(&resp.body)?)
    }
}

/// Turn an HTTP error response into an [`ApiError`], pulling the message
/// (and detail payload) out of a JSON error body when the server sent one.
pub fn classify_response(status: u16, body: &str) -> ApiError {
    let mut message = String::from("An error occurred");
    let mut details = None;

    if let Ok(error_body) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(m) = error_body
            .get("message")
            .or_else(|| error_body.get("error"))
            .and_then(|v| v.as_str())
        {
            message = m.to_string();
        }
        details = error_body.get("details").cloned();
    }

    ApiError::from_status(status, message, details)
}
