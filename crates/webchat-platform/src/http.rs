//! HTTP transport over the browser `fetch()` API via gloo-net.
//!
//! The transport returns `Ok` for every completed HTTP exchange, whatever
//! the status; `Err` is reserved for the network layer itself (connection
//! refused, DNS, timeout). Classification happens in the core.

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;

use webchat_core::ports::{HttpPort, HttpRequest, HttpResponse, Method};
use webchat_types::{ApiError, Result};

pub struct FetchHttp;

impl FetchHttp {
    pub fn new() -> Self {
        Self
    }

    async fn fetch(&self, req: &HttpRequest) -> Result<HttpResponse> {
        let mut builder: RequestBuilder = match req.method {
            Method::Get => Request::get(&req.url),
            Method::Post => Request::post(&req.url),
            Method::Put => Request::put(&req.url),
            Method::Delete => Request::delete(&req.url),
        };

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        let request = match &req.body {
            Some(body) => builder
                .body(body.clone())
                .map_err(|e| ApiError::network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::network(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}

impl Default for FetchHttp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl HttpPort for FetchHttp {
    /// Race the fetch against a deadline; a request that outlives its
    /// timeout becomes a retryable timeout error.
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse> {
        let timeout_ms = req.timeout_ms;
        let fetch = self.fetch(&req);
        let deadline = TimeoutFuture::new(timeout_ms as u32);

        futures::pin_mut!(fetch);
        futures::pin_mut!(deadline);

        match select(fetch, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ApiError::timeout(timeout_ms)),
        }
    }
}
