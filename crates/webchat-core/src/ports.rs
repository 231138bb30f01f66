//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `webchat-core` (pure Rust).
//! Implementations live in `webchat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use webchat_types::Result;

// ─── HTTP Port ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully-assembled outgoing request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout_ms: u64,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A raw response. Non-2xx statuses come back as `Ok`; classification
/// into [`webchat_types::ApiError`] happens in the API client, not in
/// the transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait HttpPort {
    /// Perform one request. `Err` is reserved for transport failures
    /// (network down, timeout); HTTP-level errors are `Ok` with status.
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse>;
}

// ─── Clock Port ──────────────────────────────────────────────

#[async_trait(?Send)]
pub trait ClockPort {
    /// Resolve after `ms` milliseconds without blocking the UI thread
    async fn sleep(&self, ms: u64);
}

// ─── Key-Value Port ──────────────────────────────────────────

/// String key-value storage. Backed by session storage (tab-scoped),
/// local storage, or memory. Web Storage is synchronous, so this port
/// is too; adapters log and swallow quota failures.
pub trait KeyValuePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Cookie Port ─────────────────────────────────────────────

pub trait CookiePort {
    fn get(&self, name: &str) -> Option<String>;

    /// Set a cookie with path `/`, `SameSite=Lax` and the given max-age
    fn set(&self, name: &str, value: &str, max_age_secs: i64);

    /// Expire a cookie immediately
    fn clear(&self, name: &str);
}

// ─── Navigator Port ──────────────────────────────────────────

/// Browser location and History API.
pub trait NavigatorPort {
    /// Current pathname, e.g. `/chat`
    fn current_path(&self) -> String;

    /// Current query string including the leading `?`, or empty
    fn current_query(&self) -> String;

    /// pushState to a new path (optionally with a query string)
    fn push(&self, path_and_query: &str);
}
