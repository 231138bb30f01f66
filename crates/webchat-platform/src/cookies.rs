//! Cookie adapter over `document.cookie`.
//!
//! The session cookie exists so the route guard can check for a session
//! before the app state is hydrated. It is not HttpOnly; the backend
//! authenticates with the Authorization header, not the cookie.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use webchat_core::ports::CookiePort;

pub struct BrowserCookies;

impl BrowserCookies {
    pub fn new() -> Self {
        Self
    }

    fn document() -> HtmlDocument {
        gloo_utils::document().unchecked_into::<HtmlDocument>()
    }
}

impl Default for BrowserCookies {
    fn default() -> Self {
        Self::new()
    }
}

impl CookiePort for BrowserCookies {
    fn get(&self, name: &str) -> Option<String> {
        let header = Self::document().cookie().ok()?;
        parse_cookie(&header, name)
    }

    fn set(&self, name: &str, value: &str, max_age_secs: i64) {
        let cookie = format!(
            "{}={}; path=/; max-age={}; SameSite=Lax",
            name, value, max_age_secs
        );
        if Self::document().set_cookie(&cookie).is_err() {
            log::warn!("failed to set cookie {}", name);
        }
    }

    fn clear(&self, name: &str) {
        let cookie = format!("{}=; path=/; max-age=0; SameSite=Lax", name);
        if Self::document().set_cookie(&cookie).is_err() {
            log::warn!("failed to clear cookie {}", name);
        }
    }
}

/// Find `name` in a `document.cookie` header (`a=1; b=2`).
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    for pair in header.split(';') {
        if let Some((k, v)) = pair.trim().split_once('=') {
            if k == name && !v.is_empty() {
                return Some(v.to_string());
            }
        }
    }
    None
}
