//! Route guard: decides, from the current path and the presence of the
//! session cookie, whether a navigation may proceed or must redirect.
//!
//! The guard is pure; the app layer reads the cookie and the location,
//! asks for a decision, and performs the pushState.

/// Routes that require a session
const PROTECTED_ROUTES: &[&str] = &["/chat", "/conversations", "/profile"];

/// Auth screens that bounce an already-signed-in user to the chat
const AUTH_ROUTES: &[&str] = &["/login", "/signup"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Proceed to the requested path
    Allow,
    /// No session on a protected path; `target` carries the original
    /// path in its `redirect` query parameter
    RedirectToLogin { target: String },
    /// Already signed in on an auth screen
    RedirectToChat,
}

/// Evaluate a navigation against the session cookie.
pub fn guard(path: &str, has_session_cookie: bool) -> RouteDecision {
    let is_protected = PROTECTED_ROUTES.iter().any(|r| path.starts_with(r));
    if is_protected && !has_session_cookie {
        return RouteDecision::RedirectToLogin {
            target: format!("/login?redirect={}", encode_component(path)),
        };
    }

    if AUTH_ROUTES.contains(&path) && has_session_cookie {
        return RouteDecision::RedirectToChat;
    }

    RouteDecision::Allow
}

/// Pull the decoded `redirect` target out of a query string
/// (with or without the leading `?`).
pub fn redirect_target(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix("redirect=") {
            if !value.is_empty() {
                return Some(decode_component(value));
            }
        }
    }
    None
}

/// Percent-encode everything outside the URL-unreserved set.
/// Enough to round-trip a path through a query parameter.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Inverse of [`encode_component`]. Malformed escapes pass through verbatim.
pub fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (hex_val(bytes.get(i + 1)), hex_val(bytes.get(i + 2))) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: Option<&u8>) -> Option<u8> {
    match b {
        Some(b @ b'0'..=b'9') => Some(b - b'0'),
        Some(b @ b'a'..=b'f') => Some(b - b'a' + 10),
        Some(b @ b'A'..=b'F') => Some(b - b'A' + 10),
        _ => None,
    }
}
