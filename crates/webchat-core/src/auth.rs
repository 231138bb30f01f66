//! Authentication operations: login, signup, logout, session state.
//!
//! On success the session is written to three places at once: session
//! storage (read by the API client for header injection), the
//! `session_token` cookie (read by the route guard), and the in-memory
//! session handed to the UI through the event bus. There is no
//! reconciliation between them; any auth failure clears all three.

use std::rc::Rc;

use webchat_types::auth::{AuthResponse, LoginRequest, SignupRequest, UserSession};
use webchat_types::event::ChatEvent;
use webchat_types::Result;

use crate::api::ApiClient;
use crate::event_bus::EventBus;
use crate::ports::{CookiePort, KeyValuePort};

/// Session-storage keys
pub const SESSION_TOKEN_KEY: &str = "session_token";
pub const USER_ID_KEY: &str = "user_id";
pub const USER_EMAIL_KEY: &str = "user_email";
pub const EXPIRES_AT_KEY: &str = "expires_at";

/// Cookie read by the route guard
pub const SESSION_COOKIE: &str = "session_token";
pub const SESSION_COOKIE_MAX_AGE: i64 = 7 * 24 * 60 * 60;

pub struct AuthService {
    api: Rc<ApiClient>,
    store: Rc<dyn KeyValuePort>,
    cookies: Rc<dyn CookiePort>,
    bus: EventBus,
}

impl AuthService {
    pub fn new(
        api: Rc<ApiClient>,
        store: Rc<dyn KeyValuePort>,
        cookies: Rc<dyn CookiePort>,
        bus: EventBus,
    ) -> Self {
        Self {
            api,
            store,
            cookies,
            bus,
        }
    }

    /// Login with email and password. Auth requests get a single retry.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSession> {
        self.bus.emit(ChatEvent::AuthStarted);
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let opts = self.api.default_options().with_max_retries(1);
        let result: Result<AuthResponse> = self.api.post_with("/v1/auth/login", &req, opts).await;
        self.finish_auth(result)
    }

    /// Signup with email and password; auto-logs-in on success.
    pub async fn signup(&self, email: &str, password: &str) -> Result<UserSession> {
        self.bus.emit(ChatEvent::AuthStarted);
        let req = SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let opts = self.api.default_options().with_max_retries(1);
        let result: Result<AuthResponse> = self.api.post_with("/v1/auth/signup", &req, opts).await;
        self.finish_auth(result)
    }

    fn finish_auth(&self, result: Result<AuthResponse>) -> Result<UserSession> {
        match result {
            Ok(resp) => {
                let session = resp.into_session();
                self.persist(&session);
                log::info!("authenticated as {}", session.email);
                self.bus.emit(ChatEvent::AuthSucceeded {
                    session: session.clone(),
                });
                Ok(session)
            }
            Err(e) => {
                // A stale partial session must not survive a failed attempt
                self.clear_session();
                self.bus.emit(ChatEvent::AuthFailed {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Logout. The server call gets no retries and its failure is
    /// non-fatal; the client-side session is always cleared.
    pub async fn logout(&self) {
        let opts = self.api.default_options().with_max_retries(0);
        let result: Result<serde_json::Value> = self
            .api
            .post_with("/v1/auth/logout", &serde_json::json!({}), opts)
            .await;
        if let Err(e) = result {
            log::warn!("logout request failed, clearing session anyway: {}", e);
        }
        self.clear_session();
        self.bus.emit(ChatEvent::LoggedOut);
    }

    /// A token must be present and, when the stored expiry parses, it
    /// must be in the future. An expired session is cleared eagerly.
    pub fn is_authenticated(&self) -> bool {
        if self.store.get(SESSION_TOKEN_KEY).is_none() {
            return false;
        }
        if let Some(expires_at) = self.store.get(EXPIRES_AT_KEY) {
            if let Ok(expiry) = chrono::DateTime::parse_from_rfc3339(&expires_at) {
                if expiry < chrono::Utc::now() {
                    log::info!("session expired at {}, clearing", expires_at);
                    self.clear_session();
                    return false;
                }
            }
        }
        true
    }

    /// Rebuild the session from session storage, if one is present.
    pub fn current_session(&self) -> Option<UserSession> {
        let session_token = self.store.get(SESSION_TOKEN_KEY)?;
        let user_id = self.store.get(USER_ID_KEY)?;
        let email = self.store.get(USER_EMAIL_KEY)?;
        Some(UserSession {
            user_id,
            email,
            session_token,
            expires_at: self.store.get(EXPIRES_AT_KEY).unwrap_or_default(),
            is_authenticated: true,
        })
    }

    fn persist(&self, session: &UserSession) {
        self.store.set(SESSION_TOKEN_KEY, &session.session_token);
        self.store.set(USER_ID_KEY, &session.user_id);
        self.store.set(USER_EMAIL_KEY, &session.email);
        self.store.set(EXPIRES_AT_KEY, &session.expires_at);
        self.cookies
            .set(SESSION_COOKIE, &session.session_token, SESSION_COOKIE_MAX_AGE);
    }

    /// Clear every storage location.
    pub fn clear_session(&self) {
        self.store.remove(SESSION_TOKEN_KEY);
        self.store.remove(USER_ID_KEY);
        self.store.remove(USER_EMAIL_KEY);
        self.store.remove(EXPIRES_AT_KEY);
        self.cookies.clear(SESSION_COOKIE);
    }
}
