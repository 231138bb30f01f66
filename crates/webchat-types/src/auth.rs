use serde::{Deserialize, Serialize};

/// The client's record of an authenticated user.
///
/// Replicated across three places at once: in-memory UI state, tab-scoped
/// session storage, and the `session_token` cookie. There is no
/// reconciliation; logout (or any auth failure) clears all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: String,
    pub email: String,
    pub session_token: String,
    /// ISO 8601 timestamp
    pub expires_at: String,
    pub is_authenticated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: AuthUser,
    pub session_token: String,
    pub expires_at: String,
}

impl AuthResponse {
    pub fn into_session(self) -> UserSession {
        UserSession {
            user_id: self.user.user_id,
            email: self.user.email,
            session_token: self.session_token,
            expires_at: self.expires_at,
            is_authenticated: true,
        }
    }
}
