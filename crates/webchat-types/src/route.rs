use serde::{Deserialize, Serialize};

/// The screens of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Home,
    Login,
    Signup,
    Chat,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Chat => "/chat",
        }
    }

    /// Resolve a browser path to a screen. Unknown paths land on Home.
    pub fn from_path(path: &str) -> Self {
        if path.starts_with("/login") {
            Route::Login
        } else if path.starts_with("/signup") {
            Route::Signup
        } else if path.starts_with("/chat") {
            Route::Chat
        } else {
            Route::Home
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Chat)
    }
}
