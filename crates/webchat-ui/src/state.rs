//! UI-level state that drives rendering.
//! A read-only projection of the core services, updated each frame by
//! draining the EventBus. The screens mutate only their own form fields.

use webchat_types::auth::UserSession;
use webchat_types::event::ChatEvent;
use webchat_types::message::ChatMessage;
use webchat_types::route::Route;

/// Transient error banners auto-dismiss after this many seconds
pub const ERROR_BANNER_SECS: f64 = 4.0;

/// Credentials form shared by the login and signup screens
#[derive(Default, Clone)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub confirm: String,
    /// Client-side validation error, shown inline
    pub error: Option<String>,
}

impl AuthForm {
    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
        self.confirm.clear();
        self.error = None;
    }
}

/// State visible to the screens
pub struct UiState {
    pub route: Route,
    pub session: Option<UserSession>,
    /// Displayed conversation thread
    pub messages: Vec<ChatMessage>,
    /// An auth request is in flight
    pub auth_busy: bool,
    /// A chat request is in flight
    pub chat_busy: bool,
    /// Transient error banner
    pub error: Option<String>,
    error_deadline: Option<f64>,
    pub login_form: AuthForm,
    pub signup_form: AuthForm,
    pub input_text: String,
    /// Last health probe result; None until the first probe completes
    pub backend_healthy: Option<bool>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            route: Route::Home,
            session: None,
            messages: Vec::new(),
            auth_busy: false,
            chat_busy: false,
            error: None,
            error_deadline: None,
            login_form: AuthForm::default(),
            signup_form: AuthForm::default(),
            input_text: String::new(),
            backend_healthy: None,
        }
    }

    /// Fold events from the EventBus into the projection.
    /// `now` is the frame time in seconds, used for banner deadlines.
    pub fn process_events(&mut self, events: Vec<ChatEvent>, now: f64) {
        for event in events {
            match event {
                ChatEvent::AuthStarted => {
                    self.auth_busy = true;
                }
                ChatEvent::AuthSucceeded { session } => {
                    self.auth_busy = false;
                    self.session = Some(session);
                    self.login_form.clear();
                    self.signup_form.clear();
                }
                ChatEvent::AuthFailed { message } => {
                    self.auth_busy = false;
                    self.set_error(message, now);
                }
                ChatEvent::LoggedOut => {
                    self.session = None;
                    self.messages.clear();
                    self.input_text.clear();
                }
                ChatEvent::UserMessageQueued { message } => {
                    self.chat_busy = true;
                    self.messages.push(message);
                }
                ChatEvent::AssistantReplied { message } => {
                    self.chat_busy = false;
                    self.messages.push(message);
                }
                ChatEvent::ChatError { message } => {
                    self.chat_busy = false;
                    self.set_error(message, now);
                }
                ChatEvent::ConversationCleared => {
                    self.messages.clear();
                }
                ChatEvent::NavigatedTo { route } => {
                    self.route = route;
                }
                ChatEvent::HealthChecked { healthy } => {
                    self.backend_healthy = Some(healthy);
                }
            }
        }
    }

    /// Show a transient error banner.
    pub fn set_error(&mut self, message: impl Into<String>, now: f64) {
        self.error = Some(message.into());
        self.error_deadline = Some(now + ERROR_BANNER_SECS);
    }

    /// Per-frame housekeeping: auto-dismiss an expired banner.
    pub fn tick(&mut self, now: f64) {
        if let Some(deadline) = self.error_deadline {
            if now >= deadline {
                self.error = None;
                self.error_deadline = None;
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
        self.error_deadline = None;
    }

    pub fn is_busy(&self) -> bool {
        self.auth_busy || self.chat_busy
    }

    /// Credential fields and submit are locked while an auth request
    /// is in flight.
    pub fn auth_inputs_enabled(&self) -> bool {
        !self.auth_busy
    }

    /// The message input row is locked while a send is in flight.
    pub fn chat_input_enabled(&self) -> bool {
        !self.chat_busy
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Form validation ─────────────────────────────────────────

/// Minimal shape check; the server does the real validation.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    validate_email(email)?;
    validate_password(password)?;
    Ok(())
}

pub fn validate_signup(email: &str, password: &str, confirm: &str) -> Result<(), String> {
    validate_email(email)?;
    validate_password(password)?;
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}
