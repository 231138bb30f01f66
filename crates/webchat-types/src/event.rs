use serde::{Deserialize, Serialize};
use crate::auth::UserSession;
use crate::message::ChatMessage;
use crate::route::Route;

/// Events emitted by the core services.
/// The UI drains these each frame and updates its projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A login or signup request is in flight
    AuthStarted,

    /// Login or signup succeeded and the session was persisted
    AuthSucceeded { session: UserSession },

    /// Login or signup failed; every storage location was cleared
    AuthFailed { message: String },

    /// The session was cleared (explicit logout or eager expiry)
    LoggedOut,

    /// A user message was appended optimistically before the request
    UserMessageQueued { message: ChatMessage },

    /// The backend replied (or an error entry was appended in its place)
    AssistantReplied { message: ChatMessage },

    /// A chat request failed; shown transiently, auto-dismissed
    ChatError { message: String },

    /// The conversation thread and cached conversation id were cleared
    ConversationCleared,

    /// The app navigated to another screen
    NavigatedTo { route: Route },

    /// Result of the startup health probe
    HealthChecked { healthy: bool },
}
