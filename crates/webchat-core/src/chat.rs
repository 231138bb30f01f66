//! Conversation state and the send-message flow.
//!
//! Messages live in an in-memory ordered list for the lifetime of the
//! page; only the conversation id survives, cached in local storage so
//! a reload continues the same server-side thread.

use std::rc::Rc;

use webchat_types::chat::{HealthResponse, SendMessageRequest, SendMessageResponse};
use webchat_types::event::ChatEvent;
use webchat_types::message::ChatMessage;
use webchat_types::Result;

use crate::api::ApiClient;
use crate::event_bus::EventBus;
use crate::ports::{HttpPort, HttpRequest, KeyValuePort, Method};

/// Local-storage key for the cached conversation id
pub const CONVERSATION_ID_KEY: &str = "chat_conversation_id";

const HEALTH_TIMEOUT_MS: u64 = 5000;

pub struct ChatSession {
    api: Rc<ApiClient>,
    http: Rc<dyn HttpPort>,
    health_url: String,
    local_store: Rc<dyn KeyValuePort>,
    bus: EventBus,
    pub messages: Vec<ChatMessage>,
    pub conversation_id: Option<String>,
}

impl ChatSession {
    pub fn new(
        api: Rc<ApiClient>,
        http: Rc<dyn HttpPort>,
        health_url: String,
        local_store: Rc<dyn KeyValuePort>,
        bus: EventBus,
    ) -> Self {
        // Resume the cached conversation, if any
        let conversation_id = local_store.get(CONVERSATION_ID_KEY);
        if let Some(ref id) = conversation_id {
            log::info!("resuming conversation {}", id);
        }
        Self {
            api,
            http,
            health_url,
            local_store,
            bus,
            messages: Vec::new(),
            conversation_id,
        }
    }

    /// Send one message: optimistic append, POST, append the reply.
    ///
    /// On failure the optimistic user message is kept, an assistant-styled
    /// `Error:` entry is appended in place of the reply, and a transient
    /// error event is emitted for the banner.
    pub async fn send(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let user_message = ChatMessage::user(text);
        self.messages.push(user_message.clone());
        self.bus.emit(ChatEvent::UserMessageQueued {
            message: user_message,
        });

        let req = SendMessageRequest {
            message: text.to_string(),
            conversation_id: self.conversation_id.clone(),
        };

        match self.api.post::<_, SendMessageResponse>("/v1/chat", &req).await {
            Ok(resp) => {
                if self.conversation_id.as_deref() != Some(&resp.conversation_id) {
                    self.local_store.set(CONVERSATION_ID_KEY, &resp.conversation_id);
                    self.conversation_id = Some(resp.conversation_id.clone());
                }

                let reply =
                    ChatMessage::assistant(resp.response).with_tool_calls(resp.tool_calls);
                self.messages.push(reply.clone());
                self.bus.emit(ChatEvent::AssistantReplied { message: reply });
                Ok(())
            }
            Err(e) => {
                let message = e.message.clone();
                let entry = ChatMessage::assistant(format!("Error: {}", message));
                self.messages.push(entry.clone());
                self.bus.emit(ChatEvent::AssistantReplied { message: entry });
                self.bus.emit(ChatEvent::ChatError { message });
                Err(e)
            }
        }
    }

    /// Drop the thread and the cached conversation id.
    pub fn new_conversation(&mut self) {
        self.messages.clear();
        self.conversation_id = None;
        self.local_store.remove(CONVERSATION_ID_KEY);
        self.bus.emit(ChatEvent::ConversationCleared);
    }

    /// Unauthenticated health probe against the server origin. Any
    /// failure means "unhealthy"; this never surfaces an error.
    ///
    /// The returned future owns its handles, so a caller keeping the
    /// session in a `RefCell` can drop its borrow before awaiting.
    pub fn check_health(&self) -> impl std::future::Future<Output = bool> + 'static {
        let http = self.http.clone();
        let bus = self.bus.clone();
        let req = HttpRequest {
            method: Method::Get,
            url: self.health_url.clone(),
            headers: Vec::new(),
            body: None,
            timeout_ms: HEALTH_TIMEOUT_MS,
        };

        async move {
            let healthy = match http.send(req).await {
                Ok(resp) if resp.is_ok() => serde_json::from_str::<HealthResponse>(&resp.body)
                    .map(|h| h.is_healthy())
                    .unwrap_or(false),
                Ok(resp) => {
                    log::warn!("health probe returned HTTP {}", resp.status);
                    false
                }
                Err(e) => {
                    log::warn!("health probe failed: {}", e);
                    false
                }
            };

            bus.emit(ChatEvent::HealthChecked { healthy });
            healthy
        }
    }
}
