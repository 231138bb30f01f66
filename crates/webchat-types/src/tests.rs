#[cfg(test)]
mod tests {
    use crate::auth::*;
    use crate::chat::*;
    use crate::config::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::route::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = ChatMessage::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert!(msg.id.starts_with("user-"));
        assert!(msg.tool_calls.is_empty());
        assert!(!msg.timestamp.is_empty());
    }

    #[test]
    fn test_message_assistant() {
        let msg = ChatMessage::assistant("I can help");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "I can help");
        assert!(msg.id.starts_with("assistant-"));
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::user("one");
        let b = ChatMessage::user("two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_message_with_tool_calls() {
        let msg = ChatMessage::assistant("Done").with_tool_calls(vec![ToolCall {
            tool_name: "add_task".to_string(),
            parameters: serde_json::json!({"title": "buy milk"}),
            result: Some(serde_json::json!({"task_id": 7})),
        }]);
        assert_eq!(msg.tool_calls.len(), 1);
        assert_eq!(msg.tool_calls[0].tool_name, "add_task");
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, r#""user""#);

        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, r#""assistant""#);
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = ChatMessage::user("test input");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.role, Role::User);
        assert_eq!(deserialized.content, "test input");
    }

    #[test]
    fn test_message_empty_tool_calls_skipped() {
        let msg = ChatMessage::assistant("plain");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("tool_calls"));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_from_status_mapping() {
        let cases = [
            (401, ApiErrorCode::Unauthorized),
            (403, ApiErrorCode::Forbidden),
            (404, ApiErrorCode::NotFound),
            (400, ApiErrorCode::ValidationError),
            (500, ApiErrorCode::ServerError),
            (502, ApiErrorCode::ServerError),
            (503, ApiErrorCode::ServerError),
            (504, ApiErrorCode::ServerError),
            (418, ApiErrorCode::NetworkError),
            (302, ApiErrorCode::NetworkError),
        ];
        for (status, code) in cases {
            let err = ApiError::from_status(status, "boom", None);
            assert_eq!(err.code, code, "status {}", status);
        }
    }

    #[test]
    fn test_error_retryability() {
        assert!(!ApiError::from_status(401, "", None).is_retryable());
        assert!(!ApiError::from_status(403, "", None).is_retryable());
        assert!(!ApiError::from_status(400, "", None).is_retryable());
        assert!(ApiError::from_status(404, "", None).is_retryable());
        assert!(ApiError::from_status(500, "", None).is_retryable());
        assert!(ApiError::network("offline").is_retryable());
        assert!(ApiError::timeout(30_000).is_retryable());
    }

    #[test]
    fn test_error_display_includes_code_and_message() {
        let err = ApiError::from_status(500, "upstream exploded", None);
        let text = err.to_string();
        assert!(text.contains("SERVER_ERROR"));
        assert!(text.contains("upstream exploded"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ApiErrorCode::NetworkError).unwrap();
        assert_eq!(json, r#""NETWORK_ERROR""#);
        let json = serde_json::to_string(&ApiErrorCode::ValidationError).unwrap();
        assert_eq!(json, r#""VALIDATION_ERROR""#);
    }

    #[test]
    fn test_error_carries_details() {
        let details = serde_json::json!({"field": "email"});
        let err = ApiError::from_status(400, "invalid", Some(details.clone()));
        assert_eq!(err.details, Some(details));
    }

    #[test]
    fn test_error_from_serde() {
        let parse_err = serde_json::from_str::<SendMessageResponse>("not json").unwrap_err();
        let err: ApiError = parse_err.into();
        assert_eq!(err.code, ApiErrorCode::NetworkError);
    }

    // ─── Auth Tests ──────────────────────────────────────────

    #[test]
    fn test_auth_response_into_session() {
        let resp = AuthResponse {
            user: AuthUser {
                user_id: "u1".to_string(),
                email: "a@b.c".to_string(),
            },
            session_token: "tok".to_string(),
            expires_at: "2099-01-01T00:00:00Z".to_string(),
        };
        let session = resp.into_session();
        assert_eq!(session.user_id, "u1");
        assert_eq!(session.email, "a@b.c");
        assert_eq!(session.session_token, "tok");
        assert!(session.is_authenticated);
    }

    #[test]
    fn test_auth_response_deserialization() {
        let json = r#"{
            "user": {"user_id": "u9", "email": "x@y.z"},
            "session_token": "abc123",
            "expires_at": "2026-01-01T00:00:00Z"
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.user.user_id, "u9");
        assert_eq!(resp.session_token, "abc123");
    }

    // ─── Chat Wire Tests ─────────────────────────────────────

    #[test]
    fn test_send_request_omits_missing_conversation_id() {
        let req = SendMessageRequest {
            message: "hi".to_string(),
            conversation_id: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("conversation_id"));
    }

    #[test]
    fn test_send_request_includes_conversation_id() {
        let req = SendMessageRequest {
            message: "hi".to_string(),
            conversation_id: Some("conv-1".to_string()),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("conv-1"));
    }

    #[test]
    fn test_send_response_defaults() {
        let json = r#"{"conversation_id": "c1", "response": "hello"}"#;
        let resp: SendMessageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.conversation_id, "c1");
        assert!(resp.tool_calls.is_empty());
        assert!(resp.reasoning_trace.is_none());
    }

    #[test]
    fn test_health_response() {
        let resp: HealthResponse = serde_json::from_str(r#"{"status": "healthy"}"#).unwrap();
        assert!(resp.is_healthy());
        let resp: HealthResponse = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!resp.is_healthy());
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_accepts_valid_urls() {
        assert!(ApiConfig::new("http://localhost:8000/api").is_ok());
        assert!(ApiConfig::new("https://api.example.com/api").is_ok());
    }

    #[test]
    fn test_config_rejects_missing_scheme() {
        let err = ApiConfig::new("localhost:8000").unwrap_err();
        assert_eq!(err.code, ApiErrorCode::ValidationError);
    }

    #[test]
    fn test_config_rejects_empty_host() {
        assert!(ApiConfig::new("http://").is_err());
        assert!(ApiConfig::new("http:///api").is_err());
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = ApiConfig::new("http://localhost:8000/api/").unwrap();
        assert_eq!(config.api_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_config_health_url_strips_api_prefix() {
        let config = ApiConfig::new("http://localhost:8000/api").unwrap();
        assert_eq!(config.health_url(), "http://localhost:8000/health");
    }

    #[test]
    fn test_config_health_url_without_api_prefix() {
        let config = ApiConfig::new("http://localhost:8000").unwrap();
        assert_eq!(config.health_url(), "http://localhost:8000/health");
    }

    #[test]
    fn test_retry_defaults() {
        let retry = RetryConfig::default();
        assert_eq!(retry.max_retries, 3);
        assert_eq!(retry.retry_delay_ms, 1000);
        assert_eq!(retry.timeout_ms, 30_000);
    }

    // ─── Route Tests ─────────────────────────────────────────

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Signup.path(), "/signup");
        assert_eq!(Route::Chat.path(), "/chat");
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/signup"), Route::Signup);
        assert_eq!(Route::from_path("/chat"), Route::Chat);
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/unknown"), Route::Home);
    }

    #[test]
    fn test_route_protection() {
        assert!(Route::Chat.is_protected());
        assert!(!Route::Login.is_protected());
        assert!(!Route::Signup.is_protected());
        assert!(!Route::Home.is_protected());
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_event_serialization() {
        let event = ChatEvent::AuthFailed {
            message: "bad password".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("AuthFailed"));
        assert!(json.contains("bad password"));
    }

    #[test]
    fn test_event_with_message_payload() {
        let event = ChatEvent::AssistantReplied {
            message: ChatMessage::assistant("reply"),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: ChatEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            ChatEvent::AssistantReplied { message } => assert_eq!(message.content, "reply"),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
