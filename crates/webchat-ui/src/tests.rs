#[cfg(test)]
mod tests {
    use crate::state::*;
    use webchat_types::auth::UserSession;
    use webchat_types::event::ChatEvent;
    use webchat_types::message::{ChatMessage, Role};
    use webchat_types::route::Route;

    fn session() -> UserSession {
        UserSession {
            user_id: "u1".to_string(),
            email: "a@b.c".to_string(),
            session_token: "tok".to_string(),
            expires_at: "2099-01-01T00:00:00Z".to_string(),
            is_authenticated: true,
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert_eq!(state.route, Route::Home);
        assert!(state.session.is_none());
        assert!(state.messages.is_empty());
        assert!(!state.is_busy());
        assert!(state.error.is_none());
        assert!(state.backend_healthy.is_none());
    }

    #[test]
    fn test_ui_state_auth_flow() {
        let mut state = UiState::new();
        state.login_form.email = "a@b.c".to_string();
        state.login_form.password = "hunter22".to_string();

        state.process_events(vec![ChatEvent::AuthStarted], 0.0);
        assert!(state.auth_busy);

        state.process_events(
            vec![ChatEvent::AuthSucceeded { session: session() }],
            0.1,
        );
        assert!(!state.auth_busy);
        assert_eq!(state.session.as_ref().unwrap().email, "a@b.c");
        // Credentials never linger after a successful auth
        assert!(state.login_form.email.is_empty());
        assert!(state.login_form.password.is_empty());
    }

    #[test]
    fn test_ui_state_auth_failure_shows_banner() {
        let mut state = UiState::new();
        state.process_events(
            vec![
                ChatEvent::AuthStarted,
                ChatEvent::AuthFailed {
                    message: "invalid credentials".to_string(),
                },
            ],
            10.0,
        );
        assert!(!state.auth_busy);
        assert!(state.session.is_none());
        assert_eq!(state.error.as_deref(), Some("invalid credentials"));
    }

    #[test]
    fn test_ui_state_logout_clears_session_and_thread() {
        let mut state = UiState::new();
        state.process_events(
            vec![
                ChatEvent::AuthSucceeded { session: session() },
                ChatEvent::UserMessageQueued {
                    message: ChatMessage::user("hi"),
                },
                ChatEvent::LoggedOut,
            ],
            0.0,
        );
        assert!(state.session.is_none());
        assert!(state.messages.is_empty());
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_ui_state_message_round_trip() {
        let mut state = UiState::new();
        state.process_events(
            vec![ChatEvent::UserMessageQueued {
                message: ChatMessage::user("hello"),
            }],
            0.0,
        );
        assert!(state.chat_busy);
        assert_eq!(state.messages.len(), 1);

        state.process_events(
            vec![ChatEvent::AssistantReplied {
                message: ChatMessage::assistant("hi there"),
            }],
            0.5,
        );
        assert!(!state.chat_busy);
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[1].role, Role::Assistant);
    }

    #[test]
    fn test_ui_state_chat_error_banner_auto_dismisses() {
        let mut state = UiState::new();
        state.process_events(
            vec![ChatEvent::ChatError {
                message: "backend down".to_string(),
            }],
            100.0,
        );
        assert_eq!(state.error.as_deref(), Some("backend down"));

        state.tick(103.9);
        assert!(state.error.is_some());

        state.tick(104.0);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_ui_state_manual_dismiss() {
        let mut state = UiState::new();
        state.set_error("oops", 0.0);
        state.dismiss_error();
        assert!(state.error.is_none());
        // A dismissed banner must not resurrect at the old deadline
        state.tick(10.0);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_ui_state_conversation_cleared() {
        let mut state = UiState::new();
        state.messages.push(ChatMessage::user("hi"));
        state.process_events(vec![ChatEvent::ConversationCleared], 0.0);
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_ui_state_navigation_and_health() {
        let mut state = UiState::new();
        state.process_events(
            vec![
                ChatEvent::NavigatedTo { route: Route::Chat },
                ChatEvent::HealthChecked { healthy: false },
            ],
            0.0,
        );
        assert_eq!(state.route, Route::Chat);
        assert_eq!(state.backend_healthy, Some(false));
    }

    #[test]
    fn test_busy_flags_gate_the_inputs() {
        let mut state = UiState::new();
        assert!(state.auth_inputs_enabled());
        assert!(state.chat_input_enabled());

        // Credential fields lock while an auth request is in flight
        state.process_events(vec![ChatEvent::AuthStarted], 0.0);
        assert!(!state.auth_inputs_enabled());
        state.process_events(
            vec![ChatEvent::AuthFailed {
                message: "nope".to_string(),
            }],
            0.1,
        );
        assert!(state.auth_inputs_enabled());

        // The message input locks while a send is in flight
        state.process_events(
            vec![ChatEvent::UserMessageQueued {
                message: ChatMessage::user("hi"),
            }],
            0.2,
        );
        assert!(!state.chat_input_enabled());
        state.process_events(
            vec![ChatEvent::AssistantReplied {
                message: ChatMessage::assistant("hello"),
            }],
            0.3,
        );
        assert!(state.chat_input_enabled());
    }

    // ─── Validation Tests ────────────────────────────────────

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email("  a@b.c  ").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("hunter22").is_ok());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_validate_login() {
        assert!(validate_login("a@b.c", "hunter22").is_ok());
        assert!(validate_login("nope", "hunter22").is_err());
        assert!(validate_login("a@b.c", "short").is_err());
    }

    #[test]
    fn test_validate_signup_confirm_must_match() {
        assert!(validate_signup("a@b.c", "hunter22", "hunter22").is_ok());
        assert_eq!(
            validate_signup("a@b.c", "hunter22", "different").unwrap_err(),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_auth_form_clear() {
        let mut form = AuthForm {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
            confirm: "pw".to_string(),
            error: Some("oops".to_string()),
        };
        form.clear();
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
        assert!(form.confirm.is_empty());
        assert!(form.error.is_none());
    }
}
