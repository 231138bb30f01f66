//! Main egui application — routes between screens and drives the
//! auth and chat services.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, Vec2};

use webchat_core::api::ApiClient;
use webchat_core::auth::{AuthService, SESSION_COOKIE};
use webchat_core::chat::ChatSession;
use webchat_core::event_bus::EventBus;
use webchat_core::ports::{CookiePort, NavigatorPort};
use webchat_core::router::{self, RouteDecision};
use webchat_platform::storage::{local_store, session_store};
use webchat_platform::{BrowserClock, BrowserCookies, BrowserNavigator, FetchHttp};
use webchat_types::config::ApiConfig;
use webchat_types::event::ChatEvent;
use webchat_types::route::Route;
use webchat_ui::panels::{chat_panel, login_panel, signup_panel, ChatAction, LoginAction, SignupAction};
use webchat_ui::state::UiState;
use webchat_ui::theme;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// The main application state
pub struct WebchatApp {
    ui_state: UiState,
    event_bus: EventBus,
    auth: Rc<AuthService>,
    chat: Rc<RefCell<ChatSession>>,
    cookies: Rc<dyn CookiePort>,
    navigator: Rc<dyn NavigatorPort>,
    /// Path to land on after a successful login
    pending_redirect: Option<String>,
    first_frame: bool,
}

impl WebchatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let api_url = option_env!("WEBCHAT_API_URL").unwrap_or(DEFAULT_API_URL);
        let config = ApiConfig::new(api_url).expect("invalid API URL");
        log::info!("API base: {}", config.api_url);

        let event_bus = EventBus::new();
        let http = Rc::new(FetchHttp::new());
        let clock = Rc::new(BrowserClock::new());
        let cookies: Rc<dyn CookiePort> = Rc::new(BrowserCookies::new());
        let navigator: Rc<dyn NavigatorPort> = Rc::new(BrowserNavigator::new());
        let session = session_store();
        let local = local_store();

        let api = Rc::new(ApiClient::new(
            config.api_url.clone(),
            config.retry,
            http.clone(),
            clock,
            session.clone(),
        ));
        let auth = Rc::new(AuthService::new(
            api.clone(),
            session,
            cookies.clone(),
            event_bus.clone(),
        ));
        let chat = Rc::new(RefCell::new(ChatSession::new(
            api,
            http,
            config.health_url(),
            local,
            event_bus.clone(),
        )));

        let mut ui_state = UiState::new();

        // Evaluate the landing navigation against the session cookie
        let path = navigator.current_path();
        let has_cookie = cookies.get(SESSION_COOKIE).is_some();
        let mut pending_redirect = None;
        match router::guard(&path, has_cookie) {
            RouteDecision::Allow => {
                ui_state.route = Route::from_path(&path);
            }
            RouteDecision::RedirectToLogin { target } => {
                log::info!("no session, redirecting {} to login", path);
                navigator.push(&target);
                pending_redirect = Some(path);
                ui_state.route = Route::Login;
            }
            RouteDecision::RedirectToChat => {
                navigator.push(Route::Chat.path());
                ui_state.route = Route::Chat;
            }
        }

        // Landing directly on /login?redirect=... keeps the target
        if pending_redirect.is_none() {
            pending_redirect = router::redirect_target(&navigator.current_query());
        }

        // Rehydrate the session on a reload within the same tab
        if auth.is_authenticated() {
            ui_state.session = auth.current_session();
        }

        let app = Self {
            ui_state,
            event_bus,
            auth,
            chat,
            cookies,
            navigator,
            pending_redirect,
            first_frame: true,
        };
        app.probe_health();
        app
    }

    fn navigate(&mut self, route: Route) {
        self.navigator.push(route.path());
        self.ui_state.route = route;
        self.event_bus.emit(ChatEvent::NavigatedTo { route });
    }

    /// Handle the events that change routes before the UI folds the rest.
    fn handle_navigation_events(&mut self, events: &[ChatEvent]) {
        for event in events {
            match event {
                ChatEvent::AuthSucceeded { .. } => {
                    let target = self
                        .pending_redirect
                        .take()
                        .unwrap_or_else(|| Route::Chat.path().to_string());
                    self.navigator.push(&target);
                    self.ui_state.route = Route::from_path(&target);
                    if !self.ui_state.route.is_protected() {
                        self.ui_state.route = Route::Chat;
                    }
                }
                ChatEvent::LoggedOut => {
                    self.navigate(Route::Login);
                }
                _ => {}
            }
        }
    }

    /// Guard in-app renders too: a protected screen with no session
    /// bounces to login even if the URL was typed directly.
    fn enforce_guard(&mut self) {
        let has_cookie = self.cookies.get(SESSION_COOKIE).is_some();
        if self.ui_state.route.is_protected() && !has_cookie && self.ui_state.session.is_none() {
            let path = self.ui_state.route.path().to_string();
            self.pending_redirect = Some(path.clone());
            self.navigator
                .push(&format!("/login?redirect={}", router::encode_component(&path)));
            self.ui_state.route = Route::Login;
        }
    }

    // ── Async dispatch ───────────────────────────────────────

    fn dispatch_login(&self, email: String, password: String, ctx: &egui::Context) {
        let auth = self.auth.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = auth.login(&email, &password).await {
                log::warn!("login failed: {}", e);
            }
            ctx.request_repaint();
        });
    }

    fn dispatch_signup(&self, email: String, password: String, ctx: &egui::Context) {
        let auth = self.auth.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = auth.signup(&email, &password).await {
                log::warn!("signup failed: {}", e);
            }
            ctx.request_repaint();
        });
    }

    fn dispatch_logout(&self, ctx: &egui::Context) {
        let auth = self.auth.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            auth.logout().await;
            ctx.request_repaint();
        });
    }

    fn dispatch_send(&self, text: String, ctx: &egui::Context) {
        let chat = self.chat.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = {
                let mut session = chat.borrow_mut();
                session.send(&text).await
            };
            if let Err(e) = result {
                log::error!("send failed: {}", e);
            }
            ctx.request_repaint();
        });
    }

    fn probe_health(&self) {
        // The probe owns its handles; the session borrow ends here
        let probe = self.chat.borrow().check_health();
        wasm_bindgen_futures::spawn_local(async move {
            if !probe.await {
                log::warn!("backend health probe failed");
            }
        });
    }
}

impl eframe::App for WebchatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let now = ctx.input(|i| i.time);

        // Drain events from the services
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.handle_navigation_events(&events);
            self.ui_state.process_events(events, now);
            ctx.request_repaint();
        }

        self.ui_state.tick(now);
        self.enforce_guard();

        if self.ui_state.is_busy() || self.ui_state.error.is_some() {
            ctx.request_repaint();
        }

        CentralPanel::default().show(ctx, |ui| match self.ui_state.route {
            Route::Home => self.render_home(ui),
            Route::Login => match login_panel(ui, &mut self.ui_state) {
                LoginAction::None => {}
                LoginAction::Submit { email, password } => {
                    self.dispatch_login(email, password, ctx)
                }
                LoginAction::GoToSignup => self.navigate(Route::Signup),
            },
            Route::Signup => match signup_panel(ui, &mut self.ui_state) {
                SignupAction::None => {}
                SignupAction::Submit { email, password } => {
                    self.dispatch_signup(email, password, ctx)
                }
                SignupAction::GoToLogin => self.navigate(Route::Login),
            },
            Route::Chat => match chat_panel(ui, &mut self.ui_state) {
                ChatAction::None => {}
                ChatAction::Send(text) => self.dispatch_send(text, ctx),
                ChatAction::NewConversation => {
                    // A send in flight holds the session mutably; skip the
                    // clear rather than borrowing again
                    if let Ok(mut chat) = self.chat.try_borrow_mut() {
                        chat.new_conversation();
                    }
                }
                ChatAction::Logout => self.dispatch_logout(ctx),
            },
        });
    }
}

impl WebchatApp {
    fn render_home(&mut self, ui: &mut egui::Ui) {
        let mut go_login = false;
        let mut go_chat = false;

        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading(
                RichText::new("Chat Assistant")
                    .color(theme::TEXT_PRIMARY)
                    .strong()
                    .size(28.0),
            );
            ui.label(
                RichText::new("A conversational assistant for your tasks")
                    .color(theme::TEXT_SECONDARY),
            );
            ui.add_space(24.0);

            let signed_in = self.ui_state.session.is_some();
            let label = if signed_in { "Open chat" } else { "Sign in" };
            let btn = ui.add(
                egui::Button::new(RichText::new(label).color(theme::TEXT_PRIMARY).strong())
                    .fill(theme::ACCENT)
                    .corner_radius(theme::PANEL_ROUNDING)
                    .min_size(Vec2::new(140.0, 36.0)),
            );
            if btn.clicked() {
                if signed_in {
                    go_chat = true;
                } else {
                    go_login = true;
                }
            }
        });

        if go_login {
            self.navigate(Route::Login);
        }
        if go_chat {
            self.navigate(Route::Chat);
        }
    }
}
