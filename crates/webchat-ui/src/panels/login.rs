//! Login screen — email and password form with inline validation.

use egui::{self, RichText, Vec2};

use crate::state::{validate_login, UiState};
use crate::theme::*;

/// What the caller should do after rendering the login screen
pub enum LoginAction {
    None,
    /// Credentials passed client-side validation
    Submit { email: String, password: String },
    GoToSignup,
}

pub fn login_panel(ui: &mut egui::Ui, state: &mut UiState) -> LoginAction {
    let mut action = LoginAction::None;
    let inputs_enabled = state.auth_inputs_enabled();

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.set_max_width(360.0);

        egui::Frame::default()
            .fill(BG_SECONDARY)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.heading(RichText::new("Welcome back").color(TEXT_PRIMARY).strong());
                ui.label(
                    RichText::new("Sign in to continue your conversation")
                        .color(TEXT_SECONDARY)
                        .small(),
                );
                ui.add_space(16.0);

                ui.label(RichText::new("Email").color(TEXT_SECONDARY).small());
                let email_edit = egui::TextEdit::singleline(&mut state.login_form.email)
                    .hint_text("you@example.com")
                    .desired_width(f32::INFINITY);
                ui.add_enabled(inputs_enabled, email_edit);

                ui.add_space(8.0);

                ui.label(RichText::new("Password").color(TEXT_SECONDARY).small());
                let password_edit = egui::TextEdit::singleline(&mut state.login_form.password)
                    .password(true)
                    .desired_width(f32::INFINITY);
                let password_response = ui.add_enabled(inputs_enabled, password_edit);

                if let Some(ref error) = state.login_form.error {
                    ui.add_space(6.0);
                    ui.label(RichText::new(error).color(ERROR_SOFT).small());
                }

                ui.add_space(16.0);

                let submit_enabled = inputs_enabled;
                let label = if state.auth_busy {
                    "Signing in..."
                } else {
                    "Sign in"
                };
                let btn = ui.add_enabled(
                    submit_enabled,
                    egui::Button::new(RichText::new(label).color(TEXT_PRIMARY).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(ui.available_width(), 32.0)),
                );

                let enter_pressed = password_response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if (btn.clicked() || enter_pressed) && submit_enabled {
                    let email = state.login_form.email.trim().to_string();
                    let password = state.login_form.password.clone();
                    match validate_login(&email, &password) {
                        Ok(()) => {
                            state.login_form.error = None;
                            action = LoginAction::Submit { email, password };
                        }
                        Err(e) => state.login_form.error = Some(e),
                    }
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("No account yet?").color(TEXT_SECONDARY).small());
                    if ui
                        .link(RichText::new("Create one").color(ACCENT_SOFT).small())
                        .clicked()
                    {
                        action = LoginAction::GoToSignup;
                    }
                });
            });
    });

    action
}
