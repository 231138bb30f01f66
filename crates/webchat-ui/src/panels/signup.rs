//! Signup screen — like login, plus password confirmation.

use egui::{self, RichText, Vec2};

use crate::state::{validate_signup, UiState};
use crate::theme::*;

pub enum SignupAction {
    None,
    Submit { email: String, password: String },
    GoToLogin,
}

pub fn signup_panel(ui: &mut egui::Ui, state: &mut UiState) -> SignupAction {
    let mut action = SignupAction::None;
    let inputs_enabled = state.auth_inputs_enabled();

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.set_max_width(360.0);

        egui::Frame::default()
            .fill(BG_SECONDARY)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.heading(RichText::new("Create account").color(TEXT_PRIMARY).strong());
                ui.label(
                    RichText::new("A few seconds and you're chatting")
                        .color(TEXT_SECONDARY)
                        .small(),
                );
                ui.add_space(16.0);

                ui.label(RichText::new("Email").color(TEXT_SECONDARY).small());
                ui.add_enabled(
                    inputs_enabled,
                    egui::TextEdit::singleline(&mut state.signup_form.email)
                        .hint_text("you@example.com")
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(8.0);

                ui.label(RichText::new("Password").color(TEXT_SECONDARY).small());
                ui.add_enabled(
                    inputs_enabled,
                    egui::TextEdit::singleline(&mut state.signup_form.password)
                        .password(true)
                        .hint_text("At least 6 characters")
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(8.0);

                ui.label(RichText::new("Confirm password").color(TEXT_SECONDARY).small());
                let confirm_response = ui.add_enabled(
                    inputs_enabled,
                    egui::TextEdit::singleline(&mut state.signup_form.confirm)
                        .password(true)
                        .desired_width(f32::INFINITY),
                );

                if let Some(ref error) = state.signup_form.error {
                    ui.add_space(6.0);
                    ui.label(RichText::new(error).color(ERROR_SOFT).small());
                }

                ui.add_space(16.0);

                let submit_enabled = inputs_enabled;
                let label = if state.auth_busy {
                    "Creating account..."
                } else {
                    "Sign up"
                };
                let btn = ui.add_enabled(
                    submit_enabled,
                    egui::Button::new(RichText::new(label).color(TEXT_PRIMARY).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(ui.available_width(), 32.0)),
                );

                let enter_pressed = confirm_response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if (btn.clicked() || enter_pressed) && submit_enabled {
                    let email = state.signup_form.email.trim().to_string();
                    let password = state.signup_form.password.clone();
                    let confirm = state.signup_form.confirm.clone();
                    match validate_signup(&email, &password, &confirm) {
                        Ok(()) => {
                            state.signup_form.error = None;
                            action = SignupAction::Submit { email, password };
                        }
                        Err(e) => state.signup_form.error = Some(e),
                    }
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Already have an account?")
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                    if ui
                        .link(RichText::new("Sign in").color(ACCENT_SOFT).small())
                        .clicked()
                    {
                        action = SignupAction::GoToLogin;
                    }
                });
            });
    });

    action
}
