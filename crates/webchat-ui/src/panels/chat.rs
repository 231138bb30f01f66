//! Chat screen — conversation thread, input row, header controls.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use webchat_types::message::{ChatMessage, Role};

use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the chat screen
pub enum ChatAction {
    None,
    Send(String),
    NewConversation,
    Logout,
}

pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> ChatAction {
    let mut action = ChatAction::None;
    let input_enabled = state.chat_input_enabled();

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Chat Assistant").color(TEXT_PRIMARY).strong());

                    if let Some(healthy) = state.backend_healthy {
                        let (dot, color) = if healthy {
                            ("●", SUCCESS)
                        } else {
                            ("●", ERROR)
                        };
                        ui.label(RichText::new(dot).color(color).small());
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui
                            .button(RichText::new("Logout").color(TEXT_SECONDARY).small())
                            .clicked()
                        {
                            action = ChatAction::Logout;
                        }
                        if ui
                            .button(
                                RichText::new("New Conversation").color(TEXT_SECONDARY).small(),
                            )
                            .clicked()
                        {
                            action = ChatAction::NewConversation;
                        }
                        if let Some(ref session) = state.session {
                            ui.label(
                                RichText::new(&session.email).color(TEXT_SECONDARY).small(),
                            );
                        }
                    });
                });

                ui.separator();

                // Transient error banner
                if let Some(error) = state.error.clone() {
                    egui::Frame::default()
                        .fill(egui::Color32::from_rgb(50, 20, 20))
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&error).color(ERROR_SOFT));
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    if ui
                                        .button(RichText::new("✕").color(TEXT_SECONDARY).small())
                                        .clicked()
                                    {
                                        state.dismiss_error();
                                    }
                                });
                            });
                        });
                    ui.add_space(4.0);
                }

                // Messages area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if state.messages.is_empty() {
                            ui.add_space(24.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new("Ask anything to get started")
                                        .color(TEXT_SECONDARY),
                                );
                            });
                        }
                        for message in &state.messages {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }

                        if state.chat_busy {
                            ui.label(
                                RichText::new("Thinking...").color(TEXT_SECONDARY).italics(),
                            );
                        }
                    });

                ui.add_space(8.0);

                // Input row
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Type a message...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add_enabled(input_enabled, input);

                    let send_enabled = input_enabled && !state.input_text.trim().is_empty();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    let enter_pressed = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if (enter_pressed && send_enabled) || send_btn.clicked() {
                        let text = state.input_text.trim().to_string();
                        state.input_text.clear();
                        action = ChatAction::Send(text);
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let is_error = message.role == Role::Assistant && message.content.starts_with("Error:");
    let error_bg = egui::Color32::from_rgb(50, 20, 20);
    let (label, label_color, bg) = match message.role {
        Role::User => ("You", ACCENT, BG_SECONDARY),
        Role::Assistant if is_error => ("Assistant", ERROR, error_bg),
        Role::Assistant => ("Assistant", SUCCESS, BG_SECONDARY),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));

            for call in &message.tool_calls {
                ui.label(
                    RichText::new(format!("⚙ {}", call.tool_name))
                        .color(ACCENT_SOFT)
                        .small(),
                );
            }
        });
}
