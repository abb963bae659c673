//! Login panel: sign in / sign up form.

use egui::{self, Align, Layout, RichText, Vec2};
use crate::state::{UiAction, UiState};
use crate::theme::*;
use vault_types::auth::AuthMode;

/// Render the login card. Pushes `SignIn` when the form is submitted.
pub fn login_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    signing_in: bool,
    actions: &mut Vec<UiAction>,
) {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space((ui.available_height() * 0.15).max(16.0));

        card_frame()
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(360.0);
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new("VaultAI").color(ACCENT).strong().size(28.0));
                    ui.label(
                        RichText::new("Smart, secure conversational agent")
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                });

                ui.add_space(16.0);

                let form = &mut state.login_form;
                let email = ui.add(
                    egui::TextEdit::singleline(&mut form.email)
                        .hint_text("Email address")
                        .desired_width(f32::INFINITY),
                );

                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut form.password)
                            .hint_text("Password")
                            .password(!state.show_password)
                            .desired_width(ui.available_width() - 56.0),
                    );
                    let toggle = if state.show_password { "Hide" } else { "Show" };
                    if ui.small_button(toggle).clicked() {
                        state.show_password = !state.show_password;
                    }
                });

                if form.mode == AuthMode::SignUp {
                    ui.add(
                        egui::TextEdit::singleline(&mut form.confirm_password)
                            .hint_text("Confirm password")
                            .password(true)
                            .desired_width(f32::INFINITY),
                    );
                }

                ui.add_space(8.0);

                let submit = ui.add_enabled(
                    !signing_in,
                    egui::Button::new(
                        RichText::new(form.mode.submit_label())
                            .color(TEXT_PRIMARY)
                            .strong(),
                    )
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(ui.available_width(), 32.0)),
                );

                let enter = email.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if (submit.clicked() || enter) && !signing_in {
                    actions.push(UiAction::SignIn(form.clone()));
                }

                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    if ui
                        .link(RichText::new(form.mode.switch_label()).color(TEXT_SECONDARY).small())
                        .clicked()
                    {
                        form.mode = form.mode.toggled();
                    }
                });
            });
    });
}
