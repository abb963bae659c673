//! Sidebar: new chat, recent chats with delete, account footer.

use chrono::Utc;
use egui::{self, Align, Align2, Layout, RichText, ScrollArea, Vec2};
use vault_core::controller::ChatController;
use vault_types::history::format_relative;
use crate::state::{UiAction, UiState};
use crate::theme::*;

pub fn sidebar_panel(
    ui: &mut egui::Ui,
    controller: &ChatController,
    state: &mut UiState,
    actions: &mut Vec<UiAction>,
) {
    let collapsed = state.sidebar_collapsed;

    ui.horizontal(|ui| {
        let label = if collapsed { "+" } else { "+  New Chat" };
        if ui
            .add(
                egui::Button::new(RichText::new(label).color(TEXT_PRIMARY).strong())
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING),
            )
            .clicked()
        {
            actions.push(UiAction::NewChat);
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let toggle = if collapsed { "»" } else { "«" };
            if ui.small_button(toggle).clicked() {
                state.sidebar_collapsed = !collapsed;
            }
        });
    });

    ui.separator();

    if !collapsed {
        ui.label(RichText::new("Recent Chats").color(TEXT_SECONDARY).small().strong());
    }

    let footer_height = 64.0;
    let now = Utc::now();
    ScrollArea::vertical()
        .max_height(ui.available_height() - footer_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for chat in controller.chat_summaries() {
                let selected = controller.history().is_current(&chat.id);
                let response = chat_row_frame(selected)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        if collapsed {
                            ui.label(RichText::new("💬").color(TEXT_SECONDARY));
                            return;
                        }
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&chat.title).color(TEXT_PRIMARY).strong());
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                if ui
                                    .small_button(RichText::new("🗑").color(TEXT_SECONDARY))
                                    .clicked()
                                {
                                    state.pending_delete = Some(chat.id.clone());
                                }
                            });
                        });
                        ui.label(RichText::new(&chat.preview).color(TEXT_SECONDARY).small());
                        ui.label(
                            RichText::new(format_relative(chat.timestamp, now))
                                .color(TEXT_SECONDARY)
                                .small()
                                .italics(),
                        );
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    actions.push(UiAction::SelectChat(chat.id.clone()));
                }
                ui.add_space(4.0);
            }
        });

    ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
        if ui
            .button(RichText::new(if collapsed { "Out" } else { "Logout" }).color(TEXT_SECONDARY))
            .clicked()
        {
            actions.push(UiAction::Logout);
        }
        if !collapsed {
            ui.label(RichText::new(controller.user_email()).color(TEXT_PRIMARY).small());
        }
        ui.separator();
    });

    delete_confirmation(ui.ctx(), state, actions);
}

/// Modal-ish confirmation before a chat is removed
fn delete_confirmation(ctx: &egui::Context, state: &mut UiState, actions: &mut Vec<UiAction>) {
    let Some(id) = state.pending_delete.clone() else {
        return;
    };

    egui::Window::new("Delete chat")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(
                RichText::new(
                    "Are you sure you want to delete this chat? This action cannot be undone.",
                )
                .color(TEXT_PRIMARY),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.pending_delete = None;
                }
                if ui
                    .add(egui::Button::new(RichText::new("Delete").color(TEXT_PRIMARY)).fill(ERROR))
                    .clicked()
                {
                    actions.push(UiAction::DeleteChat(id.clone()));
                    state.pending_delete = None;
                }
            });
        });
}
