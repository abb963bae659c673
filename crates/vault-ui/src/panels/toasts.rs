//! Toast overlay: stacked notices in the bottom-right corner.

use egui::{self, Align2, RichText, Vec2};
use crate::state::UiState;
use crate::theme::*;

pub fn toast_overlay(ctx: &egui::Context, state: &mut UiState) {
    if state.toasts.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(egui::Id::new("vault_toasts"))
        .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-16.0, -16.0))
        .show(ctx, |ui| {
            for (index, toast) in state.toasts.iter().enumerate() {
                let (frame, title_color) = toast_frame(toast.notice.is_error());
                let response = frame
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.label(RichText::new(&toast.notice.title).color(title_color).strong());
                        ui.label(RichText::new(&toast.notice.description).color(TEXT_PRIMARY).small());
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    dismissed = Some(index);
                }
                ui.add_space(6.0);
            }
        });

    if let Some(index) = dismissed {
        state.dismiss_toast(index);
    }
}
