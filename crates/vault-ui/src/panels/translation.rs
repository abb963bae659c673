//! Translation widgets shared by the input and output sections.

use egui::{self, RichText};
use vault_core::controller::ChatController;
use vault_types::event::SlotKind;
use vault_types::language::{display_name, Language, INDIAN_LANGUAGES};
use crate::state::UiAction;
use crate::theme::*;

/// Combo box over the language table. Writes the choice straight into the slot.
pub fn language_picker(ui: &mut egui::Ui, controller: &mut ChatController, kind: SlotKind) {
    let current = controller.slot(kind).language.clone();
    let mut selected = current.clone();
    let selected_text = Language::find(&current)
        .map(|l| l.label())
        .unwrap_or_else(|| "Select language".to_string());

    egui::ComboBox::from_id_salt(("language", kind.noun()))
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for lang in INDIAN_LANGUAGES {
                ui.selectable_value(&mut selected, lang.code.to_string(), lang.label());
            }
        });

    if selected != current {
        controller.set_language(kind, selected);
    }
}

pub fn translate_button(
    ui: &mut egui::Ui,
    controller: &ChatController,
    kind: SlotKind,
    actions: &mut Vec<UiAction>,
) {
    if controller.slot(kind).is_translating() {
        ui.add(egui::Spinner::new());
        return;
    }
    let clicked = ui
        .add_enabled(
            controller.can_translate(kind),
            egui::Button::new(RichText::new("Translate").color(TEXT_PRIMARY))
                .corner_radius(PANEL_ROUNDING),
        )
        .clicked();
    if clicked {
        actions.push(UiAction::Translate(kind));
    }
}

/// The last translation for a slot, with copy and speak buttons
pub fn translation_result(
    ui: &mut egui::Ui,
    controller: &ChatController,
    kind: SlotKind,
    actions: &mut Vec<UiAction>,
) {
    let Some(translation) = controller.slot(kind).translation() else {
        return;
    };

    translation_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("Translated ({})", display_name(&translation.language)))
                    .color(ACCENT)
                    .small()
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Speak").clicked() {
                    actions.push(UiAction::Speak {
                        text: translation.text.clone(),
                        language: Some(translation.language.clone()),
                    });
                }
                if ui.small_button("Copy").clicked() {
                    actions.push(UiAction::Copy {
                        label: copy_label(kind),
                        text: translation.text.clone(),
                    });
                }
            });
        });
        ui.label(RichText::new(&translation.text).color(TEXT_PRIMARY));
    });
}

pub fn copy_label(kind: SlotKind) -> &'static str {
    match kind {
        SlotKind::Input => "Translated input",
        SlotKind::Output => "Translated response",
    }
}
