//! Chat panel: composer with input translation, latest response with
//! output translation, and the transcript.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use vault_core::controller::ChatController;
use vault_types::event::SlotKind;
use vault_types::message::{Message, Sender};
use crate::panels::translation::{language_picker, translate_button, translation_result};
use crate::state::UiAction;
use crate::theme::*;

pub fn chat_panel(ui: &mut egui::Ui, controller: &mut ChatController, actions: &mut Vec<UiAction>) {
    ui.heading(RichText::new("VaultAI Chat").color(ACCENT).strong());
    ui.label(
        RichText::new("Smart, secure conversational agent with translation capabilities")
            .color(TEXT_SECONDARY)
            .small(),
    );
    ui.add_space(8.0);

    ui.columns(2, |cols| {
        input_section(&mut cols[0], controller, actions);
        output_section(&mut cols[1], controller, actions);
    });

    ui.add_space(8.0);
    transcript(ui, controller, actions);
}

fn input_section(ui: &mut egui::Ui, controller: &mut ChatController, actions: &mut Vec<UiAction>) {
    section_frame(ui, "Your Message", |ui| {
        language_picker(ui, controller, SlotKind::Input);

        ui.add(
            egui::TextEdit::multiline(&mut controller.composer)
                .hint_text("Type your message here...")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        let shortcut = ui.input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.command);

        ui.horizontal(|ui| {
            translate_button(ui, controller, SlotKind::Input, actions);

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if controller.is_generating() {
                    ui.add(egui::Spinner::new());
                    return;
                }
                let can_generate = controller.can_generate();
                let send = ui.add_enabled(
                    can_generate,
                    egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                        .fill(if can_generate { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(60.0, 0.0)),
                );
                if send.clicked() || (shortcut && can_generate) {
                    actions.push(UiAction::Generate(controller.composer.clone()));
                }
            });
        });

        translation_result(ui, controller, SlotKind::Input, actions);
    });
}

fn output_section(ui: &mut egui::Ui, controller: &mut ChatController, actions: &mut Vec<UiAction>) {
    section_frame(ui, "AI Response", |ui| {
        language_picker(ui, controller, SlotKind::Output);

        let mut response = controller.latest_response().unwrap_or("");
        ui.add(
            egui::TextEdit::multiline(&mut response)
                .hint_text("AI response will appear here...")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        translate_button(ui, controller, SlotKind::Output, actions);
        translation_result(ui, controller, SlotKind::Output, actions);
    });
}

fn transcript(ui: &mut egui::Ui, controller: &ChatController, actions: &mut Vec<UiAction>) {
    section_frame(ui, "Chat History", |ui| {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for message in controller.messages() {
                    render_message(ui, message, actions);
                    ui.add_space(4.0);
                }
                if controller.is_generating() {
                    ui.horizontal(|ui| {
                        ui.add(egui::Spinner::new());
                        ui.label(RichText::new("VaultAI is typing...").color(TEXT_SECONDARY).small());
                    });
                }
            });
    });
}

fn render_message(ui: &mut egui::Ui, message: &Message, actions: &mut Vec<UiAction>) {
    let layout = match message.sender {
        Sender::User => Layout::right_to_left(Align::Min),
        Sender::Agent => Layout::left_to_right(Align::Min),
    };

    ui.with_layout(layout, |ui| {
        bubble_frame(message.sender).show(ui, |ui| {
            ui.set_max_width(ui.available_width() * BUBBLE_MAX_WIDTH_RATIO);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(message.sender.label())
                            .color(ACCENT)
                            .strong()
                            .small(),
                    );
                    ui.label(
                        RichText::new(message.time_label())
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                });
                ui.label(RichText::new(&message.text).color(TEXT_PRIMARY));
                ui.horizontal(|ui| {
                    if ui.small_button("Copy").clicked() {
                        actions.push(UiAction::Copy {
                            label: "Message",
                            text: message.text.clone(),
                        });
                    }
                    if ui.small_button("Speak").clicked() {
                        actions.push(UiAction::Speak {
                            text: message.text.clone(),
                            language: None,
                        });
                    }
                });
            });
        });
    });
}

fn section_frame(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    card_frame().show(ui, |ui| {
        ui.label(RichText::new(title).color(TEXT_PRIMARY).strong());
        ui.separator();
        add_contents(ui);
    });
}
