//! Main egui application: composes the panels and dispatches UI actions.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use egui::{CentralPanel, ScrollArea, SidePanel};

use vault_core::controller::ChatController;
use vault_core::event_bus::EventBus;
use vault_core::ports::{
    AuthPort, ClipboardPort, DelayPort, ResponderPort, SpeechPort, TranslatorPort,
};
use vault_core::session::View;
use vault_core::stubs::{StubAuthenticator, StubResponder, StubTranslator};
use vault_core::workflow;
use vault_platform::{BrowserClipboard, BrowserSpeech, GlooDelay};
use vault_types::config::AppConfig;
use vault_types::event::SlotKind;
use vault_ui::panels::{chat, login, sidebar, toasts};
use vault_ui::state::{UiAction, UiState};
use vault_ui::theme;

pub struct VaultApp {
    ui_state: UiState,
    notice_ttl: f64,
    event_bus: EventBus,
    controller: Rc<RefCell<ChatController>>,
    auth: Rc<dyn AuthPort>,
    responder: Rc<dyn ResponderPort>,
    translator: Rc<dyn TranslatorPort>,
    clipboard: Rc<dyn ClipboardPort>,
    speech: Rc<dyn SpeechPort>,
    first_frame: bool,
}

impl VaultApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let event_bus = EventBus::new();
        let delay: Rc<dyn DelayPort> = Rc::new(GlooDelay);

        let responder = Rc::new(StubResponder::new(delay.clone(), config.response_delay_ms));
        let translator = Rc::new(StubTranslator::new(delay, config.translation_delay_ms));
        let notice_ttl = config.notice_ttl_secs;
        let controller = ChatController::new(config, event_bus.clone());

        Self {
            ui_state: UiState::new(),
            notice_ttl,
            event_bus,
            controller: Rc::new(RefCell::new(controller)),
            auth: Rc::new(StubAuthenticator),
            responder,
            translator,
            clipboard: Rc::new(BrowserClipboard),
            speech: Rc::new(BrowserSpeech::new()),
            first_frame: true,
        }
    }
}

impl eframe::App for VaultApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let now = ctx.input(|i| i.time);
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events, now);
            ctx.request_repaint();
        }
        self.ui_state.prune_toasts(now, self.notice_ttl);

        let mut actions = Vec::new();
        let controller_rc = self.controller.clone();
        {
            let mut controller = controller_rc.borrow_mut();

            let busy = controller.is_signing_in()
                || controller.is_generating()
                || controller.slot(SlotKind::Input).is_translating()
                || controller.slot(SlotKind::Output).is_translating();
            if busy {
                ctx.request_repaint();
            } else if !self.ui_state.toasts.is_empty() {
                ctx.request_repaint_after(Duration::from_millis(250));
            }

            match controller.view() {
                View::Login => {
                    let signing_in = controller.is_signing_in();
                    CentralPanel::default().show(ctx, |ui| {
                        login::login_panel(ui, &mut self.ui_state, signing_in, &mut actions);
                    });
                }
                View::Chat => {
                    let width = if self.ui_state.sidebar_collapsed {
                        theme::SIDEBAR_COLLAPSED_WIDTH
                    } else {
                        theme::SIDEBAR_WIDTH
                    };
                    SidePanel::left("sidebar")
                        .resizable(false)
                        .exact_width(width)
                        .show(ctx, |ui| {
                            sidebar::sidebar_panel(
                                ui,
                                &controller,
                                &mut self.ui_state,
                                &mut actions,
                            );
                        });
                    CentralPanel::default().show(ctx, |ui| {
                        ScrollArea::vertical().show(ui, |ui| {
                            chat::chat_panel(ui, &mut controller, &mut actions);
                        });
                    });
                }
            }
        }

        toasts::toast_overlay(ctx, &mut self.ui_state);

        for action in actions {
            self.dispatch(action, ctx);
        }
        // Logout and other synchronous actions leave events for the next frame
        if self.event_bus.has_pending() {
            ctx.request_repaint();
        }
    }
}

impl VaultApp {
    /// Run a panel action. Async ones are spawned and repaint when they settle.
    fn dispatch(&mut self, action: UiAction, ctx: &egui::Context) {
        match action {
            UiAction::SignIn(form) => {
                let controller = self.controller.clone();
                let auth = self.auth.clone();
                let ctx = ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = workflow::login(&controller, &form, auth.as_ref()).await {
                        log::debug!("Login did not complete: {}", e);
                    }
                    ctx.request_repaint();
                });
            }
            UiAction::Logout => self.controller.borrow_mut().logout(),
            UiAction::NewChat => {
                let id = self.controller.borrow_mut().new_chat();
                log::debug!("New chat marker {}", id);
            }
            UiAction::SelectChat(id) => self.controller.borrow_mut().select_chat(&id),
            UiAction::DeleteChat(id) => {
                if !self.controller.borrow_mut().delete_chat(&id) {
                    log::warn!("No chat with id {}", id);
                }
            }
            UiAction::Generate(text) => {
                let controller = self.controller.clone();
                let responder = self.responder.clone();
                let ctx = ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = workflow::submit(&controller, &text, responder.as_ref()).await {
                        log::debug!("Submit did not complete: {}", e);
                    }
                    ctx.request_repaint();
                });
            }
            UiAction::Translate(slot) => {
                let controller = self.controller.clone();
                let translator = self.translator.clone();
                let ctx = ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = workflow::translate(&controller, slot, translator.as_ref()).await {
                        log::debug!("Translation did not complete: {}", e);
                    }
                    ctx.request_repaint();
                });
            }
            UiAction::Copy { label, text } => {
                let events = self.event_bus.clone();
                let clipboard = self.clipboard.clone();
                let ctx = ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = workflow::copy(&events, clipboard.as_ref(), label, &text).await {
                        log::debug!("Copy did not complete: {}", e);
                    }
                    ctx.request_repaint();
                });
            }
            UiAction::Speak { text, language } => {
                if let Err(e) =
                    workflow::speak(&self.event_bus, self.speech.as_ref(), &text, language.as_deref())
                {
                    log::debug!("Speech unavailable: {}", e);
                }
            }
        }
    }
}
