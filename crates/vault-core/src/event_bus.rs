//! Event queue between the controller and the UI.
//!
//! Single-threaded (WASM), shared through `Rc<RefCell<..>>`. The controller
//! and the async workflows push; the app drains once per frame and folds the
//! events into toasts and UI state.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use vault_types::event::{AppEvent, Notice};

/// Events kept between two drains. The oldest are dropped past this.
pub const MAX_BUFFERED_EVENTS: usize = 256;

#[derive(Default)]
struct Queue {
    events: VecDeque<AppEvent>,
    dropped: usize,
}

/// Shared handle, clone-cheap via Rc.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<Queue>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: AppEvent) {
        let mut queue = self.queue.borrow_mut();
        if queue.events.len() == MAX_BUFFERED_EVENTS {
            queue.events.pop_front();
            queue.dropped += 1;
        }
        queue.events.push_back(event);
    }

    /// Queue a toast-worthy notice
    pub fn notify(&self, notice: Notice) {
        log::debug!("Notice: {} ({})", notice.title, notice.description);
        self.emit(AppEvent::Notice(notice));
    }

    /// Take everything queued since the last frame.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut queue = self.queue.borrow_mut();
        if queue.dropped > 0 {
            log::warn!("Event queue overflowed, {} events dropped", queue.dropped);
            queue.dropped = 0;
        }
        queue.events.drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().events.is_empty()
    }
}
