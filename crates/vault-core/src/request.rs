//! Request lifecycle for one asynchronous stub call.
//!
//! `Idle → Pending → Resolved | Failed`. Every `begin` hands out a ticket;
//! `resolve`/`fail` only apply when the ticket is the one currently pending,
//! so a result arriving after `cancel` (or after a newer request) is dropped.

use vault_types::{Result, VaultError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    Idle,
    Pending { ticket: Ticket },
    Resolved(T),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Request<T> {
    state: RequestState<T>,
    next_ticket: u64,
}

impl<T> Request<T> {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, RequestState::Pending { .. })
    }

    pub fn value(&self) -> Option<&T> {
        match &self.state {
            RequestState::Resolved(v) => Some(v),
            _ => None,
        }
    }

    /// Move to `Pending`. Rejects while another call is in flight.
    pub fn begin(&mut self) -> Result<Ticket> {
        if self.is_pending() {
            return Err(VaultError::Busy);
        }
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.state = RequestState::Pending { ticket };
        Ok(ticket)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        matches!(self.state, RequestState::Pending { ticket: t } if t == ticket)
    }

    /// Returns false (and changes nothing) for a stale ticket.
    pub fn resolve(&mut self, ticket: Ticket, value: T) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = RequestState::Resolved(value);
        true
    }

    pub fn fail(&mut self, ticket: Ticket, reason: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = RequestState::Failed(reason.into());
        true
    }

    /// Drop any pending call; its eventual result will be discarded.
    pub fn cancel(&mut self) {
        self.state = RequestState::Idle;
    }
}

impl<T> Default for Request<T> {
    fn default() -> Self {
        Self::new()
    }
}
