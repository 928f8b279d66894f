//! Modal open/close lifecycle over the static content registry.
//!
//! The modal stays in the layout during its exit fade; `finish_close` hides
//! it only if the ticket is still current, so reopening mid-fade cancels
//! the pending hide instead of racing it.

use crate::constants::MODAL_FADE_SEC;
use crate::content::{ContentEntry, ContentRegistry};

/// Handed out by [`ModalController::close`]; redeem on fade-out completion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloseTicket {
    pub token: u32,
    pub fade_sec: f32,
}

#[derive(Debug, Default)]
pub struct ModalController {
    registry: ContentRegistry,
    active: Option<&'static ContentEntry>,
    visible: bool,
    token: u32,
}

impl ModalController {
    pub fn new() -> Self {
        Self {
            registry: ContentRegistry::new(),
            active: None,
            visible: false,
            token: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn active(&self) -> Option<&'static ContentEntry> {
        self.active
    }

    /// Unknown identifiers are a silent no-op. A successful open invalidates
    /// any in-flight close ticket.
    pub fn open(&mut self, id: &str) -> Option<&'static ContentEntry> {
        let entry = self.registry.get(id)?;
        self.token = self.token.wrapping_add(1);
        self.active = Some(entry);
        self.visible = true;
        Some(entry)
    }

    /// Begin the exit fade. No-op while hidden.
    pub fn close(&mut self) -> Option<CloseTicket> {
        if !self.visible {
            return None;
        }
        self.token = self.token.wrapping_add(1);
        Some(CloseTicket {
            token: self.token,
            fade_sec: MODAL_FADE_SEC,
        })
    }

    /// Exit fade finished: hide, unless a newer open/close superseded the
    /// ticket. Returns whether the frontend should remove the modal from
    /// the layout now.
    pub fn finish_close(&mut self, ticket: CloseTicket) -> bool {
        if ticket.token != self.token || !self.visible {
            return false;
        }
        self.visible = false;
        self.active = None;
        true
    }
}
