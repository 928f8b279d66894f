use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::overlay::{self, ModalHandle};

/// Escape closes the modal while it is visible; other keys pass through.
pub fn handle_global_keydown(ev: &web::KeyboardEvent, modal: &Option<Rc<ModalHandle>>) {
    if ev.key() != "Escape" {
        return;
    }
    if let Some(modal) = modal {
        if modal.is_visible() {
            overlay::close(modal);
        }
    }
}

pub fn wire_global_keydown(modal: Option<Rc<ModalHandle>>) {
    if let Some(window) = web::window() {
        dom::add_listener(&window, "keydown", move |ev| {
            if let Some(key_ev) = ev.dyn_ref::<web::KeyboardEvent>() {
                handle_global_keydown(key_ev, &modal);
            }
        });
    }
}
