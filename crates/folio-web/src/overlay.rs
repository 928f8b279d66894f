//! Content modal: open by registry id, close by backdrop click, Escape or
//! the close control. The root stays in the layout until the exit fade
//! finishes; `folio_core::modal` arbitrates the races.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use folio_core::constants::{MODAL_CONTENT_START_SCALE, MODAL_FADE_SEC};
use folio_core::modal::ModalController;

use crate::dom;

pub struct ModalHandle {
    controller: RefCell<ModalController>,
    root: web::Element,
    body: web::Element,
}

impl ModalHandle {
    pub fn is_visible(&self) -> bool {
        self.controller.borrow().is_visible()
    }
}

/// Inject the entry body and play the fade/scale entrance. Unknown ids do
/// nothing.
pub fn open(handle: &Rc<ModalHandle>, id: &str) {
    let Some(entry) = handle.controller.borrow_mut().open(id) else {
        log::warn!("no modal content for id {id:?}");
        return;
    };
    handle.body.set_inner_html(entry.body);
    dom::set_style(&handle.root, "display", "block");
    dom::force_reflow(&handle.root);
    dom::add_class(&handle.root, "open");
}

/// Start the exit fade; the root is hidden only after it completes, and
/// only if no reopen supersedes the ticket in the meantime.
pub fn close(handle: &Rc<ModalHandle>) {
    let Some(ticket) = handle.controller.borrow_mut().close() else {
        return;
    };
    dom::remove_class(&handle.root, "open");
    let handle = handle.clone();
    dom::set_timeout((ticket.fade_sec * 1000.0) as i32, move || {
        if handle.controller.borrow_mut().finish_close(ticket) {
            dom::set_style(&handle.root, "display", "none");
        }
    });
}

pub fn wire(document: &web::Document) -> Option<Rc<ModalHandle>> {
    let Some(root) = dom::by_id(document, "modal") else {
        log::warn!("missing #modal; modal system disabled");
        return None;
    };
    let Some(body) = dom::by_id(document, "modal-body") else {
        log::warn!("missing #modal-body; modal system disabled");
        return None;
    };
    // Entrance/exit timing consumed by the stylesheet transitions.
    dom::set_css_var(&root, "--modal-fade", &format!("{MODAL_FADE_SEC}s"));
    dom::set_css_var(&root, "--modal-scale", &format!("{MODAL_CONTENT_START_SCALE}"));

    let handle = Rc::new(ModalHandle {
        controller: RefCell::new(ModalController::new()),
        root,
        body,
    });

    // Openers carry their registry id in a data attribute.
    for opener in dom::query_all(document, "[data-modal]") {
        let Some(id) = opener.get_attribute("data-modal") else {
            continue;
        };
        let handle_cb = handle.clone();
        dom::add_listener(&opener, "click", move |_| open(&handle_cb, &id));
    }

    for closer in dom::query_all(document, ".modal-close") {
        let handle_cb = handle.clone();
        dom::add_listener(&closer, "click", move |_| close(&handle_cb));
    }

    // Backdrop click: only when the click lands on the root itself, not on
    // the inner content.
    {
        let handle_cb = handle.clone();
        let root = handle.root.clone();
        dom::add_listener(&handle.root, "click", move |ev| {
            let Some(target) = ev.target() else {
                return;
            };
            let Some(target_el) = target.dyn_ref::<web::Element>().cloned() else {
                return;
            };
            if root.is_same_node(Some(target_el.as_ref())) {
                close(&handle_cb);
            }
        });
    }

    log::info!("modal system wired");
    Some(handle)
}
