use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use folio_core::ambient::step_follower;
use folio_core::constants::FOLLOWER_SIZE_PX;

use crate::constants::ACCENT_CSS;
use crate::{dom, tween};

fn make_follower(document: &web::Document) -> Option<web::Element> {
    let el = document.create_element("div").ok()?;
    el.set_class_name("cursor");
    dom::set_style(&el, "position", "fixed");
    dom::set_style(&el, "width", &format!("{FOLLOWER_SIZE_PX}px"));
    dom::set_style(&el, "height", &format!("{FOLLOWER_SIZE_PX}px"));
    dom::set_style(
        &el,
        "background",
        &format!("radial-gradient(circle, {ACCENT_CSS}, transparent)"),
    );
    dom::set_style(&el, "border-radius", "50%");
    dom::set_style(&el, "pointer-events", "none");
    dom::set_style(&el, "z-index", "9999");
    dom::set_style(&el, "mix-blend-mode", "difference");
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

/// Lazily create the follower on the first pointer move, then chase the
/// pointer with a short smoothing step every frame.
pub fn wire_cursor_follower(document: &web::Document) {
    let target: Rc<RefCell<Option<Vec2>>> = Rc::new(RefCell::new(None));
    let started = Rc::new(RefCell::new(false));

    let document = document.clone();
    let target_move = target.clone();
    dom::add_listener(&document.clone(), "mousemove", move |ev| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pointer = Vec2::new(mouse.client_x() as f32, mouse.client_y() as f32);
        *target_move.borrow_mut() = Some(pointer);

        if *started.borrow() {
            return;
        }
        let Some(el) = make_follower(&document) else {
            return;
        };
        *started.borrow_mut() = true;

        let target_loop = target_move.clone();
        let mut pos = pointer;
        let mut last = dom::now_sec();
        tween::run_frames(move |now| {
            let dt = (now - last) as f32;
            last = now;
            if let Some(t) = *target_loop.borrow() {
                pos = step_follower(pos, t, dt);
                let half = FOLLOWER_SIZE_PX / 2.0;
                dom::set_style(&el, "left", &format!("{}px", pos.x - half));
                dom::set_style(&el, "top", &format!("{}px", pos.y - half));
            }
            true
        });
    });
}
