//! Minimal requestAnimationFrame drivers for one-shot animations.
//!
//! The render loop in `frame.rs` owns the persistent scene; these runners
//! exist for the short-lived DOM tweens (counters, typing, smooth scroll,
//! mote field). Finished runners simply stop rescheduling; like event
//! handlers, their closures are leaked for the life of the page.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Call `f` with the current wall-clock seconds once per animation frame
/// until it returns `false`.
pub fn run_frames(mut f: impl FnMut(f64) -> bool + 'static) {
    let cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let cb_clone = cb.clone();
    *cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if f(dom::now_sec()) {
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    cb_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                );
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(cb.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Drive `on_progress` with raw progress in \[0, 1\] over `duration_sec`,
/// anchored to the first frame. The caller applies its own easing. The
/// final call always reports exactly 1.
pub fn run_tween(duration_sec: f64, mut on_progress: impl FnMut(f64) + 'static) {
    let mut start: Option<f64> = None;
    run_frames(move |now| {
        let t0 = *start.get_or_insert(now);
        let t = if duration_sec > 0.0 {
            ((now - t0) / duration_sec).clamp(0.0, 1.0)
        } else {
            1.0
        };
        on_progress(t);
        t < 1.0
    });
}
