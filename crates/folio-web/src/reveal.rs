//! Scroll-reveal wiring: entrance classes, glow shadows and the additive
//! visibility observer, all decided by `folio_core::reveal`.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use folio_core::constants::*;
use folio_core::reveal::{self, Effect, RevealKind, RevealState};

use crate::constants::{EASE_BACK_OUT_CSS, EASE_OUT_CUBIC_CSS, GLOW_NONE_CSS, GLOW_SHADOW_CSS};
use crate::{dom, stats};

struct Tracked {
    el: web::Element,
    state: RevealState,
}

fn collect(document: &web::Document) -> Vec<Tracked> {
    let mut tracked = Vec::new();
    let mut push_all = |selector: &str, kind: RevealKind| {
        for (i, el) in dom::query_all(document, selector).into_iter().enumerate() {
            tracked.push(Tracked {
                el,
                state: RevealState::new(kind, i),
            });
        }
    };
    push_all("section", RevealKind::Section);
    push_all(".timeline-item", RevealKind::TimelineItem);
    push_all(".cert-card, .project-card", RevealKind::Card);
    push_all(".skill-item", RevealKind::Skill);
    tracked
}

/// Seed the stylesheet-driven entrance: start pose and per-element timing.
fn prepare(t: &Tracked) {
    let e = t.state.entrance();
    dom::set_css_var(&t.el, "--enter-dx", &format!("{}px", e.dx_px));
    dom::set_css_var(&t.el, "--enter-dy", &format!("{}px", e.dy_px));
    dom::set_css_var(&t.el, "--enter-scale", &format!("{}", e.start_scale));
    dom::set_css_var(&t.el, "--enter-dur", &format!("{}s", e.duration_sec));
    dom::set_css_var(&t.el, "--enter-delay", &format!("{}s", e.delay_sec));
    let ease = match t.state.kind() {
        RevealKind::Card => EASE_BACK_OUT_CSS,
        _ => EASE_OUT_CUBIC_CSS,
    };
    dom::set_css_var(&t.el, "--enter-ease", ease);
    dom::add_class(&t.el, "reveal");
}

fn apply_effects(el: &web::Element, effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::PlayEntrance => dom::add_class(el, "revealed"),
            Effect::ReverseEntrance => dom::remove_class(el, "revealed"),
            Effect::GlowOn { delay_sec } => {
                dom::set_css_var(el, "--glow-delay", &format!("{}s", delay_sec));
                dom::set_style(el, "box-shadow", GLOW_SHADOW_CSS);
            }
            Effect::GlowOff { delay_sec } => {
                dom::set_css_var(el, "--glow-delay", &format!("{}s", delay_sec));
                dom::set_style(el, "box-shadow", GLOW_NONE_CSS);
            }
            Effect::FillSkill => {
                if let Ok(Some(level)) = el.query_selector(".skill-level") {
                    stats::start_skill_fill(level);
                }
            }
        }
    }
}

fn update_all(document: &web::Document, tracked: &mut [Tracked]) {
    let vh = dom::viewport_height(document);
    for t in tracked.iter_mut() {
        let rect = t.el.get_bounding_client_rect();
        let fraction = t.state.kind().trigger_fraction();
        // Sections only ever exit upward; the glowing kinds also leave by
        // scrolling off the top.
        let in_zone = match t.state.kind() {
            RevealKind::Section => reveal::in_trigger_zone(rect.top(), vh, fraction),
            _ => reveal::in_glow_zone(rect.top(), rect.bottom(), vh, fraction),
        };
        let effects = t.state.update(in_zone);
        apply_effects(&t.el, &effects);
    }
}

fn wire_visibility_observer(tracked: Rc<RefCell<Vec<Tracked>>>) {
    let targets: Vec<web::Element> = tracked
        .borrow()
        .iter()
        .filter(|t| t.state.kind() != RevealKind::Section)
        .map(|t| t.el.clone())
        .collect();

    let tracked_cb = tracked.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let mut tracked = tracked_cb.borrow_mut();
                for t in tracked.iter_mut() {
                    if t.el.is_same_node(Some(target.as_ref())) && t.state.mark_visible() {
                        dom::add_class(&t.el, "animate");
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    options.set_root_margin(&format!("0px 0px -{}px 0px", OBSERVER_BOTTOM_MARGIN_PX as i32));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        Ok(observer) => {
            for el in &targets {
                observer.observe(el);
            }
            callback.forget();
        }
        Err(e) => log::warn!("IntersectionObserver unavailable: {:?}", e),
    }
}

pub fn wire(document: &web::Document) {
    let tracked = collect(document);
    if tracked.is_empty() {
        log::warn!("no revealable elements; scroll reveal disabled");
        return;
    }
    for t in &tracked {
        prepare(t);
    }
    let tracked = Rc::new(RefCell::new(tracked));

    wire_visibility_observer(tracked.clone());

    // Initial pass so above-the-fold content reveals without scrolling.
    update_all(document, &mut tracked.borrow_mut());

    let document = document.clone();
    let tracked_scroll = tracked.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "scroll", move |_| {
            update_all(&document, &mut tracked_scroll.borrow_mut());
        });
    }
    log::info!("scroll reveal wired for {} elements", tracked.borrow().len());
}
