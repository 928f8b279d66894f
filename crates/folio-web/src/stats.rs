//! Stat counters and skill-bar fills. Values come from `data-target` /
//! `data-level` attributes; the animations are one-shot per element.

use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use folio_core::constants::SECTION_TRIGGER_FRACTION;
use folio_core::reveal::in_trigger_zone;
use folio_core::stats::{CountUp, SkillFill};

use crate::{dom, tween};

struct Counter {
    el: web::Element,
    state: CountUp,
}

fn fire_entered(document: &web::Document, counters: &mut [Counter]) {
    let vh = dom::viewport_height(document);
    let now = dom::now_sec();
    for c in counters.iter_mut() {
        let rect = c.el.get_bounding_client_rect();
        if !in_trigger_zone(rect.top(), vh, SECTION_TRIGGER_FRACTION) {
            continue;
        }
        if !c.state.fire(now) {
            continue;
        }
        let el = c.el.clone();
        let state = c.state;
        tween::run_frames(move |now| {
            el.set_text_content(Some(&state.value_at(now).to_string()));
            !state.is_done(now)
        });
    }
}

pub fn wire_counters(document: &web::Document) {
    let counters: Vec<Counter> = dom::query_all(document, ".stat-number")
        .into_iter()
        .filter_map(|el| {
            let target = el.get_attribute("data-target")?.parse::<u32>().ok()?;
            Some(Counter {
                el,
                state: CountUp::new(target),
            })
        })
        .collect();
    if counters.is_empty() {
        log::warn!("no stat counters found");
        return;
    }
    let counters = Rc::new(RefCell::new(counters));

    fire_entered(document, &mut counters.borrow_mut());

    let document = document.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "scroll", move |_| {
            fire_entered(&document, &mut counters.borrow_mut());
        });
    }
}

/// Start the one-shot width fill on a `.skill-level` element. Called by the
/// reveal controller when the owning skill row first enters its zone.
pub fn start_skill_fill(level_el: web::Element) {
    let Some(percent) = level_el
        .get_attribute("data-level")
        .and_then(|s| s.parse::<f32>().ok())
    else {
        return;
    };
    let mut fill = SkillFill::new(percent);
    fill.fire(dom::now_sec());
    tween::run_frames(move |now| {
        dom::set_css_var(&level_el, "--skill-width", &format!("{}%", fill.width_at(now)));
        !fill.is_done(now)
    });
}
