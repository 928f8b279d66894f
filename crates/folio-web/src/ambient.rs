//! Ambient effects wiring: the floating mote field, hero parallax scrub and
//! the typing reveal on the hero title lines.

use web_sys as web;

use folio_core::ambient::{parallax_percent, spawn_mote_field, Mote};
use folio_core::constants::TYPE_START_DELAY_SEC;

use crate::constants::MOTE_COLOR_CSS;
use crate::{dom, tween};

fn make_mote_element(document: &web::Document, mote: &Mote) -> Option<web::Element> {
    let el = document.create_element("div").ok()?;
    dom::set_style(&el, "position", "absolute");
    dom::set_style(&el, "width", &format!("{}px", mote.size_px));
    dom::set_style(&el, "height", &format!("{}px", mote.size_px));
    dom::set_style(&el, "background", MOTE_COLOR_CSS);
    dom::set_style(&el, "border-radius", "50%");
    dom::set_style(&el, "opacity", &format!("{}", mote.opacity));
    dom::set_style(&el, "left", &format!("{}%", mote.left_pct));
    dom::set_style(&el, "top", &format!("{}%", mote.top_pct));
    dom::set_style(&el, "pointer-events", "none");
    Some(el)
}

fn wire_motes(document: &web::Document) {
    let Ok(Some(container)) = document.query_selector(".floating-particles") else {
        log::warn!("no .floating-particles container; motes disabled");
        return;
    };
    // Cosmetic effect: a fresh field every load is fine.
    let motes = spawn_mote_field(js_sys::Date::now() as u64);
    let mut spawned: Vec<(web::Element, Mote)> = Vec::with_capacity(motes.len());
    for mote in motes {
        if let Some(el) = make_mote_element(document, &mote) {
            let _ = container.append_child(&el);
            spawned.push((el, mote));
        }
    }

    let start = dom::now_sec();
    tween::run_frames(move |now| {
        for (el, mote) in &spawned {
            let pose = mote.pose_at(now - start);
            dom::set_style(
                el,
                "transform",
                &format!("translate({}px, {}px)", pose.dx_px, pose.dy_px),
            );
            dom::set_style(el, "opacity", &format!("{}", pose.opacity));
        }
        true
    });
}

fn wire_parallax(document: &web::Document) {
    let Ok(Some(hero)) = document.query_selector(".hero-section") else {
        return;
    };
    let Ok(Some(content)) = document.query_selector(".hero-content") else {
        return;
    };
    let document = document.clone();
    let apply = move || {
        let y = dom::scroll_y();
        let rect = hero.get_bounding_client_rect();
        let pct = parallax_percent(
            y,
            y + rect.top(),
            rect.height(),
            dom::viewport_height(&document),
        );
        dom::set_style(&content, "transform", &format!("translateY({pct}%)"));
    };
    apply();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "scroll", move |_| apply());
    }
}

fn wire_typing(document: &web::Document) {
    let lines: Vec<(web::Element, String)> = dom::query_all(document, ".title-line")
        .into_iter()
        .filter_map(|el| {
            let text = el.text_content()?;
            Some((el, text))
        })
        .collect();
    if lines.is_empty() {
        return;
    }
    dom::set_timeout((TYPE_START_DELAY_SEC * 1000.0) as i32, move || {
        for (el, _) in &lines {
            el.set_text_content(Some(""));
        }
        let start = dom::now_sec();
        tween::run_frames(move |now| {
            let mut all_done = true;
            for (i, (el, text)) in lines.iter().enumerate() {
                let len = text.chars().count();
                let shown = folio_core::ambient::typed_chars(len, i, now - start);
                let prefix: String = text.chars().take(shown).collect();
                el.set_text_content(Some(&prefix));
                if shown < len {
                    all_done = false;
                }
            }
            !all_done
        });
    });
}

pub fn wire(document: &web::Document) {
    wire_motes(document);
    wire_parallax(document);
    wire_typing(document);
}
