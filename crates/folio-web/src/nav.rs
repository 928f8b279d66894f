//! Navigation wiring: hamburger toggle, smooth scroll on nav-link clicks,
//! and the scroll watcher that owns the condensed-navbar and active-link
//! states.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use folio_core::constants::{MENU_TWEEN_SEC, SMOOTH_SCROLL_SEC};
use folio_core::ease;
use folio_core::nav::{
    current_section_index, scroll_target_y, Menu, MenuPose, NavBar, ScrollDirection,
    SectionTracker,
};

use crate::{dom, tween};

fn apply_menu_pose(
    hamburger: &web::Element,
    nav_menu: &web::Element,
    bars: &[web::Element],
    pose: &MenuPose,
) {
    if pose.open {
        dom::add_class(hamburger, "active");
        dom::add_class(nav_menu, "active");
    } else {
        dom::remove_class(hamburger, "active");
        dom::remove_class(nav_menu, "active");
    }
    for (bar, bp) in bars.iter().zip(pose.bars.iter()) {
        dom::set_style(
            bar,
            "transform",
            &format!("translateY({}px) rotate({}deg)", bp.y_px, bp.rotation_deg),
        );
        dom::set_style(bar, "opacity", &format!("{}", bp.opacity));
    }
}

fn set_active_link(links: &[web::Element], id: &str) {
    let href = format!("#{id}");
    for link in links {
        if link.get_attribute("href").as_deref() == Some(href.as_str()) {
            dom::add_class(link, "active");
        } else {
            dom::remove_class(link, "active");
        }
    }
}

fn smooth_scroll_to(target_y: f64) {
    let start_y = dom::scroll_y();
    tween::run_tween(SMOOTH_SCROLL_SEC as f64, move |t| {
        let eased = ease::power2_in_out(t as f32) as f64;
        if let Some(w) = web::window() {
            w.scroll_to_with_x_and_y(0.0, start_y + (target_y - start_y) * eased);
        }
    });
}

/// Collect the bars of the hamburger icon, in document order.
fn hamburger_bars(hamburger: &web::Element) -> Vec<web::Element> {
    let mut bars = Vec::new();
    if let Ok(list) = hamburger.query_selector_all(".bar") {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into().ok()) {
                bars.push(el);
            }
        }
    }
    bars
}

pub fn wire(document: &web::Document) {
    let Some(hamburger) = dom::by_id(document, "hamburger") else {
        log::warn!("missing #hamburger; navigation disabled");
        return;
    };
    let Some(nav_menu) = dom::by_id(document, "nav-menu") else {
        log::warn!("missing #nav-menu; navigation disabled");
        return;
    };
    let bars = Rc::new(hamburger_bars(&hamburger));
    for bar in bars.iter() {
        dom::set_style(
            bar,
            "transition",
            &format!("transform {MENU_TWEEN_SEC}s ease, opacity {MENU_TWEEN_SEC}s ease"),
        );
    }

    let menu = Rc::new(RefCell::new(Menu::new()));
    let tracker = Rc::new(RefCell::new(SectionTracker::new()));
    let links = Rc::new(dom::query_all(document, ".nav-link"));

    // Hamburger toggle drives the icon, the panel and the flag together.
    {
        let hamburger_cb = hamburger.clone();
        let nav_menu_cb = nav_menu.clone();
        let bars_cb = bars.clone();
        let menu_cb = menu.clone();
        dom::add_listener(&hamburger, "click", move |_| {
            let pose = menu_cb.borrow_mut().toggle();
            apply_menu_pose(&hamburger_cb, &nav_menu_cb, &bars_cb, &pose);
        });
    }

    // Nav links: eager highlight, smooth scroll, close the mobile menu.
    for link in links.iter() {
        let Some(target_id) = link
            .get_attribute("href")
            .and_then(|h| h.strip_prefix('#').map(str::to_owned))
        else {
            continue;
        };
        let document_cb = document.clone();
        let hamburger_cb = hamburger.clone();
        let nav_menu_cb = nav_menu.clone();
        let bars_cb = bars.clone();
        let menu_cb = menu.clone();
        let tracker_cb = tracker.clone();
        let links_cb = links.clone();
        dom::add_listener(link, "click", move |ev| {
            ev.prevent_default();
            if let Some(section) = dom::by_id(&document_cb, &target_id) {
                let top = dom::scroll_y() + section.get_bounding_client_rect().top();
                smooth_scroll_to(scroll_target_y(top));
            }
            if let Some(pose) = menu_cb.borrow_mut().close() {
                apply_menu_pose(&hamburger_cb, &nav_menu_cb, &bars_cb, &pose);
            }
            tracker_cb.borrow_mut().click(&target_id);
            set_active_link(&links_cb, &target_id);
        });
    }

    // Scroll watcher: condensed navbar plus scroll-derived active link.
    // This is the authoritative writer; it also fires during the smooth
    // scroll a click starts, so the derived state catches up on its own.
    {
        let document_cb = document.clone();
        let links_cb = links.clone();
        let tracker_cb = tracker.clone();
        let navbar = Rc::new(RefCell::new(NavBar::new()));
        let sections: Vec<(String, web::Element)> = dom::query_all(document, "section[id]")
            .into_iter()
            .filter_map(|el| el.get_attribute("id").map(|id| (id, el)))
            .collect();
        let prev_y = Rc::new(RefCell::new(dom::scroll_y()));
        if let Some(window) = web::window() {
            dom::add_listener(&window, "scroll", move |_| {
                let y = dom::scroll_y();
                let direction = if y >= *prev_y.borrow() {
                    ScrollDirection::Down
                } else {
                    ScrollDirection::Up
                };
                *prev_y.borrow_mut() = y;

                let condensed = navbar.borrow_mut().update(y, direction);
                if let Some(bar) = dom::by_id(&document_cb, "navbar") {
                    if condensed {
                        dom::add_class(&bar, "scrolled");
                    } else {
                        dom::remove_class(&bar, "scrolled");
                    }
                }

                let vh = dom::viewport_height(&document_cb);
                let tops: Vec<f64> = sections
                    .iter()
                    .map(|(_, el)| el.get_bounding_client_rect().top())
                    .collect();
                if let Some(i) = current_section_index(&tops, vh) {
                    let id = &sections[i].0;
                    let mut tracker = tracker_cb.borrow_mut();
                    if tracker.active() != Some(id.as_str()) {
                        match direction {
                            ScrollDirection::Down => tracker.enter(id),
                            ScrollDirection::Up => tracker.enter_back(id),
                        }
                        set_active_link(&links_cb, id);
                    }
                }
            });
        }
    }
    log::info!("navigation wired ({} links)", links.len());
}
