//! Experience carousel wiring: arrow stepping, indicator jumps, and the
//! entrance animation on the newly active panel.

use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use folio_core::carousel::Carousel;

use crate::constants::{EASE_BACK_OUT_CSS, EASE_OUT_CUBIC_CSS};
use crate::dom;

/// Restart the stylesheet-driven entrance from the given start pose.
///
/// The panel must already be displayed: the reset happens with transitions
/// suppressed, the reflow commits the start pose, and only then does the
/// target class animate in. Without the suppress/reflow pair a replayed
/// entrance would start from the previous shown pose and not move.
fn play_entrance(el: &web::Element, dx_px: f32, scale: f32, duration_sec: f32, ease_css: &str) {
    dom::set_css_var(el, "--enter-dx", &format!("{dx_px}px"));
    dom::set_css_var(el, "--enter-dy", "0px");
    dom::set_css_var(el, "--enter-scale", &format!("{scale}"));
    dom::set_css_var(el, "--enter-dur", &format!("{duration_sec}s"));
    dom::set_css_var(el, "--enter-ease", ease_css);
    dom::set_style(el, "transition", "none");
    dom::add_class(el, "enter");
    dom::remove_class(el, "enter-active");
    dom::force_reflow(el);
    dom::set_style(el, "transition", "");
    dom::add_class(el, "enter-active");
}

struct Deck {
    cards: Vec<web::Element>,
    indicators: Vec<web::Element>,
}

impl Deck {
    fn deactivate(&self, n: usize) {
        if let Some(card) = self.cards.get(n - 1) {
            dom::remove_class(card, "active");
        }
        if let Some(ind) = self.indicators.get(n - 1) {
            dom::remove_class(ind, "active");
        }
    }

    fn activate(&self, n: usize) {
        if let Some(card) = self.cards.get(n - 1) {
            dom::add_class(card, "active");
        }
        if let Some(ind) = self.indicators.get(n - 1) {
            dom::add_class(ind, "active");
        }
    }
}

pub fn wire(document: &web::Document) {
    let cards = dom::query_all(document, ".experience-card");
    if cards.is_empty() {
        log::warn!("no experience cards; carousel disabled");
        return;
    }
    let deck = Rc::new(Deck {
        indicators: dom::query_all(document, ".indicator"),
        cards,
    });
    let carousel = Rc::new(RefCell::new(Carousel::new(deck.cards.len())));

    // Show the initial panel; exactly one card/indicator pair is active.
    for n in 1..=deck.cards.len() {
        deck.deactivate(n);
    }
    deck.activate(carousel.borrow().current());

    for (direction, id) in [(-1_i32, "carousel-prev"), (1, "carousel-next")] {
        let deck_cb = deck.clone();
        let carousel_cb = carousel.clone();
        dom::add_click_listener(document, id, move || {
            let slide = carousel_cb.borrow_mut().advance(direction);
            deck_cb.deactivate(slide.from);
            // Display the panel first; a hidden element skips transitions.
            deck_cb.activate(slide.to);
            if let Some(card) = deck_cb.cards.get(slide.to - 1) {
                play_entrance(
                    card,
                    slide.entry_offset_px,
                    1.0,
                    slide.duration_sec,
                    EASE_OUT_CUBIC_CSS,
                );
            }
        });
    }

    for (i, indicator) in deck.indicators.iter().enumerate() {
        let deck_cb = deck.clone();
        let carousel_cb = carousel.clone();
        dom::add_listener(indicator, "click", move |_| {
            let Some(pop) = carousel_cb.borrow_mut().select(i + 1) else {
                return;
            };
            deck_cb.deactivate(pop.from);
            deck_cb.activate(pop.to);
            if let Some(card) = deck_cb.cards.get(pop.to - 1) {
                play_entrance(card, 0.0, pop.start_scale, pop.duration_sec, EASE_BACK_OUT_CSS);
            }
        });
    }

    log::info!("carousel wired with {} panels", deck.cards.len());
}
