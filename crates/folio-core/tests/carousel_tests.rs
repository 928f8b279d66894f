// Cyclic invariants and entrance parameters of the experience carousel.

use folio_core::carousel::Carousel;

#[test]
fn starts_on_first_panel() {
    let c = Carousel::new(3);
    assert_eq!(c.current(), 1);
    assert_eq!(c.len(), 3);
}

#[test]
fn advance_wraps_forward() {
    let mut c = Carousel::new(3);
    assert_eq!(c.advance(1).to, 2);
    assert_eq!(c.advance(1).to, 3);
    let slide = c.advance(1);
    assert_eq!(slide.from, 3);
    assert_eq!(slide.to, 1);
}

#[test]
fn advance_wraps_backward() {
    let mut c = Carousel::new(3);
    let slide = c.advance(-1);
    assert_eq!(slide.from, 1);
    assert_eq!(slide.to, 3);
    assert_eq!(c.advance(-1).to, 2);
}

#[test]
fn entry_offset_sign_matches_direction() {
    let mut c = Carousel::new(4);
    assert!(c.advance(1).entry_offset_px > 0.0);
    assert!(c.advance(-1).entry_offset_px < 0.0);
}

#[test]
fn current_stays_in_range_under_any_sequence() {
    let mut c = Carousel::new(5);
    let steps = [1, 1, -1, 1, -1, -1, -1, 1, 1, 1, 1, -1, 1, -1, -1];
    for d in steps {
        c.advance(d);
        assert!((1..=5).contains(&c.current()));
    }
}

#[test]
fn two_panel_carousel_alternates() {
    let mut c = Carousel::new(2);
    for _ in 0..4 {
        assert_eq!(c.advance(1).to, 2);
        assert_eq!(c.advance(1).to, 1);
    }
}

#[test]
fn select_current_is_noop() {
    let mut c = Carousel::new(3);
    assert!(c.select(1).is_none());
    assert_eq!(c.current(), 1);
}

#[test]
fn select_out_of_range_is_noop() {
    let mut c = Carousel::new(3);
    assert!(c.select(0).is_none());
    assert!(c.select(4).is_none());
    assert_eq!(c.current(), 1);
}

#[test]
fn select_jumps_directly() {
    let mut c = Carousel::new(5);
    let pop = c.select(4).expect("valid jump");
    assert_eq!(pop.from, 1);
    assert_eq!(pop.to, 4);
    assert_eq!(c.current(), 4);
    assert!(pop.start_scale < 1.0);
}

#[test]
fn select_then_advance_continues_from_selection() {
    let mut c = Carousel::new(5);
    assert!(c.select(5).is_some());
    assert_eq!(c.advance(1).to, 1);
}
