// Menu toggle parity, navbar condensing and active-section derivation.

use folio_core::nav::{
    current_section_index, scroll_target_y, Menu, NavBar, ScrollDirection, SectionTracker,
};

#[test]
fn menu_starts_closed() {
    let menu = Menu::new();
    assert!(!menu.is_open());
    let pose = menu.pose();
    assert!(!pose.open);
    for bar in &pose.bars {
        assert_eq!(bar.rotation_deg, 0.0);
        assert_eq!(bar.y_px, 0.0);
        assert_eq!(bar.opacity, 1.0);
    }
}

#[test]
fn toggle_open_poses_bars_as_cross() {
    let mut menu = Menu::new();
    let pose = menu.toggle();
    assert!(pose.open);
    assert_eq!(pose.bars[0].rotation_deg, 45.0);
    assert_eq!(pose.bars[0].y_px, 7.0);
    assert_eq!(pose.bars[1].opacity, 0.0);
    assert_eq!(pose.bars[2].rotation_deg, -45.0);
    assert_eq!(pose.bars[2].y_px, -7.0);
}

#[test]
fn toggle_parity_matches_open_state() {
    let mut menu = Menu::new();
    for i in 1..=6 {
        let pose = menu.toggle();
        let expect_open = i % 2 == 1;
        assert_eq!(pose.open, expect_open);
        assert_eq!(menu.is_open(), expect_open);
        // Icon state always agrees with the flag.
        assert_eq!(pose.bars[1].opacity == 0.0, expect_open);
    }
}

#[test]
fn close_is_noop_when_already_closed() {
    let mut menu = Menu::new();
    assert!(menu.close().is_none());
    menu.toggle();
    let pose = menu.close().expect("was open");
    assert!(!pose.open);
    assert!(menu.close().is_none());
}

#[test]
fn navbar_condenses_scrolling_down_past_mark() {
    let mut bar = NavBar::new();
    assert!(bar.update(120.0, ScrollDirection::Down));
    assert!(bar.is_condensed());
    assert!(!bar.update(120.0, ScrollDirection::Up));
    assert!(!bar.update(40.0, ScrollDirection::Down));
}

#[test]
fn tracker_scroll_overrides_click() {
    let mut tracker = SectionTracker::new();
    assert_eq!(tracker.active(), None);
    tracker.click("about");
    assert_eq!(tracker.active(), Some("about"));
    // The scroll watcher writes last and wins.
    tracker.enter("skills");
    assert_eq!(tracker.active(), Some("skills"));
    tracker.enter_back("about");
    assert_eq!(tracker.active(), Some("about"));
}

#[test]
fn scroll_target_offsets_by_header_and_clamps() {
    assert_eq!(scroll_target_y(500.0), 430.0);
    assert_eq!(scroll_target_y(10.0), 0.0);
}

#[test]
fn current_section_is_last_past_capture_line() {
    // capture line at 30% of a 1000px viewport = 300
    let tops = [-200.0, 100.0, 600.0];
    assert_eq!(current_section_index(&tops, 1000.0), Some(1));
    let none_reached = [400.0, 900.0];
    assert_eq!(current_section_index(&none_reached, 1000.0), None);
    let all_passed = [-900.0, -400.0, 100.0];
    assert_eq!(current_section_index(&all_passed, 1000.0), Some(2));
    assert_eq!(current_section_index(&[], 1000.0), None);
}
