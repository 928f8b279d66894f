// Mote spawning, cursor-follower smoothing, parallax scrub and the typing
// reveal timeline.

use folio_core::ambient::{parallax_percent, spawn_mote_field, step_follower, typed_chars};
use folio_core::constants::*;
use glam::Vec2;

#[test]
fn mote_field_has_fixed_count_and_sane_ranges() {
    let motes = spawn_mote_field(9);
    assert_eq!(motes.len(), MOTE_COUNT);
    for m in &motes {
        assert!(m.size_px >= MOTE_SIZE_MIN_PX && m.size_px < MOTE_SIZE_MAX_PX);
        assert!(m.opacity >= MOTE_OPACITY_MIN && m.opacity < MOTE_OPACITY_MAX);
        assert!((0.0..100.0).contains(&m.left_pct));
        assert!((0.0..100.0).contains(&m.top_pct));
        assert!(m.drift_x_px.abs() <= MOTE_DRIFT_MAX_PX);
        assert!(m.duration_sec >= MOTE_DURATION_MIN_SEC && m.duration_sec < MOTE_DURATION_MAX_SEC);
        assert!((0.0..MOTE_DELAY_MAX_SEC).contains(&m.delay_sec));
    }
    // Seeded: reproducible field.
    assert_eq!(spawn_mote_field(9), motes);
}

#[test]
fn mote_rests_through_its_delay_then_rises_and_fades() {
    let motes = spawn_mote_field(1);
    let m = &motes[0];

    let rest = m.pose_at(0.0);
    assert_eq!(rest.dy_px, 0.0);
    assert_eq!(rest.opacity, m.opacity);

    let mid = m.pose_at(m.delay_sec as f64 + m.duration_sec as f64 * 0.5);
    assert!((mid.dy_px + MOTE_RISE_PX * 0.5).abs() < 1e-3);
    assert!((mid.opacity - m.opacity * 0.5).abs() < 1e-3);
    assert!(mid.dx_px.abs() <= m.drift_x_px.abs() + 1e-6);
}

#[test]
fn mote_animation_repeats() {
    let motes = spawn_mote_field(2);
    let m = &motes[0];
    let in_first = m.pose_at(m.delay_sec as f64 + m.duration_sec as f64 * 0.25);
    let in_second = m.pose_at(m.delay_sec as f64 + m.duration_sec as f64 * 1.25);
    assert!((in_first.dy_px - in_second.dy_px).abs() < 1e-3);
    assert!((in_first.opacity - in_second.opacity).abs() < 1e-3);
}

#[test]
fn follower_approaches_target_without_overshoot() {
    let target = Vec2::new(100.0, 40.0);
    let mut pos = Vec2::ZERO;
    let mut prev_dist = pos.distance(target);
    for _ in 0..60 {
        pos = step_follower(pos, target, 1.0 / 60.0);
        let dist = pos.distance(target);
        assert!(dist <= prev_dist + 1e-4);
        prev_dist = dist;
    }
    // One second is ten smoothing time constants; effectively converged.
    assert!(pos.distance(target) < 0.01 * target.length());
}

#[test]
fn follower_zero_dt_stays_put() {
    let pos = Vec2::new(3.0, 4.0);
    assert_eq!(step_follower(pos, Vec2::new(50.0, 50.0), 0.0), pos);
}

#[test]
fn parallax_scrubs_from_zero_to_max() {
    // Hero starts at the top of the document, 800px tall, 800px viewport.
    assert_eq!(parallax_percent(-800.0, 0.0, 800.0, 800.0), 0.0);
    let mid = parallax_percent(0.0, 0.0, 800.0, 800.0);
    assert!((mid - PARALLAX_MAX_PERCENT * 0.5).abs() < 1e-4);
    assert_eq!(parallax_percent(800.0, 0.0, 800.0, 800.0), PARALLAX_MAX_PERCENT);
    // Clamped past the extent.
    assert_eq!(
        parallax_percent(5000.0, 0.0, 800.0, 800.0),
        PARALLAX_MAX_PERCENT
    );
    // Degenerate layout.
    assert_eq!(parallax_percent(100.0, 0.0, 0.0, 0.0), 0.0);
}

#[test]
fn typing_reveals_proportionally_and_staggers_lines() {
    // 10 chars at 0.05 s/char = 0.5s per line.
    assert_eq!(typed_chars(10, 0, 0.0), 0);
    assert_eq!(typed_chars(10, 0, 0.25), 5);
    assert_eq!(typed_chars(10, 0, 0.5), 10);
    assert_eq!(typed_chars(10, 0, 100.0), 10);

    // Second line waits for its 0.5s stagger.
    assert_eq!(typed_chars(10, 1, 0.5), 0);
    assert_eq!(typed_chars(10, 1, 0.75), 5);
    assert_eq!(typed_chars(10, 1, 1.0), 10);
}

#[test]
fn typing_handles_empty_lines() {
    assert_eq!(typed_chars(0, 0, 10.0), 0);
}

#[test]
fn typing_is_monotonic_per_line() {
    let mut prev = 0;
    for i in 0..=100 {
        let n = typed_chars(40, 2, i as f64 * 0.05);
        assert!(n >= prev);
        assert!(n <= 40);
        prev = n;
    }
    assert_eq!(prev, 40);
}
