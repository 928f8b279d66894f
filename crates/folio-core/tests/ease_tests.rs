// Easing curve endpoints and shapes.

use folio_core::ease::{back_out, linear, power2_in_out, power2_out, BACK_OVERSHOOT};

#[test]
fn all_curves_pin_their_endpoints() {
    let curves: [fn(f32) -> f32; 4] = [
        linear,
        power2_out,
        power2_in_out,
        |t| back_out(t, BACK_OVERSHOOT),
    ];
    for f in curves {
        assert!((f(0.0) - 0.0).abs() < 1e-6);
        assert!((f(1.0) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn inputs_are_clamped() {
    assert_eq!(linear(-1.0), 0.0);
    assert_eq!(linear(2.0), 1.0);
    assert_eq!(power2_out(2.0), 1.0);
    assert_eq!(back_out(-0.5, BACK_OVERSHOOT), 0.0);
}

#[test]
fn power2_out_front_loads_progress() {
    assert!(power2_out(0.25) > 0.25);
    assert!(power2_out(0.5) > 0.5);
    let mut prev = 0.0;
    for i in 0..=100 {
        let v = power2_out(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn power2_in_out_is_symmetric_around_midpoint() {
    assert!((power2_in_out(0.5) - 0.5).abs() < 1e-6);
    for i in 0..=50 {
        let t = i as f32 / 100.0;
        let a = power2_in_out(t);
        let b = power2_in_out(1.0 - t);
        assert!((a + b - 1.0).abs() < 1e-5);
    }
}

#[test]
fn back_out_overshoots_then_settles() {
    let peak = (0..100)
        .map(|i| back_out(i as f32 / 100.0, BACK_OVERSHOOT))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.0, "back_out should overshoot past 1, got {peak}");
    assert!(peak < 1.5);
}
