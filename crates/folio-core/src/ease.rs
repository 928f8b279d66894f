//! Easing curves used by the entrance and counter animations.
//!
//! Each curve maps progress `t` in \[0, 1\] to an eased value with
//! `f(0) = 0` and `f(1) = 1`. `back_out` overshoots above 1 mid-curve,
//! which is what gives cards and indicators their pop.

/// Overshoot factor for the card/indicator entrance pop.
pub const BACK_OVERSHOOT: f32 = 1.7;

#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Cubic ease-out: fast start, gentle settle.
#[inline]
pub fn power2_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// Cubic ease-in-out, used by the smooth page scroll.
#[inline]
pub fn power2_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Back ease-out with the given overshoot: settles from slightly past 1.
#[inline]
pub fn back_out(t: f32, overshoot: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let c1 = overshoot;
    let c3 = c1 + 1.0;
    let u = t - 1.0;
    1.0 + c3 * u * u * u + c1 * u * u
}
