//! Ambient effects: floating motes, cursor follower, hero parallax and the
//! typing reveal.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::*;

/// Spawn parameters for one floating mote. Randomized once; the frontend
/// loops the rise animation forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mote {
    pub size_px: f32,
    pub opacity: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub drift_x_px: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
}

/// Instantaneous offset/opacity of a mote within its looping rise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotePose {
    pub dx_px: f32,
    pub dy_px: f32,
    pub opacity: f32,
}

impl Mote {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            size_px: rng.gen_range(MOTE_SIZE_MIN_PX..MOTE_SIZE_MAX_PX),
            opacity: rng.gen_range(MOTE_OPACITY_MIN..MOTE_OPACITY_MAX),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            drift_x_px: rng.gen_range(-MOTE_DRIFT_MAX_PX..MOTE_DRIFT_MAX_PX),
            duration_sec: rng.gen_range(MOTE_DURATION_MIN_SEC..MOTE_DURATION_MAX_SEC),
            delay_sec: rng.gen_range(0.0..MOTE_DELAY_MAX_SEC),
        }
    }

    /// Pose `elapsed_sec` after spawn: rises and fades linearly over one
    /// cycle, then restarts (infinite repeat). Holds the rest pose during
    /// the start delay.
    pub fn pose_at(&self, elapsed_sec: f64) -> MotePose {
        let local = elapsed_sec - self.delay_sec as f64;
        if local <= 0.0 {
            return MotePose {
                dx_px: 0.0,
                dy_px: 0.0,
                opacity: self.opacity,
            };
        }
        let t = (local / self.duration_sec as f64).fract() as f32;
        MotePose {
            dx_px: self.drift_x_px * t,
            dy_px: -MOTE_RISE_PX * t,
            opacity: self.opacity * (1.0 - t),
        }
    }
}

/// The fixed-size mote field spawned at startup.
pub fn spawn_mote_field(seed: u64) -> Vec<Mote> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..MOTE_COUNT).map(|_| Mote::spawn(&mut rng)).collect()
}

/// Exponential approach of the cursor follower toward the pointer.
/// Frame-rate independent: equal elapsed time gives equal progress.
pub fn step_follower(pos: Vec2, target: Vec2, dt_sec: f32) -> Vec2 {
    let alpha = 1.0 - (-dt_sec.max(0.0) / FOLLOWER_SMOOTH_SEC).exp();
    pos + (target - pos) * alpha
}

/// Hero-content vertical offset in percent, scrubbed by scroll progress
/// across the hero's extent (0 at the start, -50 when fully scrolled past).
pub fn parallax_percent(
    scroll_y: f64,
    hero_top: f64,
    hero_height: f64,
    viewport_h: f64,
) -> f32 {
    let total = hero_height + viewport_h;
    if total <= 0.0 {
        return 0.0;
    }
    let progress = ((scroll_y + viewport_h - hero_top) / total).clamp(0.0, 1.0);
    progress as f32 * PARALLAX_MAX_PERCENT
}

/// Characters of line `line_index` revealed `elapsed_sec` after the typing
/// effect started. Reveal time is proportional to the line length; lines
/// start staggered by their index.
pub fn typed_chars(line_len: usize, line_index: usize, elapsed_sec: f64) -> usize {
    if line_len == 0 {
        return 0;
    }
    let local = elapsed_sec - line_index as f64 * TYPE_LINE_STAGGER_SEC;
    if local <= 0.0 {
        return 0;
    }
    let duration = line_len as f64 * TYPE_SEC_PER_CHAR;
    let progress = (local / duration).clamp(0.0, 1.0);
    (progress * line_len as f64).round() as usize
}
