//! One-shot stat counters and skill-bar fills.

use crate::constants::{COUNT_UP_SEC, SKILL_FILL_DELAY_SEC, SKILL_FILL_SEC};
use crate::ease;

/// Count-up from 0 to `target`, armed by the first trigger-zone entry.
///
/// The displayed value rounds up each intermediate frame, so it is
/// monotonic non-decreasing and lands exactly on `target`.
#[derive(Clone, Copy, Debug)]
pub struct CountUp {
    target: u32,
    started_at: Option<f64>,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            started_at: None,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Latch the start time. Later fires (re-entering the zone) are ignored;
    /// returns whether this call armed the animation.
    pub fn fire(&mut self, now_sec: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now_sec);
        true
    }

    pub fn value_at(&self, now_sec: f64) -> u32 {
        let Some(t0) = self.started_at else {
            return 0;
        };
        let t = ((now_sec - t0) / COUNT_UP_SEC).clamp(0.0, 1.0);
        let eased = ease::power2_out(t as f32) as f64;
        ((self.target as f64 * eased).ceil() as u32).min(self.target)
    }

    pub fn is_done(&self, now_sec: f64) -> bool {
        matches!(self.started_at, Some(t0) if now_sec - t0 >= COUNT_UP_SEC)
    }
}

/// Width fill from 0 to `percent`, armed once, starting after a short delay.
#[derive(Clone, Copy, Debug)]
pub struct SkillFill {
    percent: f32,
    started_at: Option<f64>,
}

impl SkillFill {
    pub fn new(percent: f32) -> Self {
        Self {
            percent: percent.clamp(0.0, 100.0),
            started_at: None,
        }
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn fire(&mut self, now_sec: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now_sec + SKILL_FILL_DELAY_SEC);
        true
    }

    /// Current width in percent.
    pub fn width_at(&self, now_sec: f64) -> f32 {
        let Some(t0) = self.started_at else {
            return 0.0;
        };
        if now_sec < t0 {
            return 0.0;
        }
        let t = ((now_sec - t0) / SKILL_FILL_SEC).clamp(0.0, 1.0);
        self.percent * ease::power2_out(t as f32)
    }

    pub fn is_done(&self, now_sec: f64) -> bool {
        matches!(self.started_at, Some(t0) if now_sec - t0 >= SKILL_FILL_SEC)
    }
}
