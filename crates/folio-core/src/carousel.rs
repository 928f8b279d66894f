//! Cyclic selection over the fixed list of experience panels.

use crate::constants::{POP_SEC, POP_START_SCALE, SLIDE_SEC, SLIDE_SHIFT_PX};

/// Entrance played when stepping with the arrows: the new panel slides in
/// from the side matching the travel direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slide {
    pub from: usize,
    pub to: usize,
    pub entry_offset_px: f32,
    pub duration_sec: f32,
}

/// Entrance played on direct indicator selection: direction-agnostic scale-in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pop {
    pub from: usize,
    pub to: usize,
    pub start_scale: f32,
    pub duration_sec: f32,
}

/// 1-based cyclic cursor over `len` panels. `current` never leaves
/// `[1, len]`; both directions wrap.
#[derive(Clone, Debug)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    /// Panics on `len == 0`: the panel list is a fixed part of the page.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "carousel requires at least one panel");
        Self { current: 1, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Step by `direction` (+1 or -1, larger strides also work) with cyclic
    /// wrap, returning the slide entrance for the newly active panel.
    pub fn advance(&mut self, direction: i32) -> Slide {
        let from = self.current;
        let len = self.len as i64;
        let zero_based = self.current as i64 - 1 + direction as i64;
        self.current = (zero_based.rem_euclid(len) + 1) as usize;
        Slide {
            from,
            to: self.current,
            entry_offset_px: if direction > 0 {
                SLIDE_SHIFT_PX
            } else {
                -SLIDE_SHIFT_PX
            },
            duration_sec: SLIDE_SEC,
        }
    }

    /// Jump straight to panel `n`. Selecting the current panel (or an index
    /// outside `[1, len]`) is a no-op.
    pub fn select(&mut self, n: usize) -> Option<Pop> {
        if n == self.current || n < 1 || n > self.len {
            return None;
        }
        let from = self.current;
        self.current = n;
        Some(Pop {
            from,
            to: n,
            start_scale: POP_START_SCALE,
            duration_sec: POP_SEC,
        })
    }
}
