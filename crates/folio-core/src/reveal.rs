//! Scroll-triggered reveal state.
//!
//! Three independent axes per element, deliberately decoupled:
//! whether the entrance has played (stateful, never replayed for one-shot
//! kinds), whether the element is in its trigger zone right now (binary,
//! scroll-derived), and whether it is currently emphasized (glow,
//! re-toggleable). A companion additive observer marks elements `visible`
//! once, with no reversal.

use smallvec::SmallVec;

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    /// Full page section: entrance toggles — plays on crossing down,
    /// reverses when scrolled back above the threshold.
    Section,
    /// Timeline item: one-shot, slides in from alternating sides.
    TimelineItem,
    /// Certificate/project card: one-shot scale-in with stagger.
    Card,
    /// Skill row: one-shot slide-in that also starts the bar fill.
    Skill,
}

impl RevealKind {
    /// Trigger threshold as a fraction of viewport height from the top.
    pub fn trigger_fraction(self) -> f64 {
        match self {
            RevealKind::Section | RevealKind::TimelineItem => SECTION_TRIGGER_FRACTION,
            RevealKind::Card | RevealKind::Skill => CARD_TRIGGER_FRACTION,
        }
    }

    pub fn one_shot(self) -> bool {
        self != RevealKind::Section
    }

    pub fn glows(self) -> bool {
        matches!(self, RevealKind::Card | RevealKind::Skill)
    }
}

/// Entrance animation parameters for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub dx_px: f32,
    pub dy_px: f32,
    pub start_scale: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
}

/// Per-kind entrance, varying with the element's index where the original
/// staggered or alternated.
pub fn entrance(kind: RevealKind, index: usize) -> Entrance {
    match kind {
        RevealKind::Section => Entrance {
            dx_px: 0.0,
            dy_px: SECTION_RISE_PX,
            start_scale: 1.0,
            duration_sec: SECTION_ENTER_SEC,
            delay_sec: 0.0,
        },
        RevealKind::TimelineItem => Entrance {
            dx_px: if index % 2 == 0 {
                -TIMELINE_SHIFT_PX
            } else {
                TIMELINE_SHIFT_PX
            },
            dy_px: 0.0,
            start_scale: 1.0,
            duration_sec: TIMELINE_ENTER_SEC,
            delay_sec: 0.0,
        },
        RevealKind::Card => Entrance {
            dx_px: 0.0,
            dy_px: SECTION_RISE_PX,
            start_scale: CARD_START_SCALE,
            duration_sec: CARD_ENTER_SEC,
            delay_sec: index as f32 * CARD_STAGGER_SEC,
        },
        RevealKind::Skill => Entrance {
            dx_px: -SKILL_SHIFT_PX,
            dy_px: 0.0,
            start_scale: 1.0,
            duration_sec: SKILL_ENTER_SEC,
            delay_sec: index as f32 * CARD_STAGGER_SEC,
        },
    }
}

/// What the frontend must do after a zone transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    PlayEntrance,
    ReverseEntrance,
    GlowOn { delay_sec: f32 },
    GlowOff { delay_sec: f32 },
    FillSkill,
}

pub type Effects = SmallVec<[Effect; 4]>;

/// Reveal state for a single tracked element.
#[derive(Clone, Debug)]
pub struct RevealState {
    kind: RevealKind,
    index: usize,
    played: bool,
    in_zone: bool,
    glowing: bool,
    marked_visible: bool,
}

impl RevealState {
    pub fn new(kind: RevealKind, index: usize) -> Self {
        Self {
            kind,
            index,
            played: false,
            in_zone: false,
            glowing: false,
            marked_visible: false,
        }
    }

    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    pub fn entrance(&self) -> Entrance {
        entrance(self.kind, self.index)
    }

    pub fn has_played(&self) -> bool {
        self.played
    }

    pub fn is_glowing(&self) -> bool {
        self.glowing
    }

    /// Feed the current zone membership; returns the effects to apply.
    pub fn update(&mut self, in_zone: bool) -> Effects {
        let mut effects = Effects::new();
        if in_zone == self.in_zone {
            return effects;
        }
        self.in_zone = in_zone;

        let glow_delay = self.index as f32 * GLOW_STAGGER_SEC;
        if in_zone {
            if !self.played {
                self.played = true;
                effects.push(Effect::PlayEntrance);
                if self.kind == RevealKind::Skill {
                    effects.push(Effect::FillSkill);
                }
            } else if !self.kind.one_shot() {
                effects.push(Effect::PlayEntrance);
            }
            if self.kind.glows() && !self.glowing {
                self.glowing = true;
                effects.push(Effect::GlowOn {
                    delay_sec: glow_delay,
                });
            }
        } else {
            if !self.kind.one_shot() && self.played {
                effects.push(Effect::ReverseEntrance);
            }
            if self.kind.glows() && self.glowing {
                self.glowing = false;
                effects.push(Effect::GlowOff {
                    delay_sec: glow_delay,
                });
            }
        }
        effects
    }

    /// Additive visibility marker: true exactly once, on first intersection.
    pub fn mark_visible(&mut self) -> bool {
        !std::mem::replace(&mut self.marked_visible, true)
    }
}

/// Entrance trigger: the element's top has crossed the threshold line.
#[inline]
pub fn in_trigger_zone(rect_top_px: f64, viewport_h_px: f64, fraction: f64) -> bool {
    rect_top_px <= viewport_h_px * fraction
}

/// Glow zone: past the threshold line but not yet scrolled off the top.
#[inline]
pub fn in_glow_zone(rect_top_px: f64, rect_bottom_px: f64, viewport_h_px: f64, fraction: f64) -> bool {
    rect_top_px <= viewport_h_px * fraction && rect_bottom_px > 0.0
}
