//! Contact-form submission simulator and floating labels.
//!
//! Submission transmits nothing; the phases are purely time-driven UI
//! states. Timer completions carry a generation token so a stale deferred
//! callback can never corrupt a newer submission cycle.

use crate::constants::{FORM_SENDING_SEC, FORM_SENT_SEC, LABEL_RAISE_PX, LABEL_SHRINK_SCALE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Sending,
    Sent,
}

/// A deferred transition the frontend must schedule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timer {
    pub generation: u32,
    pub delay_sec: f32,
}

/// Captured field values. Kept only until the cycle completes; never sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Submit-control presentation for a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
    pub success_tint: bool,
}

pub fn button_state(phase: FormPhase) -> ButtonState {
    match phase {
        FormPhase::Idle => ButtonState {
            enabled: true,
            success_tint: false,
        },
        FormPhase::Sending => ButtonState {
            enabled: false,
            success_tint: false,
        },
        FormPhase::Sent => ButtonState {
            enabled: false,
            success_tint: true,
        },
    }
}

/// Idle -> Sending -> Sent -> Idle, with fixed delays between the last two
/// transitions.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    phase: Option<FormPhaseInner>,
    generation: u32,
}

// Inner storage keeps the captured submission with the phase it belongs to.
#[derive(Clone, Debug)]
enum FormPhaseInner {
    Sending(Submission),
    Sent(Submission),
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        match self.phase {
            None => FormPhase::Idle,
            Some(FormPhaseInner::Sending(_)) => FormPhase::Sending,
            Some(FormPhaseInner::Sent(_)) => FormPhase::Sent,
        }
    }

    pub fn button(&self) -> ButtonState {
        button_state(self.phase())
    }

    pub fn captured(&self) -> Option<&Submission> {
        match &self.phase {
            Some(FormPhaseInner::Sending(s)) | Some(FormPhaseInner::Sent(s)) => Some(s),
            None => None,
        }
    }

    /// Accepted only from `Idle` (the control is disabled otherwise).
    pub fn submit(&mut self, submission: Submission) -> Option<Timer> {
        if self.phase.is_some() {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.phase = Some(FormPhaseInner::Sending(submission));
        Some(Timer {
            generation: self.generation,
            delay_sec: FORM_SENDING_SEC,
        })
    }

    /// First timer fired: Sending -> Sent, scheduling the restore timer.
    /// Stale generations are ignored.
    pub fn finish_sending(&mut self, generation: u32) -> Option<Timer> {
        if generation != self.generation {
            return None;
        }
        match self.phase.take() {
            Some(FormPhaseInner::Sending(s)) => {
                self.phase = Some(FormPhaseInner::Sent(s));
                Some(Timer {
                    generation,
                    delay_sec: FORM_SENT_SEC,
                })
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Second timer fired: Sent -> Idle. Returns true when the frontend
    /// should restore the control and clear the fields.
    pub fn finish_sent(&mut self, generation: u32) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.phase.take() {
            Some(FormPhaseInner::Sent(_)) => true,
            other => {
                self.phase = other;
                false
            }
        }
    }
}

/// Floating-label pose over its input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPose {
    pub y_px: f32,
    pub scale: f32,
    pub accent: bool,
}

const RAISED: LabelPose = LabelPose {
    y_px: -LABEL_RAISE_PX,
    scale: LABEL_SHRINK_SCALE,
    accent: true,
};

const RESTING: LabelPose = LabelPose {
    y_px: 0.0,
    scale: 1.0,
    accent: false,
};

/// Focus raises the label; blur lowers it only when the field is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatingLabel {
    raised: bool,
}

impl FloatingLabel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pose(&self) -> LabelPose {
        if self.raised {
            RAISED
        } else {
            RESTING
        }
    }

    pub fn focus(&mut self) -> LabelPose {
        self.raised = true;
        self.pose()
    }

    pub fn blur(&mut self, field_empty: bool) -> LabelPose {
        if field_empty {
            self.raised = false;
        }
        self.pose()
    }
}
