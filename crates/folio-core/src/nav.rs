//! Navigation state: hamburger menu, condensed navbar, scroll-derived
//! active section, and smooth-scroll targets.

use crate::constants::{
    HEADER_OFFSET_PX, MENU_BAR_ROT_DEG, MENU_BAR_SHIFT_PX, NAVBAR_CONDENSE_PX,
    NAV_CAPTURE_FRACTION,
};

/// Visual pose of one hamburger bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarPose {
    pub rotation_deg: f32,
    pub y_px: f32,
    pub opacity: f32,
}

/// Menu state plus the dependent visuals that must stay in sync with it:
/// the three-bar icon pose and the panel visibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuPose {
    pub open: bool,
    pub bars: [BarPose; 3],
}

fn bars_for(open: bool) -> [BarPose; 3] {
    if open {
        [
            BarPose {
                rotation_deg: MENU_BAR_ROT_DEG,
                y_px: MENU_BAR_SHIFT_PX,
                opacity: 1.0,
            },
            BarPose {
                rotation_deg: 0.0,
                y_px: 0.0,
                opacity: 0.0,
            },
            BarPose {
                rotation_deg: -MENU_BAR_ROT_DEG,
                y_px: -MENU_BAR_SHIFT_PX,
                opacity: 1.0,
            },
        ]
    } else {
        [BarPose {
            rotation_deg: 0.0,
            y_px: 0.0,
            opacity: 1.0,
        }; 3]
    }
}

/// Hamburger menu. The flag is owned here; callers only see poses.
#[derive(Clone, Debug, Default)]
pub struct Menu {
    open: bool,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> MenuPose {
        self.open = !self.open;
        self.pose()
    }

    /// Close if open (nav-link clicks collapse the mobile menu).
    pub fn close(&mut self) -> Option<MenuPose> {
        self.open.then(|| self.toggle())
    }

    pub fn pose(&self) -> MenuPose {
        MenuPose {
            open: self.open,
            bars: bars_for(self.open),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

/// Condensed-navbar state, driven by scroll position and direction: the bar
/// condenses scrolling down past the capture mark and restores scrolling up.
#[derive(Clone, Debug, Default)]
pub struct NavBar {
    condensed: bool,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_condensed(&self) -> bool {
        self.condensed
    }

    pub fn update(&mut self, scroll_y: f64, direction: ScrollDirection) -> bool {
        self.condensed = scroll_y > NAVBAR_CONDENSE_PX && direction == ScrollDirection::Down;
        self.condensed
    }
}

/// The single owner of "which section is current".
///
/// Both writers funnel through here: nav-link clicks set it eagerly for
/// immediate feedback, and the scroll watcher sets it on every capture-zone
/// crossing. Last write wins, and the watcher always writes last (the smooth
/// scroll a click starts fires scroll events itself), so the derived state
/// is authoritative.
#[derive(Clone, Debug, Default)]
pub struct SectionTracker {
    active: Option<String>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Scroll watcher: a section's top entered the capture zone going down.
    pub fn enter(&mut self, id: &str) {
        self.set(id);
    }

    /// Scroll watcher: a section's top re-entered the zone going up.
    pub fn enter_back(&mut self, id: &str) {
        self.set(id);
    }

    /// Click path: eager highlight before the derived state catches up.
    pub fn click(&mut self, id: &str) {
        self.set(id);
    }

    fn set(&mut self, id: &str) {
        if self.active.as_deref() != Some(id) {
            self.active = Some(id.to_owned());
        }
    }
}

/// Scroll destination for a nav-link click: the section's top offset by the
/// fixed header height, clamped at the document top.
#[inline]
pub fn scroll_target_y(section_top_px: f64) -> f64 {
    (section_top_px - HEADER_OFFSET_PX).max(0.0)
}

/// Index of the current section given each section's viewport-relative top:
/// the last one whose top has crossed the capture line near the viewport
/// top. `None` until the first section reaches it.
pub fn current_section_index(section_tops_px: &[f64], viewport_h_px: f64) -> Option<usize> {
    let capture = viewport_h_px * NAV_CAPTURE_FRACTION;
    let mut current = None;
    for (i, &top) in section_tops_px.iter().enumerate() {
        if top <= capture {
            current = Some(i);
        }
    }
    current
}
