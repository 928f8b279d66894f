//! Web-side presentation constants: colors, easing strings and the submit
//! control labels. Timing values live in `folio_core::constants`.

// Accent palette (0x00d4ff cyan, 0xff00ff magenta)
pub const KNOT_COLOR: [f32; 4] = [0.0, 0.831, 1.0, 0.1];
pub const PARTICLE_COLOR: [f32; 4] = [0.0, 0.831, 1.0, 0.6];
pub const AVATAR_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 0.8];

pub const ACCENT_CSS: &str = "#00d4ff";
pub const LABEL_RESTING_CSS: &str = "#b0b0b0";
pub const SUCCESS_GRADIENT_CSS: &str = "linear-gradient(135deg, #00ff88, #00d4ff)";
pub const GLOW_SHADOW_CSS: &str = "0 0 30px rgba(0, 212, 255, 0.3)";
pub const GLOW_NONE_CSS: &str = "0 0 0px rgba(0, 212, 255, 0)";
pub const MOTE_COLOR_CSS: &str = "#00d4ff";

// CSS cubic-bezier equivalents of the core easing curves
pub const EASE_OUT_CUBIC_CSS: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)";
pub const EASE_BACK_OUT_CSS: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";

// Submit control labels per phase
pub const SENDING_LABEL_HTML: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Sending...";
pub const SENT_LABEL_HTML: &str = "<i class=\"fas fa-check\"></i> Message sent!";

// Scene rendering
pub const SCENE_SEED: u64 = 7;
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};
