use glam::Vec3;

// Shared tuning constants for the scene, controllers and ambient effects.
// Angular rates are radians per second; the original per-frame increments
// assumed ~60fps, so each rate here is that increment times 60.

// Background torus knot
pub const KNOT_RADIUS: f32 = 10.0;
pub const KNOT_TUBE_RADIUS: f32 = 3.0;
pub const KNOT_TUBULAR_SEGMENTS: usize = 100;
pub const KNOT_RADIAL_SEGMENTS: usize = 16;
pub const KNOT_P: u32 = 2;
pub const KNOT_Q: u32 = 3;
pub const KNOT_ROT_X_PER_SEC: f32 = 0.30;
pub const KNOT_ROT_Y_PER_SEC: f32 = 0.60;

// Particle cloud
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_FIELD_HALF_EXTENT: f32 = 50.0;
pub const PARTICLE_SIZE: f32 = 0.5;
pub const PARTICLE_YAW_PER_SEC: f32 = 0.12;
pub const PARTICLE_BOB_PER_SEC: f32 = 0.60;

// Avatar
pub const AVATAR_RADIUS: f32 = 2.0;
pub const AVATAR_SUBDIVISIONS: u32 = 1;
pub const AVATAR_POSITION: [f32; 3] = [0.0, 0.0, -10.0];
pub const AVATAR_ROT_X_PER_SEC: f32 = 0.60;
pub const AVATAR_ROT_Y_PER_SEC: f32 = 1.20;
pub const AVATAR_BOB_AMPLITUDE: f32 = 0.5;

// Camera
pub const CAMERA_Z: f32 = 30.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Navigation
pub const HEADER_OFFSET_PX: f64 = 70.0;
pub const NAVBAR_CONDENSE_PX: f64 = 80.0;
pub const NAV_CAPTURE_FRACTION: f64 = 0.3;
pub const MENU_BAR_ROT_DEG: f32 = 45.0;
pub const MENU_BAR_SHIFT_PX: f32 = 7.0;
pub const MENU_TWEEN_SEC: f32 = 0.3;
pub const SMOOTH_SCROLL_SEC: f32 = 1.0;

// Scroll reveal
pub const SECTION_TRIGGER_FRACTION: f64 = 0.80;
pub const CARD_TRIGGER_FRACTION: f64 = 0.85;
pub const SECTION_ENTER_SEC: f32 = 1.0;
pub const SECTION_RISE_PX: f32 = 50.0;
pub const TIMELINE_ENTER_SEC: f32 = 0.8;
pub const TIMELINE_SHIFT_PX: f32 = 100.0;
pub const CARD_ENTER_SEC: f32 = 0.6;
pub const CARD_START_SCALE: f32 = 0.8;
pub const CARD_STAGGER_SEC: f32 = 0.1;
pub const SKILL_ENTER_SEC: f32 = 0.5;
pub const SKILL_SHIFT_PX: f32 = 50.0;
pub const GLOW_SEC: f32 = 0.5;
pub const GLOW_STAGGER_SEC: f32 = 0.1;
pub const OBSERVER_THRESHOLD: f64 = 0.1;
pub const OBSERVER_BOTTOM_MARGIN_PX: f64 = 50.0;

// Counters and skill bars
pub const COUNT_UP_SEC: f64 = 2.0;
pub const SKILL_FILL_SEC: f64 = 1.5;
pub const SKILL_FILL_DELAY_SEC: f64 = 0.2;

// Contact form
pub const FORM_SENDING_SEC: f32 = 1.5;
pub const FORM_SENT_SEC: f32 = 2.0;
pub const LABEL_TWEEN_SEC: f32 = 0.3;
pub const LABEL_RAISE_PX: f32 = 25.0;
pub const LABEL_SHRINK_SCALE: f32 = 0.8;

// Experience carousel
pub const SLIDE_SEC: f32 = 0.5;
pub const SLIDE_SHIFT_PX: f32 = 50.0;
pub const POP_SEC: f32 = 0.5;
pub const POP_START_SCALE: f32 = 0.8;

// Content modal
pub const MODAL_FADE_SEC: f32 = 0.3;
pub const MODAL_CONTENT_START_SCALE: f32 = 0.7;

// Ambient effects
pub const MOTE_COUNT: usize = 50;
pub const MOTE_SIZE_MIN_PX: f32 = 1.0;
pub const MOTE_SIZE_MAX_PX: f32 = 5.0;
pub const MOTE_OPACITY_MIN: f32 = 0.2;
pub const MOTE_OPACITY_MAX: f32 = 0.7;
pub const MOTE_RISE_PX: f32 = 100.0;
pub const MOTE_DRIFT_MAX_PX: f32 = 100.0;
pub const MOTE_DURATION_MIN_SEC: f32 = 2.0;
pub const MOTE_DURATION_MAX_SEC: f32 = 5.0;
pub const MOTE_DELAY_MAX_SEC: f32 = 2.0;
pub const FOLLOWER_SMOOTH_SEC: f32 = 0.1;
pub const FOLLOWER_SIZE_PX: f32 = 20.0;
pub const PARALLAX_MAX_PERCENT: f32 = -50.0;
pub const TYPE_SEC_PER_CHAR: f64 = 0.05;
pub const TYPE_LINE_STAGGER_SEC: f64 = 0.5;
pub const TYPE_START_DELAY_SEC: f64 = 1.0;

#[inline]
pub fn avatar_position_vec3() -> Vec3 {
    Vec3::new(AVATAR_POSITION[0], AVATAR_POSITION[1], AVATAR_POSITION[2])
}
