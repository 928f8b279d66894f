//! Scene-side state shared with the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs so the
//! render loop can be exercised deterministically in native tests: `step`
//! takes elapsed time and wall-clock seconds as inputs instead of reading a
//! real clock.

use glam::{Mat4, Vec3};
use rand::prelude::*;

use crate::constants::*;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed hero-background camera, looking down -Z from `z = 30`.
    pub fn portfolio(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Viewport resize keeps the projection in sync (spec'd synchronous).
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }
}

/// Continuously-stepped transforms for the three persistent scene objects.
///
/// Particles hold world positions; `step` perturbs each particle's vertical
/// coordinate by a time-seeded sinusoid whose phase offset is the particle
/// index, so the cloud shimmers out of sync.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub knot_rot_x: f32,
    pub knot_rot_y: f32,
    pub particle_yaw: f32,
    pub particles: Vec<Vec3>,
    pub avatar_rot_x: f32,
    pub avatar_rot_y: f32,
    pub avatar_pos: Vec3,
}

impl SceneState {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = PARTICLE_FIELD_HALF_EXTENT;
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        Self {
            knot_rot_x: 0.0,
            knot_rot_y: 0.0,
            particle_yaw: 0.0,
            particles,
            avatar_rot_x: 0.0,
            avatar_rot_y: 0.0,
            avatar_pos: avatar_position_vec3(),
        }
    }

    /// Advance every continuously-animated transform.
    ///
    /// `dt_sec` is the elapsed frame time; `now_sec` is wall-clock seconds
    /// and only seeds the sinusoids (particle bob, avatar bob), so two
    /// states stepped with identical inputs stay identical.
    pub fn step(&mut self, dt_sec: f32, now_sec: f64) {
        let dt = dt_sec.max(0.0);

        self.knot_rot_x += KNOT_ROT_X_PER_SEC * dt;
        self.knot_rot_y += KNOT_ROT_Y_PER_SEC * dt;

        self.particle_yaw += PARTICLE_YAW_PER_SEC * dt;
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.y += (now_sec + i as f64).sin() as f32 * PARTICLE_BOB_PER_SEC * dt;
        }

        self.avatar_rot_x += AVATAR_ROT_X_PER_SEC * dt;
        self.avatar_rot_y += AVATAR_ROT_Y_PER_SEC * dt;
        // Absolute, not additive: the avatar floats around its anchor.
        self.avatar_pos.y = now_sec.sin() as f32 * AVATAR_BOB_AMPLITUDE;
    }

    pub fn knot_model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.knot_rot_y) * Mat4::from_rotation_x(self.knot_rot_x)
    }

    pub fn particles_model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.particle_yaw)
    }

    pub fn avatar_model(&self) -> Mat4 {
        Mat4::from_translation(self.avatar_pos)
            * Mat4::from_rotation_y(self.avatar_rot_y)
            * Mat4::from_rotation_x(self.avatar_rot_x)
    }
}
