// Deterministic scene stepping, camera resize behavior and the wireframe
// geometry invariants.

use folio_core::constants::*;
use folio_core::geometry::{icosahedron_wireframe, torus_knot_wireframe};
use folio_core::scene::{Camera, SceneState};

#[test]
fn particle_field_is_seeded_and_bounded() {
    let scene = SceneState::new(42);
    assert_eq!(scene.particles.len(), PARTICLE_COUNT);
    for p in &scene.particles {
        assert!(p.x.abs() <= PARTICLE_FIELD_HALF_EXTENT);
        assert!(p.y.abs() <= PARTICLE_FIELD_HALF_EXTENT);
        assert!(p.z.abs() <= PARTICLE_FIELD_HALF_EXTENT);
    }
    // Same seed, same field.
    let again = SceneState::new(42);
    assert_eq!(scene.particles, again.particles);
    let other = SceneState::new(43);
    assert_ne!(scene.particles, other.particles);
}

#[test]
fn stepping_is_deterministic() {
    let mut a = SceneState::new(7);
    let mut b = SceneState::new(7);
    for i in 0..120 {
        let now = i as f64 / 60.0;
        a.step(1.0 / 60.0, now);
        b.step(1.0 / 60.0, now);
    }
    assert_eq!(a.knot_rot_x, b.knot_rot_x);
    assert_eq!(a.particle_yaw, b.particle_yaw);
    assert_eq!(a.particles, b.particles);
    assert_eq!(a.avatar_pos, b.avatar_pos);
}

#[test]
fn rotation_rates_integrate_per_second() {
    let mut scene = SceneState::new(1);
    scene.step(1.0, 0.0);
    assert!((scene.knot_rot_x - KNOT_ROT_X_PER_SEC).abs() < 1e-6);
    assert!((scene.knot_rot_y - KNOT_ROT_Y_PER_SEC).abs() < 1e-6);
    assert!((scene.particle_yaw - PARTICLE_YAW_PER_SEC).abs() < 1e-6);
    assert!((scene.avatar_rot_x - AVATAR_ROT_X_PER_SEC).abs() < 1e-6);
    assert!((scene.avatar_rot_y - AVATAR_ROT_Y_PER_SEC).abs() < 1e-6);
}

#[test]
fn avatar_bob_is_absolute_not_additive() {
    let mut scene = SceneState::new(1);
    scene.step(0.016, std::f64::consts::FRAC_PI_2);
    assert!((scene.avatar_pos.y - AVATAR_BOB_AMPLITUDE).abs() < 1e-6);
    // Stepping again at the same wall-clock time does not accumulate.
    scene.step(0.016, std::f64::consts::FRAC_PI_2);
    assert!((scene.avatar_pos.y - AVATAR_BOB_AMPLITUDE).abs() < 1e-6);
    // Anchor stays put.
    assert_eq!(scene.avatar_pos.z, AVATAR_POSITION[2]);
}

#[test]
fn particles_bob_out_of_phase() {
    let mut scene = SceneState::new(5);
    let before: Vec<f32> = scene.particles.iter().map(|p| p.y).collect();
    scene.step(1.0, 0.25);
    let deltas: Vec<f32> = scene
        .particles
        .iter()
        .zip(&before)
        .map(|(p, y0)| p.y - y0)
        .collect();
    // Index-seeded phases: neighbors move by different amounts.
    assert!((deltas[0] - deltas[1]).abs() > 1e-6);
    for d in &deltas {
        assert!(d.abs() <= PARTICLE_BOB_PER_SEC + 1e-6);
    }
}

#[test]
fn negative_dt_is_ignored() {
    let mut scene = SceneState::new(1);
    scene.step(-1.0, 0.0);
    assert_eq!(scene.knot_rot_x, 0.0);
    assert_eq!(scene.particle_yaw, 0.0);
}

#[test]
fn camera_matches_viewport_and_guards_bad_aspect() {
    let mut cam = Camera::portfolio(16.0 / 9.0);
    assert_eq!(cam.eye.z, CAMERA_Z);
    cam.set_aspect(0.0);
    assert_eq!(cam.aspect, 16.0 / 9.0);
    cam.set_aspect(f32::NAN);
    assert_eq!(cam.aspect, 16.0 / 9.0);
    cam.set_aspect(2.0);
    assert_eq!(cam.aspect, 2.0);
    let vp = cam.view_proj();
    assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
}

#[test]
fn model_matrices_are_finite() {
    let mut scene = SceneState::new(3);
    scene.step(0.5, 1.0);
    for m in [scene.knot_model(), scene.particles_model(), scene.avatar_model()] {
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn torus_knot_wireframe_has_expected_segment_grid() {
    let lines = torus_knot_wireframe(
        KNOT_P,
        KNOT_Q,
        KNOT_RADIUS,
        KNOT_TUBE_RADIUS,
        KNOT_TUBULAR_SEGMENTS,
        KNOT_RADIAL_SEGMENTS,
    );
    // Two segments (four endpoints) per grid cell, both loops closed.
    assert_eq!(lines.len(), KNOT_TUBULAR_SEGMENTS * KNOT_RADIAL_SEGMENTS * 4);
    // Tube surface stays within centerline max radius + tube radius.
    let bound = KNOT_RADIUS * 1.5 + KNOT_TUBE_RADIUS + 1e-3;
    for v in &lines {
        assert!(v.length() <= bound, "vertex {v} outside {bound}");
    }
}

#[test]
fn icosahedron_wireframe_counts_and_radius() {
    // Unsubdivided: 30 unique edges.
    let base = icosahedron_wireframe(2.0, 0);
    assert_eq!(base.len(), 60);
    // One subdivision: 42 vertices, 80 faces, 120 unique edges.
    let lines = icosahedron_wireframe(AVATAR_RADIUS, AVATAR_SUBDIVISIONS);
    assert_eq!(lines.len(), 240);
    for v in &lines {
        assert!((v.length() - AVATAR_RADIUS).abs() < 1e-4);
    }
}
