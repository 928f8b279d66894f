//! Wireframe mesh generation for the two decorative meshes.
//!
//! Both builders return a line list: consecutive vertex pairs form
//! independent segments, ready for a `LineList` pipeline.

use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;

/// Point on the centerline of a (p, q) torus knot.
fn knot_point(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let cu = u.cos();
    let su = u.sin();
    let qu_over_p = q as f32 / p as f32 * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * cu,
        radius * (2.0 + cs) * 0.5 * su,
        radius * qu_over_p.sin() * 0.5,
    )
}

/// Wireframe grid of a torus knot tube.
///
/// Produces `tubular * radial * 2` segments: one set tracing the tube
/// direction, one tracing each radial ring. Both loops are closed.
pub fn torus_knot_wireframe(
    p: u32,
    q: u32,
    radius: f32,
    tube: f32,
    tubular: usize,
    radial: usize,
) -> Vec<Vec3> {
    let mut grid: Vec<Vec3> = Vec::with_capacity(tubular * radial);
    for i in 0..tubular {
        let u = i as f32 / tubular as f32 * p as f32 * std::f32::consts::TAU;
        // Frenet-style frame from two nearby centerline points.
        let p1 = knot_point(u, p, q, radius);
        let p2 = knot_point(u + 0.01, p, q, radius);
        let tangent = p2 - p1;
        let normal_seed = p2 + p1;
        let binormal = tangent.cross(normal_seed).normalize();
        let normal = binormal.cross(tangent).normalize();
        for j in 0..radial {
            let v = j as f32 / radial as f32 * std::f32::consts::TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            grid.push(p1 + normal * cx + binormal * cy);
        }
    }

    let at = |i: usize, j: usize| grid[(i % tubular) * radial + (j % radial)];
    let mut lines = Vec::with_capacity(tubular * radial * 4);
    for i in 0..tubular {
        for j in 0..radial {
            lines.push(at(i, j));
            lines.push(at(i + 1, j));
            lines.push(at(i, j));
            lines.push(at(i, j + 1));
        }
    }
    lines
}

/// Unique-edge wireframe of an icosphere.
///
/// Starts from the twelve icosahedron vertices, subdivides each face
/// `subdivisions` times (each pass splits a triangle into four) and projects
/// every vertex back onto the sphere of the given radius.
pub fn icosahedron_wireframe(radius: f32, subdivisions: u32) -> Vec<Vec3> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut vertices: Vec<Vec3> = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Vec3::new(x, y, z).normalize() * radius)
    .collect();

    let mut faces: Vec<[u32; 3]> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    for _ in 0..subdivisions {
        let mut midpoints: FnvHashMap<(u32, u32), u32> = FnvHashMap::default();
        let mut next = Vec::with_capacity(faces.len() * 4);
        for face in &faces {
            let mid = |a: u32, b: u32, vertices: &mut Vec<Vec3>,
                       midpoints: &mut FnvHashMap<(u32, u32), u32>| {
                let key = if a < b { (a, b) } else { (b, a) };
                *midpoints.entry(key).or_insert_with(|| {
                    let m = (vertices[a as usize] + vertices[b as usize]) / 2.0;
                    vertices.push(m.normalize() * radius);
                    (vertices.len() - 1) as u32
                })
            };
            let [a, b, c] = *face;
            let ab = mid(a, b, &mut vertices, &mut midpoints);
            let bc = mid(b, c, &mut vertices, &mut midpoints);
            let ca = mid(c, a, &mut vertices, &mut midpoints);
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        faces = next;
    }

    let mut edges: FnvHashSet<(u32, u32)> = FnvHashSet::default();
    for face in &faces {
        for k in 0..3 {
            let a = face[k];
            let b = face[(k + 1) % 3];
            edges.insert(if a < b { (a, b) } else { (b, a) });
        }
    }

    let mut lines = Vec::with_capacity(edges.len() * 2);
    for (a, b) in edges {
        lines.push(vertices[a as usize]);
        lines.push(vertices[b as usize]);
    }
    lines
}
