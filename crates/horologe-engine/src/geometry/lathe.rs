use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::MeshData;

/// Surface of revolution: sweeps the profile `points` (x = radius, y = height)
/// once around +Y.
///
/// `segments` is clamped to at least 3. Profiles with fewer than two points
/// produce an empty mesh.
pub fn lathe(points: &[Vec2], segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut mesh = MeshData::default();

    if points.len() < 2 {
        return mesh;
    }

    for i in 0..=segments {
        let phi = i as f32 / segments as f32 * TAU;
        let (sin, cos) = phi.sin_cos();
        for p in points {
            mesh.push_vertex(Vec3::new(p.x * sin, p.y, p.x * cos));
        }
    }

    let stride = points.len() as u32;
    for i in 0..segments {
        for j in 0..stride - 1 {
            let base = j + i * stride;
            let a = base;
            let b = base + stride;
            let c = base + stride + 1;
            let d = base + 1;
            mesh.push_triangle(a, b, d);
            mesh.push_triangle(c, d, b);
        }
    }

    mesh
}
