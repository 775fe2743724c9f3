use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::MeshData;

/// UV sphere centered on the origin.
///
/// `width_segments` (longitude) is clamped to at least 3, `height_segments`
/// (latitude) to at least 2. Pole rows emit a single triangle per quad.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();

    for iy in 0..=hs {
        let theta = iy as f32 / hs as f32 * PI;
        for ix in 0..=ws {
            let phi = ix as f32 / ws as f32 * TAU;
            mesh.push_vertex(Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            ));
        }
    }

    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                mesh.push_triangle(a, b, d);
            }
            if iy != hs - 1 {
                mesh.push_triangle(b, c, d);
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_counts() {
        let m = sphere(1.0, 64, 32);
        assert_eq!(m.vertices.len(), 65 * 33);
        assert_eq!(m.triangle_count(), 64 * (2 * 32 - 2));
        assert!(m.indices_in_range());
    }

    #[test]
    fn vertices_lie_on_radius() {
        let r = 10.0 / 16.0;
        let m = sphere(r, 12, 6);
        for v in &m.vertices {
            let len = Vec3::from_array(v.position).length();
            assert!((len - r).abs() < 1e-5);
        }
    }
}
