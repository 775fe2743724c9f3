use std::f32::consts::TAU;

use glam::Vec3;

use super::MeshData;

/// Capped cylinder (or truncated cone) around +Y, centered on the origin.
///
/// `segments` is clamped to at least 3. A cap is omitted when its radius is zero.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let half = height * 0.5;
    let mut mesh = MeshData::default();

    // Torso: two rings of `segments + 1` vertices (the seam is duplicated).
    let ring = |mesh: &mut MeshData, radius: f32, y: f32| -> u32 {
        let start = mesh.vertices.len() as u32;
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * TAU;
            mesh.push_vertex(Vec3::new(radius * theta.sin(), y, radius * theta.cos()));
        }
        start
    };

    let top = ring(&mut mesh, radius_top, half);
    let bottom = ring(&mut mesh, radius_bottom, -half);

    for i in 0..segments {
        let a = top + i;
        let b = bottom + i;
        let c = bottom + i + 1;
        let d = top + i + 1;
        mesh.push_triangle(a, b, d);
        mesh.push_triangle(b, c, d);
    }

    if radius_top > 0.0 {
        cap(&mut mesh, segments, radius_top, half, true);
    }
    if radius_bottom > 0.0 {
        cap(&mut mesh, segments, radius_bottom, -half, false);
    }

    mesh
}

fn cap(mesh: &mut MeshData, segments: u32, radius: f32, y: f32, top: bool) {
    let center = mesh.push_vertex(Vec3::new(0.0, y, 0.0));
    let start = mesh.vertices.len() as u32;

    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * TAU;
        mesh.push_vertex(Vec3::new(radius * theta.sin(), y, radius * theta.cos()));
    }

    for i in 0..segments {
        let (a, b) = (start + i, start + i + 1);
        if top {
            mesh.push_triangle(center, a, b);
        } else {
            mesh.push_triangle(center, b, a);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_cylinder_counts() {
        let m = cylinder(10.0, 10.0, 0.9, 64);
        // torso 2 × 65, two caps of 1 + 65
        assert_eq!(m.vertices.len(), 2 * 65 + 2 * 66);
        // torso 2 × 64, caps 64 each
        assert_eq!(m.triangle_count(), 4 * 64);
        assert!(m.indices_in_range());
    }

    #[test]
    fn cone_drops_degenerate_cap() {
        let m = cylinder(0.0, 1.0, 2.0, 8);
        assert_eq!(m.triangle_count(), 2 * 8 + 8);
    }

    #[test]
    fn segments_clamped_to_three() {
        let m = cylinder(1.0, 1.0, 1.0, 1);
        assert_eq!(m.vertices.len(), 2 * 4 + 2 * 5);
    }

    #[test]
    fn bounds_follow_radius_and_height() {
        let (lo, hi) = cylinder(10.0, 10.0, 0.9, 64).bounds().unwrap();
        assert!((hi.y - 0.45).abs() < 1e-6 && (lo.y + 0.45).abs() < 1e-6);
        assert!((hi.x - 10.0).abs() < 1e-4 && (lo.z + 10.0).abs() < 1e-4);
    }
}
