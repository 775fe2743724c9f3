use glam::Vec3;

use super::MeshData;

/// Axis-aligned box of `width` (X) × `height` (Y) × `depth` (Z).
///
/// Faces do not share vertices, so each face can be flat-shaded later.
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let h = Vec3::new(width, height, depth) * 0.5;
    let mut mesh = MeshData::default();

    // (normal axis, u axis, v axis) with u × v == normal for CCW outward faces.
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    for (n, u, v) in faces {
        let center = n * h;
        let du = u * h;
        let dv = v * h;

        let a = mesh.push_vertex(center - du - dv);
        let b = mesh.push_vertex(center + du - dv);
        let c = mesh.push_vertex(center + du + dv);
        let d = mesh.push_vertex(center - du + dv);

        mesh.push_triangle(a, b, c);
        mesh.push_triangle(a, c, d);
    }

    mesh
}
