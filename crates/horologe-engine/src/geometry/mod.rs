//! Primitive geometry generators.
//!
//! Every generator produces CPU-side `MeshData` (positions + triangle
//! indices). Conventions follow the usual scene-graph primitives:
//! - meshes are centered on the origin
//! - cylinders and lathes revolve around +Y
//! - angles start at +Z and sweep toward +X

mod cuboid;
mod cylinder;
mod lathe;
mod library;
mod mesh;
mod sphere;

pub use cuboid::cuboid;
pub use cylinder::cylinder;
pub use lathe::lathe;
pub use library::{MeshId, MeshLibrary};
pub use mesh::{MeshData, Vertex};
pub use sphere::sphere;
