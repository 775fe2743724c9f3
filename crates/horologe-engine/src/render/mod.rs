//! GPU rendering subsystem.
//!
//! Renderers read the CPU `Scene` and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipelines, buffers) and creates
//! them lazily on first use.
//!
//! Convention:
//! - scene space is right-handed, +Y up, camera looks down -Z by default
//! - depth is `[0, 1]`, cleared to 1.0, compared with `Less`

mod ctx;
mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
