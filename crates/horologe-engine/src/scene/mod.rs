//! CPU scene graph.
//!
//! A flat list of nodes, each pairing a mesh with a flat color and a
//! transform. Renderers read the scene every frame; nothing here touches
//! the GPU, so scene construction is fully testable without a device.

mod graph;
mod node;
mod transform;

pub use graph::Scene;
pub use node::{Node, NodeId};
pub use transform::Transform;
