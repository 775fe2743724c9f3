use crate::geometry::MeshId;
use crate::paint::Color;

use super::Transform;

/// Handle to a node in a [`Scene`](super::Scene).
///
/// Handles are never reused, so a removed node's id stays dead.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(super) u32);

/// A drawable object: mesh + material color + transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub mesh: MeshId,
    pub color: Color,
    pub transform: Transform,
    pub visible: bool,
}

impl Node {
    pub fn new(mesh: MeshId, color: Color) -> Self {
        Self {
            mesh,
            color,
            transform: Transform::IDENTITY,
            visible: true,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}
