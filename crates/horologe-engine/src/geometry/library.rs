use super::MeshData;

/// Stable handle to a mesh stored in a [`MeshLibrary`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MeshId(u32);

impl MeshId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Append-only store of CPU meshes.
///
/// Several scene nodes may reference the same `MeshId`; renderers upload each
/// mesh once and key their GPU buffers by id.
#[derive(Debug, Default)]
pub struct MeshLibrary {
    meshes: Vec<MeshData>,
}

impl MeshLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mesh: MeshData) -> MeshId {
        let id = MeshId(self.meshes.len() as u32);
        log::trace!(
            "mesh {:?}: {} vertices, {} triangles",
            id,
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        self.meshes.push(mesh);
        id
    }

    pub fn get(&self, id: MeshId) -> Option<&MeshData> {
        self.meshes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeshId, &MeshData)> {
        self.meshes
            .iter()
            .enumerate()
            .map(|(i, m)| (MeshId(i as u32), m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{cuboid, sphere};

    #[test]
    fn ids_are_sequential_and_resolvable() {
        let mut lib = MeshLibrary::new();
        let a = lib.insert(cuboid(1.0, 1.0, 1.0));
        let b = lib.insert(sphere(1.0, 8, 4));
        assert_ne!(a, b);
        assert_eq!(lib.len(), 2);
        assert_eq!(lib.get(a).map(|m| m.vertices.len()), Some(24));
        assert_eq!(lib.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![a, b]);
    }
}
