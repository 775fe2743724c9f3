use super::{Node, NodeId};

/// Owns scene nodes in insertion order.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Option<Node>>,
    live: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Some(node));
        self.live += 1;
        id
    }

    /// Removes a node, returning it if it was still present.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let removed = self.nodes.get_mut(id.0 as usize)?.take();
        if removed.is_some() {
            self.live -= 1;
        }
        removed
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)?.as_mut()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| n.as_ref().map(|n| (NodeId(i as u32), n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{cuboid, MeshLibrary};
    use crate::paint::Color;

    fn node(lib: &mut MeshLibrary) -> Node {
        Node::new(lib.insert(cuboid(1.0, 1.0, 1.0)), Color::BLACK)
    }

    #[test]
    fn add_get_remove() {
        let mut lib = MeshLibrary::new();
        let mut scene = Scene::new();

        let a = scene.add(node(&mut lib));
        let b = scene.add(node(&mut lib));
        assert_eq!(scene.len(), 2);

        assert!(scene.remove(a).is_some());
        assert!(scene.remove(a).is_none());
        assert!(scene.get(a).is_none());
        assert!(scene.get(b).is_some());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn ids_not_reused_after_remove() {
        let mut lib = MeshLibrary::new();
        let mut scene = Scene::new();

        let a = scene.add(node(&mut lib));
        scene.remove(a);
        let b = scene.add(node(&mut lib));
        assert_ne!(a, b);
        assert_eq!(scene.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut lib = MeshLibrary::new();
        let mut scene = Scene::new();

        let a = scene.add(node(&mut lib));
        scene.get_mut(a).unwrap().visible = false;
        assert!(!scene.get(a).unwrap().visible);
    }
}
