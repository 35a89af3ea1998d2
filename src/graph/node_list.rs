use super::{EdgeId, GeoEdge, GraphNode, NodeId};

/// Owns all Nodes and Edges of a Graph together with the adjacency information.
///
/// Nodes are stored in declaration order, their [`NodeId`] is the key in the slab.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeList {
    nodes: slab::Slab<GraphNode>,
    name_map: hashbrown::HashMap<String, NodeId>,
    edges: Vec<GeoEdge>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// adds a Node, unless its name is already taken
    pub fn add_node(&mut self, node: GraphNode) -> Result<NodeId, GraphNode> {
        if self.name_map.contains_key(node.name()) {
            return Err(node);
        }
        let name = node.name().to_owned();
        let id = NodeId(self.nodes.insert(node) as u32);
        self.name_map.insert(name, id);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// connects `a` and `b`, registering the Edge with both of them
    #[track_caller]
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, radius: f64) -> EdgeId {
        let edge = GeoEdge::new(a, &self[a], b, &self[b], radius);
        let id = self.edges.len();
        self.edges.push(edge);

        self.adjacency[a.index()].push(id);
        if a != b {
            self.adjacency[b.index()].push(id);
        }
        id
    }

    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.name_map.get(name).copied()
    }

    pub fn get(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &GraphNode)> + '_ {
        self.nodes.iter().map(|(key, node)| (NodeId(key as u32), node))
    }

    pub fn edges(&self) -> &[GeoEdge] {
        &self.edges
    }

    /// the Edges touching `id`, in the order they were added
    #[track_caller]
    pub fn incident(&self, id: NodeId) -> impl Iterator<Item = &GeoEdge> + '_ {
        self.adjacency[id.index()].iter().map(|&edge| &self.edges[edge])
    }
}

use std::ops::Index;
impl Index<NodeId> for NodeList {
    type Output = GraphNode;
    #[track_caller]
    fn index(&self, index: NodeId) -> &GraphNode {
        &self.nodes[index.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::EARTH_RADIUS_COMPAT;
    use crate::graph::NodeKind::*;

    #[test]
    fn add_edge() {
        let mut nodes = NodeList::new();
        let a = nodes.add_node(GraphNode::new("A", 0.0, 0.0, Building)).unwrap();
        let b = nodes.add_node(GraphNode::new("i1", 0.0, 1.0, Intersection)).unwrap();
        let c = nodes.add_node(GraphNode::new("C", 1.0, 1.0, Building)).unwrap();

        let ab = nodes.add_edge(a, b, EARTH_RADIUS_COMPAT);
        nodes.add_edge(b, c, EARTH_RADIUS_COMPAT);

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes.edge_count(), 2);
        assert_eq!(nodes.incident(a).count(), 1);
        assert_eq!(nodes.incident(b).count(), 2);
        assert_eq!(nodes.incident(a).next(), Some(&nodes.edges()[ab]));
        assert_eq!(nodes.id_of("i1"), Some(b));
        assert_eq!(nodes[c].name(), "C");
    }

    #[test]
    fn duplicate_name() {
        let mut nodes = NodeList::new();
        nodes.add_node(GraphNode::new("A", 0.0, 0.0, Building)).unwrap();
        let rejected = nodes.add_node(GraphNode::new("A", 5.0, 5.0, Intersection));

        assert_eq!(rejected.unwrap_err().latitude(), 5.0);
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn self_loop_is_listed_once() {
        let mut nodes = NodeList::new();
        let a = nodes.add_node(GraphNode::new("A", 0.0, 0.0, Building)).unwrap();
        nodes.add_edge(a, a, EARTH_RADIUS_COMPAT);

        assert_eq!(nodes.incident(a).count(), 1);
    }
}
