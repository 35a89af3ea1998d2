use super::{GraphNode, NodeId};
use crate::geo::great_circle_distance;

/// The Type used to reference an Edge in a [`RouteGraph`](crate::RouteGraph)
pub type EdgeId = usize;

/// An undirected walkway between two Nodes
///
/// The length is measured once when the Edge is created and never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoEdge {
    a: NodeId,
    b: NodeId,
    length: f64,
}

impl GeoEdge {
    /// creates an Edge between `a` and `b`, measuring the great-circle distance between them
    /// on a sphere with the given `radius` (in meters)
    pub fn new(
        a_id: NodeId,
        a: &GraphNode,
        b_id: NodeId,
        b: &GraphNode,
        radius: f64,
    ) -> GeoEdge {
        GeoEdge {
            a: a_id,
            b: b_id,
            length: great_circle_distance(a.position(), b.position(), radius),
        }
    }

    /// the length of the Edge in meters
    pub fn length(&self) -> f64 {
        self.length
    }

    /// the length rounded to at most `digits` fraction digits, without trailing zeros
    ///
    /// The integer part is written without thousands separators (`1234.5`, not `1,234.5`),
    /// so the label parses back with [`str::parse`].
    ///
    /// ## Examples
    /// ```
    /// # use campus_routing::prelude::*;
    /// let graph: RouteGraph = "
    ///     node, A, 0.0, 0.0, building
    ///     node, B, 0.0, 0.001, building
    ///     edge, A, B
    /// ".parse().unwrap();
    ///
    /// let edge = graph.edges().next().unwrap();
    /// assert_eq!(edge.length_formatted(0), "110");
    /// assert_eq!(edge.length_formatted(2), "110.25");
    /// ```
    pub fn length_formatted(&self, digits: usize) -> String {
        let text = format!("{:.*}", digits, self.length);
        if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.').to_owned()
        } else {
            text
        }
    }

    /// both ends of the Edge, in the order they were declared
    pub fn ends(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    /// `true` if `node` is one of the ends
    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// Given one end of the Edge, returns the other one.
    ///
    /// Returns `a` for anything that is not `a`, so `known` should always be an end.
    pub fn other(&self, known: NodeId) -> NodeId {
        if known == self.a {
            self.b
        } else {
            self.a
        }
    }
}

impl std::fmt::Display for GeoEdge {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "({}, {})", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{haversine, EARTH_RADIUS_COMPAT};
    use crate::graph::NodeKind::*;

    fn edge() -> GeoEdge {
        let a = GraphNode::new("A", 42.2935, -71.3030, Building);
        let b = GraphNode::new("i3", 42.2931, -71.3024, Intersection);
        GeoEdge::new(NodeId(0), &a, NodeId(1), &b, EARTH_RADIUS_COMPAT)
    }

    #[test]
    fn length() {
        let e = edge();
        assert_eq!(e.length(), haversine(42.2935, -71.3030, 42.2931, -71.3024));
        assert!(e.length() > 0.0);
    }

    #[test]
    fn other() {
        let e = edge();
        assert_eq!(e.other(NodeId(0)), NodeId(1));
        assert_eq!(e.other(NodeId(1)), NodeId(0));
        assert!(e.touches(NodeId(1)));
        assert!(!e.touches(NodeId(2)));
        assert_eq!(e.to_string(), "(#0, #1)");
    }

    #[test]
    fn formatted() {
        let a = GraphNode::new("A", 0.0, 0.0, Building);
        let e = GeoEdge::new(NodeId(0), &a, NodeId(0), &a, EARTH_RADIUS_COMPAT);
        assert_eq!(e.length_formatted(0), "0");
        assert_eq!(e.length_formatted(3), "0");
    }

    #[test]
    fn copied() {
        let e = edge();
        let copy = e;
        assert_eq!(copy, e);
    }

    #[test]
    fn formatted_without_separators() {
        let a = GraphNode::new("A", 0.0, 0.0, Building);
        let b = GraphNode::new("B", 0.0, 1.0, Building);
        let e = GeoEdge::new(NodeId(0), &a, NodeId(1), &b, EARTH_RADIUS_COMPAT);

        let label = e.length_formatted(1);
        assert!(e.length() > 1000.0);
        assert!(!label.contains(','), "{}", label);
        assert!((label.parse::<f64>().unwrap() - e.length()).abs() <= 0.05);
    }
}
