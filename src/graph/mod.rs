//! The building blocks of a [`RouteGraph`](crate::RouteGraph): Nodes, Edges and the search.

mod node_id;
pub use node_id::*;

mod node;
pub use node::{GraphNode, NodeKind};

mod edge;
pub use edge::{EdgeId, GeoEdge};

mod node_list;
pub(crate) use node_list::NodeList;

mod bounds;
pub use bounds::BoundingBox;

mod dijkstra;
pub(crate) use dijkstra::dijkstra_search;
