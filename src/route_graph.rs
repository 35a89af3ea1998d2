use crate::graph::{
    dijkstra_search, BoundingBox, GeoEdge, GraphNode, NodeId, NodeKind, NodeList,
};
use crate::{loader, CancelToken, Error, Path, Result, RouteConfig};

use std::io::Read;

/// A walkable map of a campus.
///
/// Holds every Building and intersection together with the walkways between them. The Graph
/// never changes after it was loaded and all queries take `&self`, so a single Graph can be
/// shared between threads.
#[derive(Clone, Debug)]
pub struct RouteGraph {
    nodes: NodeList,
    bounds: Option<BoundingBox>,
    config: RouteConfig,
}

impl RouteGraph {
    /// Reads a Graph from the description in `reader`.
    ///
    /// See the [`loader`](crate::loader) Module for the format.
    ///
    /// ## Errors
    /// [`Error::MalformedInput`] for an invalid description and [`Error::Io`] if `reader`
    /// fails. No Graph is returned in either case.
    pub fn load(reader: impl Read, config: RouteConfig) -> Result<RouteGraph> {
        let nodes = loader::parse_nodes(reader, &config)?;
        Ok(RouteGraph::from_nodes(nodes, config))
    }

    /// Reads a Graph from the file at `path`. See [`load`](RouteGraph::load).
    pub fn load_file(path: impl AsRef<std::path::Path>, config: RouteConfig) -> Result<RouteGraph> {
        let file = std::fs::File::open(path)?;
        RouteGraph::load(std::io::BufReader::new(file), config)
    }

    fn from_nodes(nodes: NodeList, config: RouteConfig) -> RouteGraph {
        let bounds = BoundingBox::around(nodes.iter().map(|(_, node)| node.position()));
        RouteGraph {
            nodes,
            bounds,
            config,
        }
    }

    /// the options this Graph was loaded with
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// the number of Nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Graph has no Nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// the number of Edges
    pub fn edge_count(&self) -> usize {
        self.nodes.edge_count()
    }

    /// looks up the Node with the given name
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.id_of(name)
    }

    /// the Node behind `id`, if `id` belongs to this Graph
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    /// all Nodes in the order they were declared in
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &GraphNode)> + '_ {
        self.nodes.iter()
    }

    /// all Buildings, i.e. the Nodes that are valid as origin or destination
    pub fn endpoints(&self) -> impl Iterator<Item = (NodeId, &GraphNode)> + '_ {
        self.nodes
            .iter()
            .filter(|(_, node)| node.kind() == NodeKind::Building)
    }

    /// all Edges in the order they were declared in
    pub fn edges(&self) -> impl Iterator<Item = &GeoEdge> + '_ {
        self.nodes.edges().iter()
    }

    /// the Nodes directly connected to `id`, together with the Edge leading there
    #[track_caller]
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &GeoEdge)> + '_ {
        self.nodes.incident(id).map(move |edge| (edge.other(id), edge))
    }

    /// the shortest Edge directly connecting `a` and `b`, if any
    #[track_caller]
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&GeoEdge> {
        self.nodes
            .incident(a)
            .filter(|edge| edge.other(a) == b)
            .min_by(|x, y| x.length().total_cmp(&y.length()))
    }

    /// the extent of all Nodes in absolute degrees, `None` if the Graph is empty
    pub fn bounds(&self) -> Option<&BoundingBox> {
        self.bounds.as_ref()
    }

    /// Maps the position of a Node onto a `width` x `height` viewport.
    ///
    /// See [`BoundingBox::project`] for details.
    ///
    /// ## Panics
    /// if `id` does not belong to this Graph
    #[track_caller]
    pub fn project(&self, id: NodeId, width: u32, height: u32) -> (i32, i32) {
        let position = self[id].position();
        self.bounds
            .map_or((0, 0), |bounds| bounds.project(position, width, height))
    }

    /// [`project`](RouteGraph::project)s every Node, in declaration order
    pub fn project_all(
        &self,
        width: u32,
        height: u32,
    ) -> impl Iterator<Item = (NodeId, (i32, i32))> + '_ {
        self.nodes
            .iter()
            .map(move |(id, _)| (id, self.project(id, width, height)))
    }

    /// Finds the shortest Route between the Nodes named `origin` and `destination`.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use campus_routing::prelude::*;
    /// let graph: RouteGraph = "
    ///     node, A, 0.0, 0.0, building
    ///     node, B, 0.0, 1.0, intersection
    ///     node, C, 1.0, 1.0, building
    ///     edge, A, B
    ///     edge, B, C
    /// ".parse()?;
    ///
    /// let path = graph.shortest_path("A", "C")?;
    /// assert_eq!(graph.path_names(&path).path, vec!["A", "B", "C"]);
    ///
    /// assert!(matches!(graph.shortest_path("A", "Z"), Err(Error::UnknownNode(_))));
    /// # Ok::<(), campus_routing::Error>(())
    /// ```
    ///
    /// ## Errors
    /// - [`Error::UnknownNode`] if either name is not part of the Graph
    /// - [`Error::NotAnEndpoint`] if the Graph only allows Buildings as endpoints and either
    ///   one is an intersection
    /// - [`Error::NoPath`] if `destination` cannot be reached from `origin`
    pub fn shortest_path(&self, origin: &str, destination: &str) -> Result<Path<NodeId>> {
        self.shortest_path_with(origin, destination, &CancelToken::new())
    }

    /// Same as [`shortest_path`](RouteGraph::shortest_path), but stops with
    /// [`Error::Cancelled`] once `cancel` is set.
    pub fn shortest_path_with(
        &self,
        origin: &str,
        destination: &str,
        cancel: &CancelToken,
    ) -> Result<Path<NodeId>> {
        let origin = self.resolve(origin)?;
        let destination = self.resolve(destination)?;
        self.shortest_path_ids(origin, destination, cancel)
    }

    /// Same as [`shortest_path_with`](RouteGraph::shortest_path_with) for callers that
    /// already hold NodeIds.
    ///
    /// ## Panics
    /// if either id does not belong to this Graph
    #[track_caller]
    pub fn shortest_path_ids(
        &self,
        origin: NodeId,
        destination: NodeId,
        cancel: &CancelToken,
    ) -> Result<Path<NodeId>> {
        for id in [origin, destination] {
            let node = &self[id];
            if self.config.endpoints_only && !node.is_endpoint_of_interest() {
                return Err(Error::NotAnEndpoint(node.name().to_owned()));
            }
        }

        dijkstra_search(&self.nodes, origin, destination, cancel)?.ok_or_else(|| Error::NoPath {
            origin: self[origin].name().to_owned(),
            destination: self[destination].name().to_owned(),
        })
    }

    /// Runs [`shortest_path`](RouteGraph::shortest_path) for every `(origin, destination)`
    /// pair in parallel. The results are in the same order as the pairs.
    #[cfg(feature = "parallel")]
    pub fn shortest_paths<S: AsRef<str> + Sync>(
        &self,
        pairs: &[(S, S)],
    ) -> Vec<Result<Path<NodeId>>> {
        use rayon::prelude::*;

        pairs
            .par_iter()
            .map(|(origin, destination)| self.shortest_path(origin.as_ref(), destination.as_ref()))
            .collect()
    }

    /// converts a Path of NodeIds into the names of the Nodes
    #[track_caller]
    pub fn path_names(&self, path: &Path<NodeId>) -> Path<&str> {
        path.map(|&id| self[id].name())
    }

    /// the Edges walked along on `path`, one less than there are Nodes
    #[track_caller]
    pub fn path_edges(&self, path: &Path<NodeId>) -> Vec<&GeoEdge> {
        path.windows(2)
            .filter_map(|step| self.edge_between(step[0], step[1]))
            .collect()
    }

    fn resolve(&self, name: &str) -> Result<NodeId> {
        self.find(name)
            .ok_or_else(|| Error::UnknownNode(name.to_owned()))
    }
}

impl std::str::FromStr for RouteGraph {
    type Err = Error;

    /// parses a Graph with the default [`RouteConfig`]
    fn from_str(s: &str) -> Result<RouteGraph> {
        RouteGraph::load(s.as_bytes(), RouteConfig::default())
    }
}

use std::ops::Index;
impl Index<NodeId> for RouteGraph {
    type Output = GraphNode;
    #[track_caller]
    fn index(&self, index: NodeId) -> &GraphNode {
        &self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::haversine;

    const ABC: &str = "
        node, A, 0.0, 0.0, building
        node, B, 0.0, 1.0, intersection
        node, C, 1.0, 1.0, building
        edge, A, B
        edge, B, C
    ";

    fn graph(config: RouteConfig) -> RouteGraph {
        RouteGraph::load(ABC.as_bytes(), config).unwrap()
    }

    #[test]
    fn load() {
        let graph = graph(RouteConfig::default());
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph.endpoints().map(|(_, n)| n.name()).collect::<Vec<_>>(),
            vec!["A", "C"]
        );

        let b = graph.find("B").unwrap();
        let mut neighbors: Vec<&str> = graph.neighbors(b).map(|(id, _)| graph[id].name()).collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec!["A", "C"]);
    }

    #[test]
    fn path_edges() {
        let graph = graph(RouteConfig::default());
        let path = graph.shortest_path("A", "C").unwrap();
        let edges = graph.path_edges(&path);

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].length(), haversine(0.0, 0.0, 0.0, 1.0));
        let total: f64 = edges.iter().map(|e| e.length()).sum();
        assert_eq!(total, path.cost);
    }

    #[test]
    fn buildings_only() {
        let graph = graph(RouteConfig::BUILDINGS_ONLY);
        assert!(graph.shortest_path("A", "C").is_ok());
        match graph.shortest_path("A", "B") {
            Err(Error::NotAnEndpoint(name)) => assert_eq!(name, "B"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn earth_radius() {
        let compat = graph(RouteConfig::COMPAT);
        let mean = graph(RouteConfig::MEAN_EARTH);

        let a = compat.shortest_path("A", "C").unwrap();
        let b = mean.shortest_path("A", "C").unwrap();
        assert_eq!(a.path, b.path);
        assert!(b.cost > a.cost);
    }

    #[test]
    fn projection() {
        let graph = graph(RouteConfig::default());
        let projected: Vec<(i32, i32)> = graph.project_all(200, 100).map(|(_, p)| p).collect();
        assert_eq!(projected, vec![(0, 0), (200, 0), (200, 100)]);
    }

    #[test]
    fn empty_graph() {
        let graph: RouteGraph = "".parse().unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.bounds(), None);
        assert_eq!(graph.project_all(10, 10).count(), 0);
    }

    #[test]
    fn send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RouteGraph>();
    }
}
