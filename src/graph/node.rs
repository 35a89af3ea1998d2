use crate::geo::Coordinate;

/// What a Node on the map stands for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// a Building, valid as origin or destination of a Route
    Building,
    /// a road intersection, only used as a waypoint
    Intersection,
}

/// A Building or road intersection on the map
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
    name: String,
    latitude: f64,
    longitude: f64,
    kind: NodeKind,
}

impl GraphNode {
    /// creates a new Node at the given position (in degrees)
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, kind: NodeKind) -> GraphNode {
        GraphNode {
            name: name.into(),
            latitude,
            longitude,
            kind,
        }
    }

    /// the unique name of this Node
    pub fn name(&self) -> &str {
        &self.name
    }

    /// latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `(latitude, longitude)` in degrees
    pub fn position(&self) -> Coordinate {
        (self.latitude, self.longitude)
    }

    /// whether this is a Building or an intersection
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// `true` for Buildings, `false` for intersections
    pub fn is_endpoint_of_interest(&self) -> bool {
        self.kind == NodeKind::Building
    }
}

impl std::fmt::Display for GraphNode {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.write_str(&self.name)
    }
}
