#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the shortest walking Route between two Buildings on a Campus Map.
//!
//! ## Introduction
//! A Campus is described as a list of points (Buildings and road intersections) with their
//! geographic coordinates, and the walkways connecting them. This crate turns such a
//! description into a [`RouteGraph`], where every walkway is an Edge weighted with the
//! great-circle distance between its ends, and searches that Graph with
//! [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
//!
//! Drawing the map is left to the user. The Graph offers a projection of every Node onto a
//! viewport of any size, and every Route is an ordered list of [`NodeId`]s that can be
//! highlighted on that map.
//!
//! ## Examples
//! Loading the Graph:
//! ```
//! use campus_routing::prelude::*;
//!
//! let description = "
//!     ## tag, name, latitude, longitude, category
//!     node, Science Center, 42.2935, -71.3030, building
//!     node, Chapel, 42.2945, -71.3046, building
//!     node, Library, 42.2948, -71.3035, building
//!     node, i1, 42.2939, -71.3036, intersection
//!     node, i2, 42.2944, -71.3036, intersection
//!     ## tag, from, to
//!     edge, Science Center, i1
//!     edge, i1, Chapel
//!     edge, i1, i2
//!     edge, i2, Library
//!     edge, Chapel, Library
//! ";
//!
//! let graph = RouteGraph::load(description.as_bytes(), RouteConfig::default())?;
//!
//! assert_eq!(graph.len(), 5);
//! assert_eq!(graph.endpoints().count(), 3);
//! # Ok::<(), campus_routing::Error>(())
//! ```
//! The format is explained in the [`loader`] Module. [`RouteGraph::load_file`] reads the same
//! format from a file, and any `&str` can be [`parse`](str::parse)d into a Graph directly.
//!
//! ### Pathfinding
//! Finding the shortest Route:
//! ```
//! # use campus_routing::prelude::*;
//! # let graph: RouteGraph = "
//! #     node, Science Center, 42.2935, -71.3030, building
//! #     node, Chapel, 42.2945, -71.3046, building
//! #     node, Library, 42.2948, -71.3035, building
//! #     node, i1, 42.2939, -71.3036, intersection
//! #     node, i2, 42.2944, -71.3036, intersection
//! #     edge, Science Center, i1
//! #     edge, i1, Chapel
//! #     edge, i1, i2
//! #     edge, i2, Library
//! #     edge, Chapel, Library
//! # ".parse()?;
//! let path = graph.shortest_path("Science Center", "Library")?;
//!
//! assert_eq!(
//!     graph.path_names(&path).path,
//!     vec!["Science Center", "i1", "i2", "Library"]
//! );
//! // the Cost is the length of the Route in meters
//! assert!(path.cost > 150.0 && path.cost < 200.0);
//! # Ok::<(), campus_routing::Error>(())
//! ```
//! Searches never modify the Graph. Every query keeps its own bookkeeping, so the same Graph
//! can be searched from several threads at once, and repeating a query always gives the same
//! Route. Between Routes of exactly the same length, the Destination keeps the predecessor that
//! was settled first. Nodes at equal distance from the Origin settle in order of their names.
//!
//! Long searches can be aborted from another thread with a [`CancelToken`] passed to
//! [`RouteGraph::shortest_path_with`].
//!
//! ### Drawing
//! ```
//! # use campus_routing::prelude::*;
//! # let graph: RouteGraph = "
//! #     node, Science Center, 42.2935, -71.3030, building
//! #     node, Chapel, 42.2945, -71.3046, building
//! # ".parse()?;
//! let chapel = graph.find("Chapel").unwrap();
//!
//! // the Chapel is both the northernmost and westernmost point
//! assert_eq!(graph.project(chapel, 800, 600), (800, 600));
//! # Ok::<(), campus_routing::Error>(())
//! ```
//!
//! ### Configuration
//! The last parameter of [`RouteGraph::load`] is a [`RouteConfig`]. The defaults reproduce the
//! distances the campus dataset was originally measured with, which use an Earth radius of
//! 6317 km instead of the mean radius of 6371 km. [`RouteConfig::MEAN_EARTH`] measures with the
//! latter.
//! ```
//! use campus_routing::{RouteConfig, geo::EARTH_RADIUS_MEAN};
//!
//! let config = RouteConfig {
//!     endpoints_only: true,
//!     ..RouteConfig::MEAN_EARTH
//! };
//! assert_eq!(config.earth_radius, EARTH_RADIUS_MEAN);
//! ```

mod cancel;
pub use self::cancel::CancelToken;

mod config;
pub use self::config::RouteConfig;

mod error;
pub use self::error::{Error, MalformedReason, Result};

pub mod geo;

pub mod graph;
pub use self::graph::{BoundingBox, GeoEdge, GraphNode, NodeId, NodeKind};

pub mod loader;

mod path;
pub use self::path::{Cost, Path};

mod route_graph;
pub use self::route_graph::RouteGraph;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        CancelToken, Error, GeoEdge, GraphNode, NodeId, NodeKind, Path, RouteConfig, RouteGraph,
    };
}
