use crate::geo::{EARTH_RADIUS_COMPAT, EARTH_RADIUS_MEAN};

/// Options for loading and querying a [`RouteGraph`](crate::RouteGraph)
///
/// Default options:
/// ```
/// # use campus_routing::{RouteConfig, geo::EARTH_RADIUS_COMPAT};
/// assert_eq!(
///     RouteConfig {
///         earth_radius: EARTH_RADIUS_COMPAT,
///         endpoints_only: false,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteConfig {
    /// The radius (in meters) used to calculate the length of every Edge
    /// (defaults to [`EARTH_RADIUS_COMPAT`]).
    ///
    /// Changing this uniformly rescales every distance, so Routes stay the same but their
    /// Costs change.
    pub earth_radius: f64,
    /// `true`: only Buildings may be used as origin or destination of a Route, asking for a
    /// Route from or to an intersection fails with
    /// [`Error::NotAnEndpoint`](crate::Error::NotAnEndpoint).
    ///
    /// `false` (default): any Node may be used.
    pub endpoints_only: bool,
}

impl RouteConfig {
    /// the options the campus dataset was originally measured with. Same as `Default`.
    pub const COMPAT: RouteConfig = RouteConfig {
        earth_radius: EARTH_RADIUS_COMPAT,
        endpoints_only: false,
    };
    /// measures Edges with the mean Earth radius
    ///
    /// Values:
    /// ```
    /// # use campus_routing::{RouteConfig, geo::EARTH_RADIUS_MEAN};
    /// assert_eq!(
    ///     RouteConfig {
    ///         earth_radius: EARTH_RADIUS_MEAN,
    ///         endpoints_only: false,
    ///     },
    ///     RouteConfig::MEAN_EARTH
    /// );
    /// ```
    pub const MEAN_EARTH: RouteConfig = RouteConfig {
        earth_radius: EARTH_RADIUS_MEAN,
        endpoints_only: false,
    };
    /// only allows Routes between Buildings, like a map that can only be clicked on Buildings
    pub const BUILDINGS_ONLY: RouteConfig = RouteConfig {
        endpoints_only: true,
        ..RouteConfig::COMPAT
    };
}

impl Default for RouteConfig {
    fn default() -> RouteConfig {
        RouteConfig::COMPAT
    }
}
