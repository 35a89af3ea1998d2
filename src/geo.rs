//! Great-circle distances between geographic coordinates.

/// The Earth radius (in meters) the campus dataset has always been measured with.
///
/// Note that this is **not** the mean Earth radius (see [`EARTH_RADIUS_MEAN`]). Every
/// distance computed with it is about 0.85% shorter than the real one.
pub const EARTH_RADIUS_COMPAT: f64 = 6_317e3;

/// The mean Earth radius in meters.
pub const EARTH_RADIUS_MEAN: f64 = 6_371e3;

/// A `(latitude, longitude)` pair in degrees
pub type Coordinate = (f64, f64);

/// Calculates the great-circle distance between two Coordinates on a sphere of the given
/// `radius` using the haversine formula.
///
/// The result has the unit of `radius`.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use campus_routing::geo::{great_circle_distance, EARTH_RADIUS_MEAN};
/// let a = (42.2935, -71.3030);
/// let b = (42.2931, -71.3024);
///
/// let d = great_circle_distance(a, b, EARTH_RADIUS_MEAN);
/// assert!(d > 60.0 && d < 70.0);
/// assert_eq!(d, great_circle_distance(b, a, EARTH_RADIUS_MEAN));
/// assert_eq!(great_circle_distance(a, a, EARTH_RADIUS_MEAN), 0.0);
/// ```
pub fn great_circle_distance(
    (lat1, lon1): Coordinate,
    (lat2, lon2): Coordinate,
    radius: f64,
) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

/// [`great_circle_distance`] in meters with the dataset's [`EARTH_RADIUS_COMPAT`]
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    great_circle_distance((lat1, lon1), (lat2, lon2), EARTH_RADIUS_COMPAT)
}
