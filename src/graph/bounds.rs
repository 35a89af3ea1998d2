use crate::geo::Coordinate;

/// The extent of all Nodes of a Graph, in absolute degrees.
///
/// Used to map geographic positions onto a viewport of any size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// smallest absolute latitude
    pub min_lat: f64,
    /// largest absolute latitude
    pub max_lat: f64,
    /// smallest absolute longitude
    pub min_lon: f64,
    /// largest absolute longitude
    pub max_lon: f64,
}

impl BoundingBox {
    /// Calculates the box around the absolute values of the given Coordinates.
    ///
    /// Returns `None` if there are no Coordinates.
    pub fn around(coordinates: impl IntoIterator<Item = Coordinate>) -> Option<BoundingBox> {
        coordinates.into_iter().fold(None, |bounds, (lat, lon)| {
            let (lat, lon) = (lat.abs(), lon.abs());
            Some(match bounds {
                None => BoundingBox {
                    min_lat: lat,
                    max_lat: lat,
                    min_lon: lon,
                    max_lon: lon,
                },
                Some(b) => BoundingBox {
                    min_lat: b.min_lat.min(lat),
                    max_lat: b.max_lat.max(lat),
                    min_lon: b.min_lon.min(lon),
                    max_lon: b.max_lon.max(lon),
                },
            })
        })
    }

    /// Maps a position onto a `width` x `height` viewport.
    ///
    /// Longitude becomes `x` and latitude becomes `y`, both scaled linearly so that the
    /// smallest value of the box lands on `0` and the largest on `width` / `height`. The
    /// absolute value of the position is used, like for the box itself. An axis without
    /// any extent maps everything to `0`.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use campus_routing::BoundingBox;
    /// let bounds = BoundingBox::around([(42.0, -71.0), (43.0, -72.0)]).unwrap();
    ///
    /// assert_eq!(bounds.project((42.0, -71.0), 800, 600), (0, 0));
    /// assert_eq!(bounds.project((42.5, -71.5), 800, 600), (400, 300));
    /// assert_eq!(bounds.project((43.0, -72.0), 800, 600), (800, 600));
    /// ```
    pub fn project(&self, (lat, lon): Coordinate, width: u32, height: u32) -> (i32, i32) {
        let x = normalize(lon.abs(), self.min_lon, self.max_lon) * width as f64;
        let y = normalize(lat.abs(), self.min_lat, self.max_lat) * height as f64;
        (x as i32, y as i32)
    }
}

fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let extent = max - min;
    if extent > 0.0 {
        (value - min) / extent
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(BoundingBox::around(Vec::new()), None);
    }

    #[test]
    fn single_point() {
        let bounds = BoundingBox::around([(42.29, -71.30)]).unwrap();
        assert_eq!(bounds.min_lat, 42.29);
        assert_eq!(bounds.max_lon, 71.30);
        assert_eq!(bounds.project((42.29, -71.30), 640, 480), (0, 0));
    }

    #[test]
    fn uses_absolute_values() {
        let bounds = BoundingBox::around([(-10.0, 20.0), (5.0, -30.0)]).unwrap();
        assert_eq!(
            bounds,
            BoundingBox {
                min_lat: 5.0,
                max_lat: 10.0,
                min_lon: 20.0,
                max_lon: 30.0,
            }
        );
        assert_eq!(bounds.project((-10.0, 20.0), 100, 100), (0, 100));
    }

    #[test]
    fn recomputable() {
        let bounds = BoundingBox::around([(1.0, 1.0), (2.0, 3.0)]).unwrap();
        let first = bounds.project((1.5, 2.0), 1000, 1000);
        assert_eq!(first, bounds.project((1.5, 2.0), 1000, 1000));
        assert_eq!(first, (500, 500));
    }
}
