/// The Type used for the Cost of a Path: its length in meters
pub type Cost = f64;

/// A Route through a Graph
///
/// Stores the sequence of Nodes in `path` and the total Cost of walking along them in `cost`.
/// The first Node is always the origin and the last one the destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    /// the Path
    pub path: Vec<P>,
    /// the total Cost of the Path
    pub cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use campus_routing::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 42.0);
    ///
    /// assert_eq!(path.path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost, 42.0);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// the number of Nodes on the Path, including origin and destination
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path has no Nodes
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns a Path over the same steps with every Node converted by `f`.
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use campus_routing::Path;
    /// let path = Path::new(vec![1, 2, 3], 42.0);
    /// let doubled = path.map(|n| n * 2);
    ///
    /// assert_eq!(doubled.path, vec![2, 4, 6]);
    /// assert_eq!(doubled.cost, 42.0);
    /// ```
    pub fn map<Q>(&self, f: impl FnMut(&P) -> Q) -> Path<Q> {
        Path::new(self.path.iter().map(f).collect(), self.cost)
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        self.cost.partial_cmp(&other.cost)
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {:.2}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}
