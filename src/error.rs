use thiserror::Error;

/// Everything that can go wrong while loading a [`RouteGraph`](crate::RouteGraph) or
/// searching it for a Route.
#[derive(Error, Debug)]
pub enum Error {
    /// The coordinate/connection description could not be turned into a Graph.
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput {
        /// 1-based line of the offending record
        line: u64,
        /// what exactly was wrong with it
        reason: MalformedReason,
    },
    /// A query referenced a name that is not part of the Graph.
    #[error("unknown node: {0:?}")]
    UnknownNode(String),
    /// Origin and destination lie in disconnected parts of the Graph.
    #[error("no path from {origin:?} to {destination:?}")]
    NoPath {
        /// name of the origin
        origin: String,
        /// name of the destination
        destination: String,
    },
    /// The Graph only allows Buildings as origin or destination and this one is not.
    #[error("{0:?} is an intersection, not a valid origin or destination")]
    NotAnEndpoint(String),
    /// The caller cancelled the search through its [`CancelToken`](crate::CancelToken).
    #[error("search was cancelled")]
    Cancelled,
    /// Reading the data source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The detail of an [`Error::MalformedInput`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedReason {
    /// `node` records have 5 fields and `edge` records 3
    #[error("{tag} record needs {expected} fields, found {found}")]
    FieldCount {
        /// the record tag
        tag: &'static str,
        /// how many fields such a record has
        expected: usize,
        /// how many fields the line had
        found: usize,
    },
    /// The first field was neither `node` nor `edge`.
    #[error("unknown record type {0:?}")]
    UnknownRecord(String),
    /// A latitude or longitude did not parse or was not finite.
    #[error("{field} is not a number: {value:?}")]
    InvalidNumber {
        /// `latitude` or `longitude`
        field: &'static str,
        /// the raw text
        value: String,
    },
    /// A coordinate parsed but lies outside of the valid range.
    #[error("{field} {value} is out of range")]
    CoordinateOutOfRange {
        /// `latitude` or `longitude`
        field: &'static str,
        /// the parsed value
        value: f64,
    },
    /// The category was neither building nor intersection.
    #[error("unknown category {0:?}, expected \"building\" or \"intersection\"")]
    InvalidCategory(String),
    /// A node record without a name.
    #[error("node name is empty")]
    EmptyName,
    /// Two node records share a name.
    #[error("node {0:?} is declared twice")]
    DuplicateName(String),
    /// An edge record names a node that was not declared before it.
    #[error("edge references undeclared node {0:?}")]
    UnknownReference(String),
    /// The csv reader could not split the line into fields.
    #[error("{0}")]
    Csv(String),
    /// The input is not valid UTF-8.
    #[error("input is not valid UTF-8")]
    NotUtf8,
}

/// Shorthand for results of this crate
pub type Result<T> = std::result::Result<T, Error>;
