//! Reading the coordinate/connection description of a campus map.
//!
//! The description is comma separated text with one record per line:
//! ```text
//! # tag, name, latitude, longitude, category
//! node, Science Center, 42.2935, -71.3030, building
//! node, i12, 42.2931, -71.3024, intersection
//! # tag, from, to
//! edge, Science Center, i12
//! ```
//! - `node` declares a point. The category is `building` (or `b`) for points that can be
//!   the origin or destination of a Route and `intersection` (or `i`) for waypoints.
//!   Intersections are usually named `i` followed by a number.
//! - `edge` connects two previously declared points in both directions.
//! - Lines starting with `#` and blank lines are ignored. Fields are trimmed. A field
//!   containing commas has to be quoted, with the opening quote directly after the
//!   preceding comma. A record never spans several lines.
//! - Lines end with `\n` or `\r\n`. Errors report the 1-based line of the record,
//!   counting comments and blank lines.

use crate::error::MalformedReason;
use crate::graph::{GraphNode, NodeId, NodeKind, NodeList};
use crate::{Error, Result, RouteConfig};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};
use std::io::Read;

const NODE_FIELDS: usize = 5;
const EDGE_FIELDS: usize = 3;

/// Parses a complete description into a [`NodeList`].
///
/// Nothing is returned unless every record was valid.
pub(crate) fn parse_nodes(mut reader: impl Read, config: &RouteConfig) -> Result<NodeList> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let input = String::from_utf8(bytes).map_err(|err| {
        let valid = &err.as_bytes()[..err.utf8_error().valid_up_to()];
        Error::MalformedInput {
            line: 1 + valid.iter().filter(|&&b| b == b'\n').count() as u64,
            reason: MalformedReason::NotUtf8,
        }
    })?;

    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).trim(Trim::All);

    let mut nodes = NodeList::new();
    let mut connections = hashbrown::HashSet::new();
    let mut record = StringRecord::new();

    for (index, text) in input.lines().enumerate() {
        let line = index as u64 + 1;
        let malformed = |reason| Error::MalformedInput { line, reason };

        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        builder
            .from_reader(trimmed.as_bytes())
            .read_record(&mut record)
            .map_err(|err| malformed(MalformedReason::Csv(err.to_string())))?;

        let tag = match record.get(0) {
            Some(tag) if !tag.is_empty() => tag,
            // only separators
            _ if record.iter().all(str::is_empty) => continue,
            _ => return Err(malformed(MalformedReason::UnknownRecord(String::new()))),
        };

        if tag.eq_ignore_ascii_case("node") {
            let node = parse_node(&record).map_err(malformed)?;
            nodes
                .add_node(node)
                .map_err(|node| malformed(MalformedReason::DuplicateName(node.name().to_owned())))?;
        } else if tag.eq_ignore_ascii_case("edge") {
            let (a, b) = parse_edge(&record, &nodes).map_err(malformed)?;
            if a == b {
                warn!("line {}: {} is connected to itself", line, nodes[a]);
            } else if !connections.insert((a.min(b), a.max(b))) {
                warn!("line {}: {} and {} are connected twice", line, nodes[a], nodes[b]);
            }
            nodes.add_edge(a, b, config.earth_radius);
        } else {
            return Err(malformed(MalformedReason::UnknownRecord(tag.to_owned())));
        }
    }

    debug!(
        "loaded {} nodes ({} buildings) and {} edges",
        nodes.len(),
        nodes.iter().filter(|(_, n)| n.is_endpoint_of_interest()).count(),
        nodes.edge_count()
    );
    Ok(nodes)
}

fn check_fields(
    record: &StringRecord,
    tag: &'static str,
    expected: usize,
) -> std::result::Result<(), MalformedReason> {
    if record.len() == expected {
        Ok(())
    } else {
        Err(MalformedReason::FieldCount {
            tag,
            expected,
            found: record.len(),
        })
    }
}

fn parse_node(record: &StringRecord) -> std::result::Result<GraphNode, MalformedReason> {
    check_fields(record, "node", NODE_FIELDS)?;

    let name = &record[1];
    if name.is_empty() {
        return Err(MalformedReason::EmptyName);
    }
    let latitude = parse_degrees(&record[2], "latitude", 90.0)?;
    let longitude = parse_degrees(&record[3], "longitude", 180.0)?;
    let kind = parse_kind(&record[4])?;

    Ok(GraphNode::new(name, latitude, longitude, kind))
}

fn parse_edge(
    record: &StringRecord,
    nodes: &NodeList,
) -> std::result::Result<(NodeId, NodeId), MalformedReason> {
    check_fields(record, "edge", EDGE_FIELDS)?;

    let lookup = |name: &str| {
        nodes
            .id_of(name)
            .ok_or_else(|| MalformedReason::UnknownReference(name.to_owned()))
    };
    Ok((lookup(&record[1])?, lookup(&record[2])?))
}

fn parse_degrees(
    value: &str,
    field: &'static str,
    limit: f64,
) -> std::result::Result<f64, MalformedReason> {
    let degrees = value
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite())
        .ok_or_else(|| MalformedReason::InvalidNumber {
            field,
            value: value.to_owned(),
        })?;
    if degrees.abs() > limit {
        return Err(MalformedReason::CoordinateOutOfRange {
            field,
            value: degrees,
        });
    }
    Ok(degrees)
}

fn parse_kind(value: &str) -> std::result::Result<NodeKind, MalformedReason> {
    match value.to_ascii_lowercase().as_str() {
        "building" | "b" => Ok(NodeKind::Building),
        "intersection" | "i" => Ok(NodeKind::Intersection),
        _ => Err(MalformedReason::InvalidCategory(value.to_owned())),
    }
}
