//! A Module with some utilities for working with NodeIds

use std::fmt;
use std::hash::{BuildHasherDefault, Hasher};

/// The Type used to reference a Node in a [`RouteGraph`](crate::RouteGraph)
///
/// NodeIds are handed out by the Graph in the order the Nodes were declared in, starting at 0.
/// They stay valid for the lifetime of the Graph that created them, but have no meaning in
/// any other Graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// the position of the Node in declaration order
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "#{}", self.0)
    }
}

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIds with a faster Hasher
pub type NodeIdMap<V> = hashbrown::HashMap<NodeId, V, BuildHasherDefault<NodeIdHasher>>;
/// A specialized [`HashSet`](hashbrown::HashSet) for NodeIds with a faster Hasher
pub type NodeIdSet = hashbrown::HashSet<NodeId, BuildHasherDefault<NodeIdHasher>>;

/// A [`Hasher`](Hasher) specialized on NodeIds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIdHasher(u64);

impl Hasher for NodeIdHasher {
    /// panics, since only NodeIds are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with NodeIds")
    }
    /// Writes a single NodeId into this hasher.
    fn write_u32(&mut self, id: u32) {
        self.0 = id as u64
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

/// create a new [`NodeIdMap`] with room for `capacity` entries
pub fn node_id_map_with_cap<V>(capacity: usize) -> NodeIdMap<V> {
    NodeIdMap::with_capacity_and_hasher(capacity, Default::default())
}
