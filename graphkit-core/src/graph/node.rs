//! Graph Nodes
//!
//! This module defines the node record stored in the graph, its identifier
//! type, and the allocator that hands out identifiers.
//!
//! Identifiers come from an explicit [`IdAllocator`] owned by the store
//! rather than a global counter. Allocation is monotonic: an id is never
//! handed out twice, even after the node that carried it is removed.

use smallvec::SmallVec;

/// Unique identifier for a node in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Get the raw id value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic allocator for node ids.
///
/// Owned by the store so that id assignment is testable in isolation.
/// The counter only moves forward; removing nodes does not reclaim ids.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator whose first id will be `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id.
    pub fn allocate(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }

    /// The number of ids handed out so far.
    pub fn allocated(&self) -> u64 {
        self.next
    }
}

/// Attributes supplied when creating a node.
///
/// Everything except the id, which the store assigns.
#[derive(Debug, Clone, Copy)]
pub struct NodeSpec {
    /// Initial value of the cosmetic reflexive flag.
    pub reflexive: bool,
    /// How many children to generate when the node is first expanded.
    pub child_count: u32,
    /// Whether the node starts with its children materialized.
    pub is_open: bool,
}

impl Default for NodeSpec {
    fn default() -> Self {
        Self {
            reflexive: false,
            child_count: 2,
            is_open: false,
        }
    }
}

/// A vertex in the graph.
///
/// The shape is fixed: every field is always present. In particular
/// `children` is an always-present ordered sequence, empty until the node
/// is expanded.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier, assigned by the store.
    id: NodeId,

    /// Cosmetic/semantic flag toggled by the user. Orthogonal to topology;
    /// unrelated to self-loops despite the name.
    pub reflexive: bool,

    /// Number of children to generate on first expansion.
    pub child_count: u32,

    /// Whether this node's children are currently materialized.
    pub is_open: bool,

    /// The node that generated this one, or `None` for roots.
    parent: Option<NodeId>,

    /// Ordered ids of generated children. Empty until expanded.
    pub children: SmallVec<[NodeId; 4]>,
}

impl Node {
    pub(crate) fn new(id: NodeId, parent: Option<NodeId>, spec: NodeSpec) -> Self {
        Self {
            id,
            reflexive: spec.reflexive,
            child_count: spec.child_count,
            is_open: spec.is_open,
            parent,
            children: SmallVec::new(),
        }
    }

    /// The node's id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The id of the node that generated this one, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether this node can be expanded at all.
    pub fn is_leaf(&self) -> bool {
        self.child_count == 0
    }
}
