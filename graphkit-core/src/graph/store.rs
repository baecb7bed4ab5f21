//! Graph Store
//!
//! The store owns the authoritative node and link collections and every
//! mutation that touches them. All interaction components go through the
//! store; nothing else holds the graph.
//!
//! # Invariants
//!
//! 1. Node ids are unique and never reused while the store lives.
//! 2. At most one link exists per unordered endpoint pair; direction lives
//!    in the `left`/`right` flags (see [`super::link`]).
//! 3. Links never dangle: removing a node removes every link where it is
//!    an endpoint, in the same mutation.
//! 4. A child's parent must exist at the moment the child is created. The
//!    parent may be removed later; the child's `parent()` then refers to a
//!    dead id, which read paths treat as "no longer present".
//!
//! # Error policy
//!
//! Operations are total over well-formed input. Removals of absent ids are
//! no-ops that report `false`; the only `Err` in the module is creating a
//! child under a missing parent, which would break invariant 4.
//!
//! # Concurrency
//!
//! None. The store is driven strictly sequentially from the interaction
//! layer; there is exactly one logical thread of control and no locking.

use indexmap::IndexMap;
use tracing::debug;

use super::link::{Link, LinkKey};
use super::node::{IdAllocator, Node, NodeId, NodeSpec};

/// Errors produced by store mutations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    /// Tried to create a child under an id that is not in the store.
    #[error("parent node {0} not found")]
    MissingParent(NodeId),
}

/// A read-only copy of the full node and link sets.
///
/// Handed to the layout engine after every mutation and readable by the
/// render layer at any time. Being a copy, consumers never observe a
/// half-mutated collection.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// All live nodes. Identity is by id, not by position in the sequence.
    pub nodes: Vec<Node>,
    /// All live links, at most one per endpoint pair.
    pub links: Vec<Link>,
}

/// Owner of the graph: nodes, links, and the id allocator.
#[derive(Debug, Default)]
pub struct GraphStore {
    ids: IdAllocator,
    nodes: IndexMap<NodeId, Node>,
    links: IndexMap<LinkKey, Link>,
}

impl GraphStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Insert a new root node with the given attributes.
    ///
    /// Allocates the next id and returns it. Never fails.
    pub fn add_node(&mut self, spec: NodeSpec) -> NodeId {
        let id = self.ids.allocate();
        self.nodes.insert(id, Node::new(id, None, spec));
        debug!(id = id.raw(), "added root node");
        id
    }

    /// Insert a new node generated under `parent`.
    ///
    /// The parent must exist at creation time; its `children` list is not
    /// touched here (the expansion controller owns that bookkeeping).
    pub fn add_child(&mut self, parent: NodeId, spec: NodeSpec) -> Result<NodeId, GraphError> {
        if !self.nodes.contains_key(&parent) {
            return Err(GraphError::MissingParent(parent));
        }
        let id = self.ids.allocate();
        self.nodes.insert(id, Node::new(id, Some(parent), spec));
        debug!(id = id.raw(), parent = parent.raw(), "added child node");
        Ok(id)
    }

    /// Remove a node and every link where it is an endpoint.
    ///
    /// Returns whether anything was removed; absent ids are a no-op.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if self.nodes.shift_remove(&id).is_none() {
            return false;
        }
        self.links.retain(|key, _| !key.touches(id));
        debug!(id = id.raw(), "removed node and incident links");
        true
    }

    /// Create a link between two nodes, or strengthen an existing one.
    ///
    /// The pair is canonicalized so the smaller id is the source.
    /// `rightward` describes the drag direction: `true` means the gesture
    /// ran from the smaller id toward the larger one.
    ///
    /// - If no link exists for the pair, one is inserted with exactly one
    ///   arrowhead matching the gesture (`right` when rightward, `left`
    ///   otherwise).
    /// - If a link already exists, the matching flag is set to `true` and
    ///   nothing else changes. No duplicate is ever created.
    ///
    /// Returns `None` (and changes nothing) when either endpoint is not a
    /// live node, so links can never dangle from the moment of creation.
    pub fn upsert_link(&mut self, a: NodeId, b: NodeId, rightward: bool) -> Option<LinkKey> {
        if !self.nodes.contains_key(&a) || !self.nodes.contains_key(&b) {
            debug!(a = a.raw(), b = b.raw(), "link endpoint missing, ignoring");
            return None;
        }
        let key = LinkKey::new(a, b);
        match self.links.get_mut(&key) {
            Some(link) => {
                if rightward {
                    link.right = true;
                } else {
                    link.left = true;
                }
                debug!(
                    source = key.source().raw(),
                    target = key.target().raw(),
                    rightward,
                    "strengthened existing link"
                );
            }
            None => {
                self.links.insert(key, Link::new(key, !rightward, rightward));
                debug!(
                    source = key.source().raw(),
                    target = key.target().raw(),
                    rightward,
                    "added link"
                );
            }
        }
        Some(key)
    }

    /// Insert a plain directed link (source-to-target arrowhead only).
    ///
    /// Used by expansion, where every generated child gets one outgoing
    /// link from its parent. Same deduplication as [`Self::upsert_link`].
    pub fn add_directed_link(&mut self, from: NodeId, to: NodeId) -> Option<LinkKey> {
        self.upsert_link(from, to, from <= to)
    }

    /// Remove a link by its canonical pair. No-op (`false`) if absent.
    pub fn remove_link(&mut self, key: LinkKey) -> bool {
        let removed = self.links.shift_remove(&key).is_some();
        if removed {
            debug!(
                source = key.source().raw(),
                target = key.target().raw(),
                "removed link"
            );
        }
        removed
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Look up a node mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Look up a link by canonical pair.
    pub fn link(&self, key: LinkKey) -> Option<&Link> {
        self.links.get(&key)
    }

    /// Look up a link mutably.
    pub fn link_mut(&mut self, key: LinkKey) -> Option<&mut Link> {
        self.links.get_mut(&key)
    }

    /// Whether a node with this id is currently live.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterate all live nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate all live links in insertion order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Ids of every node whose `parent` is `of`.
    pub fn children_of(&self, of: NodeId) -> Vec<NodeId> {
        self.nodes
            .values()
            .filter(|n| n.parent() == Some(of))
            .map(|n| n.id())
            .collect()
    }

    /// Snapshot the full node and link sets.
    pub fn snapshot(&self) -> GraphView {
        GraphView {
            nodes: self.nodes.values().cloned().collect(),
            links: self.links.values().copied().collect(),
        }
    }

    /// How many ids have been allocated over the store's lifetime.
    pub fn ids_allocated(&self) -> u64 {
        self.ids.allocated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> NodeId {
        NodeId::from(raw)
    }

    #[test]
    fn add_node_assigns_sequential_ids() {
        let mut store = GraphStore::new();
        let a = store.add_node(NodeSpec::default());
        let b = store.add_node(NodeSpec::default());

        assert_eq!(a.raw(), 0);
        assert_eq!(b.raw(), 1);
        assert_eq!(store.node_count(), 2);
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut store = GraphStore::new();
        let a = store.add_node(NodeSpec::default());
        store.remove_node(a);

        let b = store.add_node(NodeSpec::default());
        assert_ne!(a, b);
        assert_eq!(b.raw(), 1);
    }

    #[test]
    fn add_child_requires_live_parent() {
        let mut store = GraphStore::new();
        let root = store.add_node(NodeSpec::default());

        let child = store.add_child(root, NodeSpec::default()).unwrap();
        assert_eq!(store.node(child).unwrap().parent(), Some(root));

        let err = store.add_child(id(99), NodeSpec::default()).unwrap_err();
        assert_eq!(err, GraphError::MissingParent(id(99)));
    }

    #[test]
    fn remove_node_cascades_to_links() {
        let mut store = GraphStore::new();
        let a = store.add_node(NodeSpec::default());
        let b = store.add_node(NodeSpec::default());
        let c = store.add_node(NodeSpec::default());
        store.upsert_link(a, b, true);
        store.upsert_link(b, c, true);
        store.upsert_link(a, c, true);

        assert!(store.remove_node(b));

        assert_eq!(store.link_count(), 1);
        assert!(store.link(LinkKey::new(a, c)).is_some());
        assert!(store.links().all(|l| !l.key().touches(b)));
    }

    #[test]
    fn remove_absent_node_is_noop() {
        let mut store = GraphStore::new();
        assert!(!store.remove_node(id(5)));
        assert_eq!(store.node_count(), 0);
    }

    #[test]
    fn upsert_link_canonicalizes_pair() {
        let mut store = GraphStore::new();
        let a = store.add_node(NodeSpec::default());
        let b = store.add_node(NodeSpec::default());

        // Drag from the larger id to the smaller one.
        let key = store.upsert_link(b, a, false).unwrap();
        let link = *store.link(key).unwrap();

        assert_eq!(link.source(), a);
        assert_eq!(link.target(), b);
        assert!(link.left);
        assert!(!link.right);
    }

    #[test]
    fn upsert_link_strengthens_instead_of_duplicating() {
        let mut store = GraphStore::new();
        let a = store.add_node(NodeSpec::default());
        let b = store.add_node(NodeSpec::default());

        store.upsert_link(a, b, true);
        store.upsert_link(b, a, false);

        assert_eq!(store.link_count(), 1);
        let link = *store.link(LinkKey::new(a, b)).unwrap();
        assert!(link.left);
        assert!(link.right);
    }

    #[test]
    fn remove_link_by_key() {
        let mut store = GraphStore::new();
        let a = store.add_node(NodeSpec::default());
        let b = store.add_node(NodeSpec::default());
        let key = store.upsert_link(a, b, true).unwrap();

        assert!(store.remove_link(key));
        assert!(!store.remove_link(key));
        assert_eq!(store.link_count(), 0);
    }

    #[test]
    fn snapshot_is_detached_from_store() {
        let mut store = GraphStore::new();
        let a = store.add_node(NodeSpec::default());
        let view = store.snapshot();

        store.remove_node(a);

        assert_eq!(view.nodes.len(), 1);
        assert_eq!(store.node_count(), 0);
    }
}
