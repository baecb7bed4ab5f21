//! Graph Links
//!
//! A link is an edge between two nodes with two independent arrowhead
//! flags. Direction is encoded entirely by the flags, never by storing
//! the same pair twice:
//!
//! - `right = true` draws an arrowhead at the target end
//! - `left = true` draws an arrowhead at the source end
//! - both true means bidirectional, both false a plain line
//!
//! # Canonical pairs
//!
//! The store keeps at most one link per unordered node pair. To make
//! deduplication stable, the endpoint with the smaller id is always the
//! source. [`LinkKey`] enforces that ordering at construction, so a key
//! built from `(b, a)` and one built from `(a, b)` compare equal.

use super::node::NodeId;

/// Canonical unordered pair of node ids identifying a link.
///
/// The smaller id is always first. This is a storage convention for
/// deduplication, not a semantic direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkKey {
    source: NodeId,
    target: NodeId,
}

impl LinkKey {
    /// Build the canonical key for a pair of endpoints, in either order.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { source: a, target: b }
        } else {
            Self { source: b, target: a }
        }
    }

    /// The smaller endpoint id.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The larger endpoint id.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Whether `id` is one of the two endpoints.
    pub fn touches(&self, id: NodeId) -> bool {
        self.source == id || self.target == id
    }
}

/// An edge between two nodes.
///
/// `source < target` always holds (see [`LinkKey`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    key: LinkKey,
    /// Arrowhead at the source end.
    pub left: bool,
    /// Arrowhead at the target end.
    pub right: bool,
}

impl Link {
    pub(crate) fn new(key: LinkKey, left: bool, right: bool) -> Self {
        Self { key, left, right }
    }

    /// The canonical endpoint pair.
    pub fn key(&self) -> LinkKey {
        self.key
    }

    /// The source endpoint (smaller id).
    pub fn source(&self) -> NodeId {
        self.key.source
    }

    /// The target endpoint (larger id).
    pub fn target(&self) -> NodeId {
        self.key.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_orders_endpoints_by_id() {
        let key = LinkKey::new(NodeId::from(9), NodeId::from(2));
        assert_eq!(key.source().raw(), 2);
        assert_eq!(key.target().raw(), 9);
    }

    #[test]
    fn keys_compare_equal_regardless_of_order() {
        let a = NodeId::from(1);
        let b = NodeId::from(4);
        assert_eq!(LinkKey::new(a, b), LinkKey::new(b, a));
    }

    #[test]
    fn touches_matches_both_endpoints() {
        let key = LinkKey::new(NodeId::from(0), NodeId::from(3));
        assert!(key.touches(NodeId::from(0)));
        assert!(key.touches(NodeId::from(3)));
        assert!(!key.touches(NodeId::from(1)));
    }
}
