//! Hierarchical Expansion
//!
//! The expansion controller mediates the accordion behavior of the editor:
//! selecting a closed node materializes a generated set of children under
//! it, selecting it again removes nodes.
//!
//! # Expansion
//!
//! Expanding a node with capacity `n` creates exactly `n` new nodes (each
//! with the default capacity so they can be expanded in turn) and one
//! outgoing link from the parent to each child, arrowhead at the child end.
//!
//! # Collapse
//!
//! Two removal scopes are supported, selected by [`CollapsePolicy`]:
//!
//! - [`CollapsePolicy::Descendants`] removes the collapsed node's own
//!   transitive descendants. This is the default and what users expect
//!   of an accordion.
//! - [`CollapsePolicy::LegacySiblings`] removes every node sharing the
//!   collapsed node's parent (the collapsed node included, since it
//!   trivially shares its own parent). This reproduces the historical
//!   behavior of the first editor build and exists so the divergence
//!   between the two scopes stays visible in the test suite.
//!
//! The historical build also walked its id counter backwards during the
//! removal scan. That is not reproduced here under either policy: ids are
//! never reused, which the uniqueness guarantees of the store depend on.

use tracing::debug;

use super::node::{NodeId, NodeSpec};
use super::store::GraphStore;

/// Capacity given to generated children, so each can be expanded once more.
pub const DEFAULT_CHILD_COUNT: u32 = 2;

/// Which nodes a collapse removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollapsePolicy {
    /// Remove the collapsed node's own transitive descendants.
    #[default]
    Descendants,
    /// Remove every node whose parent equals the collapsed node's parent.
    /// Historical behavior, kept selectable for comparison.
    LegacySiblings,
}

/// Generates and removes child nodes under a parent via the store API.
#[derive(Debug, Default)]
pub struct ExpansionController {
    policy: CollapsePolicy,
}

impl ExpansionController {
    /// Controller with the default (descendant-removal) collapse policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with an explicit collapse policy.
    pub fn with_policy(policy: CollapsePolicy) -> Self {
        Self { policy }
    }

    /// The active collapse policy.
    pub fn policy(&self) -> CollapsePolicy {
        self.policy
    }

    /// Expand `id`: mark it open and generate its children.
    ///
    /// Returns the number of children created. A node with no capacity
    /// (or an id no longer in the store) is a logged no-op, not an error.
    pub fn expand(&self, store: &mut GraphStore, id: NodeId) -> usize {
        let child_count = match store.node(id) {
            Some(node) => node.child_count,
            None => {
                debug!(id = id.raw(), "expand target no longer in store");
                return 0;
            }
        };
        if child_count == 0 {
            debug!(id = id.raw(), "node has no expansion capacity");
            return 0;
        }

        if let Some(node) = store.node_mut(id) {
            node.is_open = true;
            node.children.clear();
        }

        for _ in 0..child_count {
            let spec = NodeSpec {
                reflexive: false,
                child_count: DEFAULT_CHILD_COUNT,
                is_open: false,
            };
            // Parent is live (checked above), so this cannot fail.
            let child = match store.add_child(id, spec) {
                Ok(child) => child,
                Err(_) => break,
            };
            if let Some(node) = store.node_mut(id) {
                node.children.push(child);
            }
            store.add_directed_link(id, child);
        }

        let created = store.node(id).map(|n| n.children.len()).unwrap_or(0);
        debug!(id = id.raw(), created, "expanded node");
        created
    }

    /// Collapse `id`: mark it closed and remove nodes per the policy.
    ///
    /// Returns the number of nodes removed. Incident links go with them
    /// (store cascade). A missing id is a no-op.
    pub fn collapse(&self, store: &mut GraphStore, id: NodeId) -> usize {
        let parent = match store.node(id) {
            Some(node) => node.parent(),
            None => return 0,
        };

        if let Some(node) = store.node_mut(id) {
            node.is_open = false;
        }

        let doomed = match self.policy {
            CollapsePolicy::Descendants => {
                if let Some(node) = store.node_mut(id) {
                    node.children.clear();
                }
                descendants_of(store, id)
            }
            CollapsePolicy::LegacySiblings => store
                .nodes()
                .filter(|n| n.parent() == parent)
                .map(|n| n.id())
                .collect(),
        };

        let mut removed = 0;
        for victim in doomed {
            if store.remove_node(victim) {
                removed += 1;
            }
        }
        debug!(id = id.raw(), removed, policy = ?self.policy, "collapsed node");
        removed
    }

    /// Expand a closed node, collapse an open one.
    ///
    /// Returns whether the graph changed.
    pub fn toggle(&self, store: &mut GraphStore, id: NodeId) -> bool {
        match store.node(id) {
            Some(node) if node.is_open => {
                // Closing is a mutation even when nothing gets removed.
                self.collapse(store, id);
                true
            }
            Some(_) => self.expand(store, id) > 0,
            None => false,
        }
    }
}

/// Transitive descendants of `id`, by scanning parent pointers.
///
/// Scanning (rather than trusting the recorded `children` lists) keeps the
/// result correct even if a child was deleted individually beforehand.
fn descendants_of(store: &GraphStore, id: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut frontier = vec![id];
    while let Some(current) = frontier.pop() {
        for child in store.children_of(current) {
            frontier.push(child);
            out.push(child);
        }
    }
    out
}
