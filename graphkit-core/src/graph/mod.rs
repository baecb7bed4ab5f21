//! Graph Data Model
//!
//! This module owns the authoritative graph: nodes, links, id allocation,
//! and the expansion controller that grows and prunes the hierarchy.
//!
//! # Design Decisions
//!
//! 1. Collections are `IndexMap`s keyed by id: O(1) lookup with a stable,
//!    deterministic iteration order for snapshot consumers.
//!
//! 2. Links are keyed by a canonical unordered endpoint pair (smaller id
//!    first), so there can never be two links between the same nodes.
//!    Direction is carried by per-end arrowhead flags instead.
//!
//! 3. Node ids come from an allocator owned by the store, not a global
//!    counter, and are never reused.

pub mod expand;
mod link;
mod node;
mod store;

pub use expand::{CollapsePolicy, ExpansionController, DEFAULT_CHILD_COUNT};
pub use link::{Link, LinkKey};
pub use node::{IdAllocator, Node, NodeId, NodeSpec};
pub use store::{GraphError, GraphStore, GraphView};
