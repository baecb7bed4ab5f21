//! Graphkit Core
//!
//! This crate is the engine of the Graphkit diagram editor: the graph data
//! model plus the interaction logic that decides which mutations happen and
//! when. It draws nothing and reads no raw input; an embedding shell
//! classifies platform events into semantic ones and renders the graph from
//! snapshots.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: the authoritative store of nodes and links, id allocation,
//!   and the hierarchical expand/collapse controller
//! - `interact`: the selection/linking pointer state machine and the
//!   keyboard command dispatcher
//! - `layout`: the port to the external force simulation that positions
//!   nodes, plus a `force_graph`-backed adapter
//! - `editor`: the facade tying the above together
//!
//! # Example
//!
//! ```rust
//! use graphkit_core::editor::GraphEditor;
//! use graphkit_core::interact::{InputEvent, KeyCode};
//!
//! let mut editor = GraphEditor::new();
//! let root = editor.store().nodes().next().unwrap().id();
//!
//! // Clicking the root selects it and expands its children.
//! editor.handle(InputEvent::PointerDownOnNode(root));
//! assert_eq!(editor.store().node_count(), 3);
//!
//! // Delete removes the selected node and every incident link.
//! editor.handle(InputEvent::KeyDown(KeyCode::Delete));
//! assert!(!editor.store().contains_node(root));
//! ```
//!
//! # Concurrency
//!
//! There is exactly one logical thread of control: every mutation runs
//! synchronously inside one event handler, so the crate has no locks. The
//! only ongoing process is the external layout simulation, which is fed
//! snapshots and never awaited.

pub mod editor;
pub mod graph;
pub mod interact;
pub mod layout;

pub use editor::GraphEditor;
pub use graph::{GraphStore, GraphView, Link, LinkKey, Node, NodeId, NodeSpec};
pub use interact::{InputEvent, KeyCode, Selection};
pub use layout::{ForceLayout, LayoutSink};
