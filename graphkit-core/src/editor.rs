//! Graph Editor
//!
//! The editor is the single entry point the embedding shell talks to. It
//! owns the store, the selection machine, the keyboard dispatcher and the
//! expansion controller, routes semantic input events between them, and
//! pushes a fresh snapshot to the layout sink after every mutation.
//!
//! # Event flow
//!
//! ```text
//! input adapter -> GraphEditor::handle -> selection / keyboard
//!                                      -> GraphStore mutation
//!                                      -> LayoutSink::set_graph
//! ```
//!
//! Every handler reports whether the graph (or selection) actually
//! changed, so an interaction that produced no visible effect is
//! distinguishable from one that did.
//!
//! All of this runs on one logical thread; handlers never suspend and
//! never re-enter one another.

use crate::graph::{
    CollapsePolicy, ExpansionController, GraphStore, GraphView, LinkKey, NodeId, NodeSpec,
};
use crate::interact::{InputEvent, KeyCode, KeyDispatcher, Selection, SelectionState};
use crate::layout::{LayoutSink, NullSink};

/// Interactive editor over a single graph.
///
/// Generic over the layout sink so tests can observe layout pushes and
/// the shell can plug in the force simulation.
pub struct GraphEditor<L: LayoutSink = NullSink> {
    store: GraphStore,
    selection: SelectionState,
    keys: KeyDispatcher,
    expander: ExpansionController,
    layout: L,
}

impl GraphEditor<NullSink> {
    /// Editor with no layout attached.
    pub fn new() -> Self {
        Self::with_layout(NullSink)
    }
}

impl Default for GraphEditor<NullSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LayoutSink> GraphEditor<L> {
    /// Editor pushing snapshots into `layout`.
    ///
    /// Starts with a single reflexive root node with capacity for two
    /// children, which is the canvas a fresh editing session shows.
    pub fn with_layout(layout: L) -> Self {
        let mut editor = Self {
            store: GraphStore::new(),
            selection: SelectionState::new(),
            keys: KeyDispatcher::new(),
            expander: ExpansionController::new(),
            layout,
        };
        editor.store.add_node(NodeSpec {
            reflexive: true,
            child_count: 2,
            is_open: false,
        });
        editor.sync_layout();
        editor
    }

    /// Switch the collapse policy (default: descendant removal).
    pub fn set_collapse_policy(&mut self, policy: CollapsePolicy) {
        self.expander = ExpansionController::with_policy(policy);
    }

    // ------------------------------------------------------------------
    // Event entry points
    // ------------------------------------------------------------------

    /// Route one semantic input event. Returns whether anything mutated.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDownOnNode(id) => self.pointer_down_on_node(id),
            InputEvent::PointerUpOnNode(id) => self.pointer_up_on_node(id),
            InputEvent::PointerUpElsewhere => {
                self.pointer_up_elsewhere();
                false
            }
            InputEvent::PointerDownOnLink(key) => self.pointer_down_on_link(key),
            InputEvent::KeyDown(code) => self.key_down(code),
            InputEvent::KeyUp(code) => {
                self.key_up(code);
                false
            }
        }
    }

    /// Press on a node: selection toggle plus the accordion side effect,
    /// unless the drag modifier reserves the press for repositioning.
    pub fn pointer_down_on_node(&mut self, id: NodeId) -> bool {
        self.keys.clear_latch();
        let mutated =
            self.selection
                .pointer_down_on_node(&mut self.store, &self.expander, id, self.keys.drag_mode());
        if mutated {
            self.sync_layout();
        }
        mutated
    }

    /// Release on a node: completes a drag-to-link gesture if one is live.
    pub fn pointer_up_on_node(&mut self, id: NodeId) -> bool {
        self.keys.clear_latch();
        let mutated = self.selection.pointer_up_on_node(&mut self.store, id);
        if mutated {
            self.sync_layout();
        }
        mutated
    }

    /// Release over empty canvas: abandons any live drag-to-link gesture.
    pub fn pointer_up_elsewhere(&mut self) {
        self.keys.clear_latch();
        self.selection.reset_pointer();
    }

    /// Press on a link: selection toggle only.
    pub fn pointer_down_on_link(&mut self, key: LinkKey) -> bool {
        self.keys.clear_latch();
        self.selection.pointer_down_on_link(key)
    }

    /// Keydown: dispatch through the per-press latch.
    pub fn key_down(&mut self, code: KeyCode) -> bool {
        let mutated = self.keys.key_down(&mut self.store, &mut self.selection, code);
        if mutated {
            self.selection.prune(&self.store);
            self.sync_layout();
        }
        mutated
    }

    /// Keyup: releases the latch (and drag mode for the modifier).
    pub fn key_up(&mut self, code: KeyCode) {
        self.keys.key_up(code);
    }

    // ------------------------------------------------------------------
    // Direct mutations
    // ------------------------------------------------------------------

    /// Add a root node outside any pointer gesture.
    pub fn add_root(&mut self, spec: NodeSpec) -> NodeId {
        let id = self.store.add_node(spec);
        self.sync_layout();
        id
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// The underlying store.
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.selection.selection()
    }

    /// Whether the drag modifier is held.
    pub fn drag_mode(&self) -> bool {
        self.keys.drag_mode()
    }

    /// The layout sink.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// The layout sink, mutably (stepping a simulation, resizing).
    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    /// Snapshot of the current node and link sets for the render layer.
    pub fn snapshot(&self) -> GraphView {
        self.store.snapshot()
    }

    fn sync_layout(&mut self) {
        self.layout.set_graph(&self.store.snapshot());
    }
}
