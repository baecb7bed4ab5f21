//! Selection & Linking State Machine
//!
//! Tracks which element is selected and arbitrates pointer press/release
//! sequences into one of two outcomes: a selection toggle (with the
//! accordion side effect on nodes) or a link creation between two nodes.
//!
//! # States
//!
//! At any moment exactly zero or one element is selected ([`Selection`]
//! makes more than one unrepresentable). Independently, the machine may
//! be tracking a pressed node, which is the candidate source of a
//! drag-to-link gesture.
//!
//! # Transitions
//!
//! - Press on a node with the drag modifier held: ignored here, the
//!   gesture belongs to the layout engine (repositioning).
//! - Press on a node: toggles its selection. Entering the selected state
//!   also toggles the node's expansion.
//! - Press on a link: toggles its selection, clearing any node selection.
//! - Release on a node while another node is pressed: creates or
//!   strengthens the link between the two; the link becomes selected.
//!   Release on the pressed node itself is a no-op.

use tracing::trace;

use crate::graph::{ExpansionController, GraphStore, LinkKey, NodeId};

/// The currently selected element, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// A node is selected.
    Node(NodeId),
    /// A link is selected.
    Link(LinkKey),
}

/// Pointer-interaction state machine.
#[derive(Debug, Default)]
pub struct SelectionState {
    selection: Selection,
    /// Node under the most recent unreleased press, if any.
    pressed: Option<NodeId>,
}

impl SelectionState {
    /// Fresh machine: nothing selected, nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selected node id, if a node is selected.
    pub fn selected_node(&self) -> Option<NodeId> {
        match self.selection {
            Selection::Node(id) => Some(id),
            _ => None,
        }
    }

    /// The selected link, if a link is selected.
    pub fn selected_link(&self) -> Option<LinkKey> {
        match self.selection {
            Selection::Link(key) => Some(key),
            _ => None,
        }
    }

    /// Whether anything is selected.
    pub fn has_selection(&self) -> bool {
        self.selection != Selection::None
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.selection = Selection::None;
    }

    /// Forget the pressed node (end of a pointer sequence).
    pub fn reset_pointer(&mut self) {
        self.pressed = None;
    }

    /// Clear the selection if its target is no longer in the store.
    ///
    /// Mutations elsewhere (cascading removals, collapses) can take the
    /// selected element with them; callers run this afterwards so the
    /// selection never points at a dead id.
    pub fn prune(&mut self, store: &GraphStore) {
        let stale = match self.selection {
            Selection::None => false,
            Selection::Node(id) => !store.contains_node(id),
            Selection::Link(key) => store.link(key).is_none(),
        };
        if stale {
            trace!("selection target removed, clearing selection");
            self.selection = Selection::None;
        }
    }

    /// Handle a press on a node. Returns whether the graph mutated.
    ///
    /// With `drag_modifier` held the press is reserved for repositioning
    /// and changes nothing here. Otherwise the node's selection toggles;
    /// newly selecting a node also toggles its expansion (closed nodes
    /// open, open nodes collapse).
    pub fn pointer_down_on_node(
        &mut self,
        store: &mut GraphStore,
        expander: &ExpansionController,
        id: NodeId,
        drag_modifier: bool,
    ) -> bool {
        if drag_modifier {
            return false;
        }
        self.pressed = Some(id);

        if self.selected_node() == Some(id) {
            self.selection = Selection::None;
            return false;
        }

        self.selection = Selection::Node(id);
        let mutated = expander.toggle(store, id);
        // A legacy-policy collapse can remove the node we just selected.
        self.prune(store);
        mutated
    }

    /// Handle a press on a link: toggles its selection. Never mutates.
    pub fn pointer_down_on_link(&mut self, id: LinkKey) -> bool {
        if self.selected_link() == Some(id) {
            self.selection = Selection::None;
        } else {
            self.selection = Selection::Link(id);
        }
        false
    }

    /// Handle a release on a node. Returns whether the graph mutated.
    ///
    /// Completes a drag-to-link gesture when a different node was
    /// pressed: the link between the two is created (or its matching
    /// arrowhead strengthened) and becomes the selection. The arrowhead
    /// points along the gesture, with the pair stored canonically.
    pub fn pointer_up_on_node(&mut self, store: &mut GraphStore, id: NodeId) -> bool {
        let Some(from) = self.pressed.take() else {
            return false;
        };
        // Drag-to-self is a no-op.
        if from == id {
            return false;
        }

        // An endpoint can vanish mid-gesture (a press may collapse part
        // of the graph); the store refuses to link dead nodes.
        let rightward = from < id;
        let Some(key) = store.upsert_link(from, id, rightward) else {
            return false;
        };
        self.selection = Selection::Link(key);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeSpec;

    fn two_leaves() -> (GraphStore, NodeId, NodeId) {
        let mut store = GraphStore::new();
        let spec = NodeSpec {
            child_count: 0,
            ..NodeSpec::default()
        };
        let a = store.add_node(spec);
        let b = store.add_node(spec);
        (store, a, b)
    }

    #[test]
    fn pressing_a_node_selects_it_and_expands() {
        let mut store = GraphStore::new();
        let root = store.add_node(NodeSpec::default());
        let expander = ExpansionController::new();
        let mut sel = SelectionState::new();

        let mutated = sel.pointer_down_on_node(&mut store, &expander, root, false);

        assert!(mutated);
        assert_eq!(sel.selected_node(), Some(root));
        assert!(store.node(root).unwrap().is_open);
    }

    #[test]
    fn pressing_selected_node_deselects() {
        let (mut store, a, _) = two_leaves();
        let expander = ExpansionController::new();
        let mut sel = SelectionState::new();

        sel.pointer_down_on_node(&mut store, &expander, a, false);
        assert_eq!(sel.selected_node(), Some(a));

        let mutated = sel.pointer_down_on_node(&mut store, &expander, a, false);
        assert!(!mutated);
        assert_eq!(sel.selection(), Selection::None);
    }

    #[test]
    fn drag_modifier_press_is_ignored() {
        let (mut store, a, _) = two_leaves();
        let expander = ExpansionController::new();
        let mut sel = SelectionState::new();

        let mutated = sel.pointer_down_on_node(&mut store, &expander, a, true);

        assert!(!mutated);
        assert_eq!(sel.selection(), Selection::None);
        // No press was tracked, so a release elsewhere creates nothing.
        assert!(!sel.pointer_up_on_node(&mut store, a));
    }

    #[test]
    fn selecting_a_link_clears_node_selection() {
        let (mut store, a, b) = two_leaves();
        let expander = ExpansionController::new();
        let mut sel = SelectionState::new();
        let key = store.upsert_link(a, b, true).unwrap();

        sel.pointer_down_on_node(&mut store, &expander, a, false);
        sel.pointer_down_on_link(key);

        assert_eq!(sel.selected_link(), Some(key));
        assert_eq!(sel.selected_node(), None);

        // Toggling again empties the selection.
        sel.pointer_down_on_link(key);
        assert_eq!(sel.selection(), Selection::None);
    }

    #[test]
    fn drag_between_nodes_creates_selected_link() {
        let (mut store, a, b) = two_leaves();
        let expander = ExpansionController::new();
        let mut sel = SelectionState::new();

        sel.pointer_down_on_node(&mut store, &expander, b, false);
        let mutated = sel.pointer_up_on_node(&mut store, a);

        assert!(mutated);
        let key = sel.selected_link().unwrap();
        let link = *store.link(key).unwrap();
        // Gesture ran from the larger id to the smaller: arrow at source.
        assert_eq!(link.source(), a);
        assert_eq!(link.target(), b);
        assert!(link.left);
        assert!(!link.right);
    }

    #[test]
    fn drag_to_self_is_a_noop() {
        let (mut store, a, _) = two_leaves();
        let expander = ExpansionController::new();
        let mut sel = SelectionState::new();

        sel.pointer_down_on_node(&mut store, &expander, a, false);
        let mutated = sel.pointer_up_on_node(&mut store, a);

        assert!(!mutated);
        assert_eq!(store.link_count(), 0);
        // The press is consumed either way.
        assert!(!sel.pointer_up_on_node(&mut store, a));
    }

    #[test]
    fn prune_clears_dead_selection() {
        let (mut store, a, _) = two_leaves();
        let expander = ExpansionController::new();
        let mut sel = SelectionState::new();

        sel.pointer_down_on_node(&mut store, &expander, a, false);
        store.remove_node(a);
        sel.prune(&store);

        assert_eq!(sel.selection(), Selection::None);
    }
}
