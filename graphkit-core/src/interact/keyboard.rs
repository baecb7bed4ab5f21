//! Keyboard Command Dispatcher
//!
//! Maps key presses onto store and selection mutations, with at-most-one
//! action per physical press.
//!
//! # The latch
//!
//! Environments auto-repeat keydown while a key is held. The dispatcher
//! records the first keydown seen since the last keyup and ignores every
//! further keydown (same key or not) until any keyup clears the latch.
//! Unmapped keys latch too; they just carry no action.
//!
//! # Command map
//!
//! | Key                | Effect                                                      |
//! |--------------------|-------------------------------------------------------------|
//! | Ctrl               | hold to enable node-drag mode (acts without a selection)    |
//! | Backspace / Delete | remove the selected node (cascading) or link, then deselect |
//! | B                  | selected link: arrowheads at both ends                      |
//! | L                  | selected link: arrowhead at the source end only             |
//! | R                  | selected node: toggle reflexive; link: target end only      |
//!
//! Everything except Ctrl requires a selection; without one the keydown
//! still latches but does nothing.

use tracing::{debug, trace};

use super::event::KeyCode;
use super::selection::SelectionState;
use crate::graph::GraphStore;

/// One-action-per-press keyboard dispatcher.
#[derive(Debug, Default)]
pub struct KeyDispatcher {
    /// Key of the first keydown since the last keyup, if a press is live.
    latched: Option<KeyCode>,
    /// Whether the drag modifier is currently held.
    drag_mode: bool,
}

impl KeyDispatcher {
    /// Fresh dispatcher: nothing latched, drag mode off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the drag modifier is held (node presses reposition
    /// instead of selecting while this is on).
    pub fn drag_mode(&self) -> bool {
        self.drag_mode
    }

    /// Forget the current press.
    ///
    /// Pointer transitions call this so a keydown following a click is
    /// honored even if the environment swallowed the matching keyup.
    pub fn clear_latch(&mut self) {
        self.latched = None;
    }

    /// Handle a keydown. Returns whether the graph or selection mutated.
    pub fn key_down(
        &mut self,
        store: &mut GraphStore,
        selection: &mut SelectionState,
        code: KeyCode,
    ) -> bool {
        if self.latched.is_some() {
            trace!(?code, "keydown ignored, press already latched");
            return false;
        }
        self.latched = Some(code);

        if code == KeyCode::Ctrl {
            self.drag_mode = true;
            return false;
        }

        if !selection.has_selection() {
            return false;
        }

        match code {
            KeyCode::Backspace | KeyCode::Delete => {
                let removed = if let Some(id) = selection.selected_node() {
                    store.remove_node(id)
                } else if let Some(key) = selection.selected_link() {
                    store.remove_link(key)
                } else {
                    false
                };
                selection.clear();
                debug!(removed, "delete command");
                removed
            }
            KeyCode::KeyB => {
                if let Some(link) = selection.selected_link().and_then(|k| store.link_mut(k)) {
                    link.left = true;
                    link.right = true;
                    true
                } else {
                    false
                }
            }
            KeyCode::KeyL => {
                if let Some(link) = selection.selected_link().and_then(|k| store.link_mut(k)) {
                    link.left = true;
                    link.right = false;
                    true
                } else {
                    false
                }
            }
            KeyCode::KeyR => {
                if let Some(id) = selection.selected_node() {
                    if let Some(node) = store.node_mut(id) {
                        node.reflexive = !node.reflexive;
                        return true;
                    }
                    false
                } else if let Some(link) = selection.selected_link().and_then(|k| store.link_mut(k))
                {
                    link.left = false;
                    link.right = true;
                    true
                } else {
                    false
                }
            }
            KeyCode::Ctrl | KeyCode::Other(_) => false,
        }
    }

    /// Handle a keyup: clears the latch, and drag mode if it was Ctrl.
    pub fn key_up(&mut self, code: KeyCode) {
        self.latched = None;
        if code == KeyCode::Ctrl {
            self.drag_mode = false;
        }
    }
}
