//! Semantic Input Events
//!
//! The core never sees raw pointer coordinates or scancodes. An input
//! adapter (outside this crate) classifies platform events into the small
//! vocabulary below and feeds them to the editor.

use crate::graph::{LinkKey, NodeId};

/// A key, already decoded by the input adapter.
///
/// Only the keys in the editor's command map get their own variant;
/// everything else arrives as [`KeyCode::Other`] and still participates
/// in press/release latching, just without an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// Modifier enabling node-drag-to-reposition while held.
    Ctrl,
    /// Delete the selected element.
    Backspace,
    /// Delete the selected element.
    Delete,
    /// Arrowheads at both ends of the selected link.
    KeyB,
    /// Arrowhead at the source end only.
    KeyL,
    /// Toggle reflexive on a node, or arrowhead at the target end only.
    KeyR,
    /// Any other key; ignored by the command map.
    Other(u32),
}

/// One classified input event, as delivered by the input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed over a node.
    PointerDownOnNode(NodeId),
    /// Primary button released over a node.
    PointerUpOnNode(NodeId),
    /// Primary button released over empty canvas, abandoning any
    /// drag-to-link gesture in progress.
    PointerUpElsewhere,
    /// Primary button pressed over a link.
    PointerDownOnLink(LinkKey),
    /// A key went down. The environment may repeat this while held.
    KeyDown(KeyCode),
    /// A key came back up.
    KeyUp(KeyCode),
}
