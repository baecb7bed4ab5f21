//! Layout Port
//!
//! The editor does not position nodes; an external force simulation does.
//! This module defines the narrow contract between the two and ships two
//! implementations: a no-op sink and an adapter over the `force_graph`
//! simulation crate.
//!
//! The flow is push-then-pull: after every store mutation the editor
//! pushes the full node/link sets into the sink ([`LayoutSink::set_graph`])
//! so the simulation can re-seed itself; the render layer then pulls
//! positions per animation frame. The core never waits on the simulation.

mod force;

pub use force::ForceLayout;

use crate::graph::GraphView;

/// Consumer of graph snapshots, normally a layout engine.
pub trait LayoutSink {
    /// Receive the full, de-duplicated node and link sets.
    ///
    /// Called after every graph mutation, before the next layout tick.
    fn set_graph(&mut self, view: &GraphView);
}

/// A sink that ignores everything. Useful headless and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LayoutSink for NullSink {
    fn set_graph(&mut self, _view: &GraphView) {}
}

/// A sink that remembers what it was given. Used to assert that every
/// mutation reaches the layout port.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Number of `set_graph` calls received.
    pub updates: usize,
    /// The most recent snapshot, if any.
    pub last: Option<GraphView>,
}

impl LayoutSink for RecordingSink {
    fn set_graph(&mut self, view: &GraphView) {
        self.updates += 1;
        self.last = Some(view.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphStore, NodeSpec};

    #[test]
    fn recording_sink_keeps_latest_view() {
        let mut store = GraphStore::new();
        let mut sink = RecordingSink::default();

        store.add_node(NodeSpec::default());
        sink.set_graph(&store.snapshot());
        store.add_node(NodeSpec::default());
        sink.set_graph(&store.snapshot());

        assert_eq!(sink.updates, 2);
        assert_eq!(sink.last.as_ref().unwrap().nodes.len(), 2);
    }
}
