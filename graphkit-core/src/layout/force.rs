//! Force-Directed Layout Adapter
//!
//! Wraps the `force_graph` simulation behind [`LayoutSink`]. Each snapshot
//! re-seeds the simulation; nodes that were already being simulated keep
//! their current positions, new nodes are seeded on a circle around the
//! viewport center so the simulation pulls them into place.
//!
//! The adapter is pull-based on the output side: the embedding render
//! loop calls [`ForceLayout::step`] once per frame and reads
//! [`ForceLayout::positions`] afterwards.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::LayoutSink;
use crate::graph::{GraphView, NodeId};

const NODE_MASS: f32 = 10.0;
const SEED_RADIUS: f64 = 100.0;

/// Force simulation driving node positions for the render layer.
pub struct ForceLayout {
    sim: ForceGraph<NodeId, ()>,
    index: HashMap<NodeId, DefaultNodeIdx>,
    width: f64,
    height: f64,
}

impl ForceLayout {
    /// Create an empty simulation for a viewport of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            sim: ForceGraph::new(Self::parameters()),
            index: HashMap::new(),
            width,
            height,
        }
    }

    fn parameters() -> SimulationParameters {
        SimulationParameters {
            force_charge: 150.0,
            force_spring: 0.05,
            force_max: 100.0,
            node_speed: 3000.0,
            damping_factor: 0.9,
        }
    }

    /// Update the viewport size used to seed new nodes.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.sim.update(dt);
    }

    /// Current `(id, x, y)` for every simulated node.
    pub fn positions(&self) -> Vec<(NodeId, f32, f32)> {
        let mut by_idx = HashMap::new();
        self.sim.visit_nodes(|node| {
            by_idx.insert(node.index(), (node.x(), node.y()));
        });

        self.index
            .iter()
            .filter_map(|(&id, idx)| by_idx.get(idx).map(|&(x, y)| (id, x, y)))
            .collect()
    }

    /// Number of nodes currently simulated.
    pub fn node_count(&self) -> usize {
        self.index.len()
    }
}

impl LayoutSink for ForceLayout {
    fn set_graph(&mut self, view: &GraphView) {
        let previous: HashMap<NodeId, (f32, f32)> = self
            .positions()
            .into_iter()
            .map(|(id, x, y)| (id, (x, y)))
            .collect();

        let mut sim = ForceGraph::new(Self::parameters());
        let mut index = HashMap::new();

        for (i, node) in view.nodes.iter().enumerate() {
            let (x, y) = previous.get(&node.id()).copied().unwrap_or_else(|| {
                let angle = (i as f64) * 2.0 * PI / view.nodes.len().max(1) as f64;
                (
                    (self.width / 2.0 + SEED_RADIUS * angle.cos()) as f32,
                    (self.height / 2.0 + SEED_RADIUS * angle.sin()) as f32,
                )
            });
            let idx = sim.add_node(NodeData {
                x,
                y,
                mass: NODE_MASS,
                is_anchor: false,
                user_data: node.id(),
            });
            index.insert(node.id(), idx);
        }

        for link in &view.links {
            if let (Some(&src), Some(&tgt)) =
                (index.get(&link.source()), index.get(&link.target()))
            {
                sim.add_edge(src, tgt, EdgeData::default());
            }
        }

        self.sim = sim;
        self.index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphStore, NodeSpec};

    #[test]
    fn snapshot_populates_simulation() {
        let mut store = GraphStore::new();
        let a = store.add_node(NodeSpec::default());
        let b = store.add_node(NodeSpec::default());
        store.upsert_link(a, b, true);

        let mut layout = ForceLayout::new(960.0, 600.0);
        layout.set_graph(&store.snapshot());

        assert_eq!(layout.node_count(), 2);
        let positions = layout.positions();
        assert_eq!(positions.len(), 2);
        assert!(positions.iter().any(|&(id, _, _)| id == a));
        assert!(positions.iter().any(|&(id, _, _)| id == b));
    }

    #[test]
    fn surviving_nodes_keep_their_positions() {
        let mut store = GraphStore::new();
        let a = store.add_node(NodeSpec::default());
        let b = store.add_node(NodeSpec::default());

        let mut layout = ForceLayout::new(960.0, 600.0);
        layout.set_graph(&store.snapshot());
        layout.step(0.016);

        let before: HashMap<NodeId, (f32, f32)> = layout
            .positions()
            .into_iter()
            .map(|(id, x, y)| (id, (x, y)))
            .collect();

        store.remove_node(b);
        layout.set_graph(&store.snapshot());

        let after = layout.positions();
        assert_eq!(after.len(), 1);
        let (id, x, y) = after[0];
        assert_eq!(id, a);
        assert_eq!(before[&a], (x, y));
    }

    #[test]
    fn removed_nodes_leave_the_simulation() {
        let mut store = GraphStore::new();
        let a = store.add_node(NodeSpec::default());
        store.add_node(NodeSpec::default());

        let mut layout = ForceLayout::new(960.0, 600.0);
        layout.set_graph(&store.snapshot());
        assert_eq!(layout.node_count(), 2);

        store.remove_node(a);
        layout.set_graph(&store.snapshot());
        assert_eq!(layout.node_count(), 1);
    }
}
