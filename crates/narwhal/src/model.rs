use indexmap::IndexMap;
use narwhal_graph::{Forest, NodeId, Point};
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

/// Final node positions, keyed by node id in ascending id order.
pub type Layout = IndexMap<NodeId, Point, FxBuildHasher>;

/// Output of [`crate::layout_forest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestLayout {
    /// One root per tree, in layout order.
    pub roots: Vec<NodeId>,
    pub positions: Layout,
}

/// Output of the full pipeline, [`crate::layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Input points after deduplication, indexed by [`NodeId`].
    pub nodes: Vec<Point>,
    pub forest: Forest,
    pub roots: Vec<NodeId>,
    pub positions: Layout,
}

/// Per-run position accumulator, indexed by node id.
#[derive(Debug, Clone)]
pub(crate) struct Positions {
    slots: Vec<Option<Point>>,
}

impl Positions {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<Point> {
        self.slots.get(id.index()).copied().flatten()
    }

    pub(crate) fn set(&mut self, id: NodeId, p: Point) {
        if let Some(slot) = self.slots.get_mut(id.index()) {
            *slot = Some(p);
        }
    }

    pub(crate) fn shift_x(&mut self, id: NodeId, dx: f64) {
        if let Some(Some(p)) = self.slots.get_mut(id.index()) {
            *p = p.translated(dx, 0.0);
        }
    }

    pub(crate) fn into_layout(self) -> Layout {
        self.slots
            .into_iter()
            .enumerate()
            .filter_map(|(ix, p)| p.map(|p| (NodeId::new(ix), p)))
            .collect()
    }
}
