//! Minimum spanning forest (Kruskal).

use crate::edge::Edge;
use crate::error::Result;
use crate::ids::NodeSet;
use crate::union_find::UnionFind;
use serde::{Deserialize, Serialize};

/// The selected edges of a minimum spanning forest, one tree per connected component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    /// Edges in selection order (ascending weight).
    pub edges: Vec<Edge>,
    pub total_weight: f64,
    /// Number of connected components, isolated nodes included.
    pub components: usize,
}

impl Forest {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Runs Kruskal over `candidates` for the node universe `nodes`.
///
/// Edges are scanned in [`Edge::kruskal_order`], so equal weights resolve the same way on every
/// run. All candidates are scanned; the result spans every component, not only the first one.
/// An edge endpoint outside `nodes` fails the whole call with [`crate::Error::UnknownNode`].
pub fn minimum_spanning_forest(nodes: &NodeSet, candidates: &[Edge]) -> Result<Forest> {
    for e in candidates {
        nodes.require(e.source)?;
        nodes.require(e.target)?;
    }

    let mut sorted = candidates.to_vec();
    sorted.sort_by(Edge::kruskal_order);

    let mut uf = UnionFind::new(nodes.len());
    let mut forest = Forest::default();
    for e in sorted {
        if uf.union(e.source, e.target)? {
            forest.total_weight += e.weight;
            forest.edges.push(e);
        }
    }
    forest.components = uf.component_count();

    tracing::debug!(
        nodes = nodes.len(),
        candidates = candidates.len(),
        selected = forest.edges.len(),
        components = forest.components,
        total_weight = forest.total_weight,
        "minimum spanning forest selected"
    );
    Ok(forest)
}
