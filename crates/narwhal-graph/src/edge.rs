use crate::error::Result;
use crate::ids::{NodeId, NodeSet};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An undirected weighted edge. `weight` is the squared Euclidean distance between the
/// endpoints; it orders edges the same way the true distance does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

impl Edge {
    pub const fn new(source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Builds the edge between two nodes of `nodes`, weighting it by squared distance.
    pub fn between(nodes: &NodeSet, source: NodeId, target: NodeId) -> Result<Self> {
        let a = nodes.require(source)?;
        let b = nodes.require(target)?;
        Ok(Self::new(source, target, a.distance_squared(&b)))
    }

    /// Endpoints as `(min, max)`, independent of direction.
    pub fn key(&self) -> (NodeId, NodeId) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }

    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.source {
            Some(self.target)
        } else if node == self.target {
            Some(self.source)
        } else {
            None
        }
    }

    /// Total order used by Kruskal: ascending weight, ties broken by endpoint ids.
    pub fn kruskal_order(a: &Edge, b: &Edge) -> Ordering {
        a.weight
            .total_cmp(&b.weight)
            .then_with(|| a.key().cmp(&b.key()))
    }
}
