//! Visibility graph construction.

use crate::edge::Edge;
use crate::error::Result;
use crate::geom::{Point, Segment};
use crate::ids::{NodeId, NodeSet};
use rustc_hash::FxHashSet;

/// Answers line-of-sight queries against a fixed set of obstacle segments.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityChecker<'a> {
    obstacles: &'a [Segment],
}

impl<'a> VisibilityChecker<'a> {
    pub fn new(obstacles: &'a [Segment]) -> Self {
        Self { obstacles }
    }

    pub fn obstacles(&self) -> &'a [Segment] {
        self.obstacles
    }

    /// True when the segment `start`-`end` is not blocked by any obstacle, following
    /// [`Segment::is_blocked_by`].
    pub fn is_visible(&self, start: Point, end: Point) -> bool {
        let sight = Segment::new(start, end);
        !self.obstacles.iter().any(|o| sight.is_blocked_by(o))
    }

    fn visible_pairs(&self, nodes: &[(NodeId, Point)]) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (i, &(a, pa)) in nodes.iter().enumerate() {
            for &(b, pb) in &nodes[i + 1..] {
                if self.is_visible(pa, pb) {
                    edges.push(Edge::new(a, b, pa.distance_squared(&pb)));
                }
            }
        }
        tracing::debug!(
            nodes = nodes.len(),
            obstacles = self.obstacles.len(),
            candidates = edges.len(),
            "visibility graph built"
        );
        edges
    }
}

/// Candidate edges between every mutually visible pair of `points`.
///
/// Every point must belong to `nodes`; a point that does not is reported as
/// [`crate::Error::UnknownPoint`] instead of being skipped. Points that map to the same node are
/// considered once. Pairs are enumerated in `points` order with the earlier point as the edge
/// source.
pub fn candidate_edges(
    nodes: &NodeSet,
    points: &[Point],
    obstacles: &[Segment],
) -> Result<Vec<Edge>> {
    let mut seen: FxHashSet<NodeId> = FxHashSet::default();
    let mut resolved: Vec<(NodeId, Point)> = Vec::with_capacity(points.len());
    for p in points {
        let id = nodes.require_point(p)?;
        if seen.insert(id) {
            resolved.push((id, *p));
        }
    }
    Ok(VisibilityChecker::new(obstacles).visible_pairs(&resolved))
}

/// Candidate edges over the whole node universe, in insertion order.
///
/// Same result as [`candidate_edges`] given every point of `nodes`, for callers that already
/// hold a `NodeSet` and so cannot hit a lookup failure.
pub fn visibility_edges(nodes: &NodeSet, obstacles: &[Segment]) -> Vec<Edge> {
    let all: Vec<(NodeId, Point)> = nodes.iter().collect();
    VisibilityChecker::new(obstacles).visible_pairs(&all)
}
