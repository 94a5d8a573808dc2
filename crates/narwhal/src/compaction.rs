//! Contour-based horizontal compaction.
//!
//! Rows are swept from the deepest up. On each row the nodes are taken left to right by x, and
//! each node's subtree is pushed right just far enough that, on every depth it shares with the
//! subtrees already swept, it keeps `min_gap` to their rightmost node. A shift moves a whole
//! subtree rigidly, so separations established on deeper rows survive the shallower ones.
//!
//! Ancestors are not re-centered after their descendants move.

use crate::model::Positions;
use crate::tree::RootedForest;
use narwhal_graph::NodeId;
use std::collections::BTreeMap;

/// Per-depth horizontal extent `(min x, max x)` of a set of nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    extents: BTreeMap<usize, (f64, f64)>,
}

impl Contour {
    pub fn include(&mut self, depth: usize, x: f64) {
        self.extents
            .entry(depth)
            .and_modify(|(lo, hi)| {
                *lo = lo.min(x);
                *hi = hi.max(x);
            })
            .or_insert((x, x));
    }

    pub fn left(&self, depth: usize) -> Option<f64> {
        self.extents.get(&depth).map(|e| e.0)
    }

    pub fn right(&self, depth: usize) -> Option<f64> {
        self.extents.get(&depth).map(|e| e.1)
    }

    pub fn depths(&self) -> impl Iterator<Item = usize> + '_ {
        self.extents.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    pub fn shifted(&self, dx: f64) -> Self {
        Self {
            extents: self
                .extents
                .iter()
                .map(|(&d, &(lo, hi))| (d, (lo + dx, hi + dx)))
                .collect(),
        }
    }

    pub fn merge(&mut self, other: &Contour) {
        for (&d, &(lo, hi)) in &other.extents {
            self.include(d, lo);
            self.include(d, hi);
        }
    }

    /// Rightward shift `incoming` needs to keep `min_gap` from `self` on every shared depth.
    /// Zero when it already clears, or when the two share no depth.
    pub fn shift_needed(&self, incoming: &Contour, min_gap: f64) -> f64 {
        let mut need = 0.0_f64;
        for (d, &(_, right)) in &self.extents {
            if let Some(left) = incoming.left(*d) {
                need = need.max(right + min_gap - left);
            }
        }
        need
    }
}

pub(crate) fn shift_subtree(
    forest: &RootedForest,
    root: NodeId,
    dx: f64,
    positions: &mut Positions,
) {
    for u in forest.pre_order(root) {
        positions.shift_x(u, dx);
    }
}

/// Compacts the tree of `root` in place. `levels` is `forest.levels(root)`.
///
/// A node's contour is assembled from its own x and its children's contours, which are final
/// once the row below has been swept, so no subtree is walked to build one.
pub(crate) fn compact_tree(
    forest: &RootedForest,
    root: NodeId,
    levels: &[Vec<NodeId>],
    positions: &mut Positions,
    min_gap: f64,
) {
    let mut contours: Vec<Option<Contour>> = vec![None; forest.node_count()];
    let mut shifted = 0usize;

    for (depth, level) in levels.iter().enumerate().rev() {
        let mut row: Vec<(NodeId, f64)> = level
            .iter()
            .filter_map(|&u| positions.get(u).map(|p| (u, p.x)))
            .collect();
        row.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut acc: Option<Contour> = None;
        for (u, x) in row {
            let mut contour = Contour::default();
            contour.include(depth, x);
            for c in forest.children(u) {
                if let Some(child) = contours[c.index()].take() {
                    contour.merge(&child);
                }
            }
            if let Some(prev) = &acc {
                let dx = prev.shift_needed(&contour, min_gap);
                if dx > 0.0 {
                    shift_subtree(forest, u, dx, positions);
                    contour = contour.shifted(dx);
                    shifted += 1;
                    tracing::trace!(node = %u, dx, "subtree shifted");
                }
            }
            acc.get_or_insert_with(Contour::default).merge(&contour);
            contours[u.index()] = Some(contour);
        }
    }

    tracing::debug!(root = %root, rows = levels.len(), shifted, "tree compacted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use narwhal_graph::{Edge, NodeSet, Point};

    fn contour(points: &[(usize, f64)]) -> Contour {
        let mut c = Contour::default();
        for &(d, x) in points {
            c.include(d, x);
        }
        c
    }

    #[test]
    fn include_tracks_extents() {
        let c = contour(&[(1, 5.0), (1, -2.0), (2, 3.0)]);
        assert_eq!(c.left(1), Some(-2.0));
        assert_eq!(c.right(1), Some(5.0));
        assert_eq!(c.left(2), Some(3.0));
        assert_eq!(c.right(3), None);
        assert_eq!(c.depths().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn shift_needed_uses_shared_depths_only() {
        let acc = contour(&[(1, 0.0), (2, 100.0)]);
        let incoming = contour(&[(1, 10.0), (3, -500.0)]);
        assert_eq!(acc.shift_needed(&incoming, 20.0), 10.0);

        let far = contour(&[(1, 50.0), (2, 130.0)]);
        assert_eq!(acc.shift_needed(&far, 20.0), 0.0);

        let disjoint = contour(&[(5, -1000.0)]);
        assert_eq!(acc.shift_needed(&disjoint, 20.0), 0.0);
    }

    #[test]
    fn merge_and_shift() {
        let mut acc = contour(&[(1, 0.0)]);
        acc.merge(&contour(&[(1, 10.0), (2, 4.0)]).shifted(5.0));
        assert_eq!(acc.left(1), Some(0.0));
        assert_eq!(acc.right(1), Some(15.0));
        assert_eq!(acc.right(2), Some(9.0));
        assert!(!acc.is_empty());
    }

    #[test]
    fn shifts_carry_into_shallower_rows() {
        let n = NodeId::new;
        let nodes = NodeSet::from_points((0..6).map(|i| (i as f64, 0.0)));
        let edges: Vec<Edge> = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5)]
            .iter()
            .map(|&(a, b)| Edge::new(n(a), n(b), 1.0))
            .collect();
        let forest = RootedForest::build(&nodes, &edges, Some(n(0))).unwrap();

        let mut positions = Positions::new(6);
        for (ix, x, y) in [(0, 0.0, 0.0), (1, -5.0, 1.0), (2, 5.0, 1.0)] {
            positions.set(n(ix), Point::new(x, y));
        }
        for (ix, x) in [(3, -10.0), (4, 0.0), (5, 0.0)] {
            positions.set(n(ix), Point::new(x, 2.0));
        }

        let levels = forest.levels(n(0));
        compact_tree(&forest, n(0), &levels, &mut positions, 20.0);

        let x = |ix| positions.get(n(ix)).unwrap().x;
        // Row 2 spreads to -10/10/30; node 2 then needs 10 more on row 1 and takes node 5 along.
        assert_eq!([x(3), x(4), x(5)], [-10.0, 10.0, 40.0]);
        assert_eq!([x(0), x(1), x(2)], [0.0, -5.0, 15.0]);
    }
}
