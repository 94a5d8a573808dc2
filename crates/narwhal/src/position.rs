//! Subtree widths and initial node placement.

use crate::model::Positions;
use crate::options::LayoutOptions;
use crate::tree::RootedForest;
use narwhal_graph::{NodeId, Point};

/// Fills `widths` for the subtree of `root`: a leaf takes `leaf_width`, an internal node the sum
/// of its children's widths.
pub fn subtree_widths(forest: &RootedForest, root: NodeId, leaf_width: f64, widths: &mut [f64]) {
    for u in forest.post_order(root) {
        let children = forest.children(u);
        widths[u.index()] = if children.is_empty() {
            leaf_width
        } else {
            children.iter().map(|c| widths[c.index()]).sum()
        };
    }
}

/// Horizontal stretch applied to a tree of total width `tree_width`.
///
/// Only trees narrower than the budget are stretched; anything at least as wide keeps factor 1.
pub fn spacing_factor(tree_width: f64, available_width: f64) -> f64 {
    if tree_width > 0.0 && tree_width < available_width {
        available_width / tree_width
    } else {
        1.0
    }
}

/// Top y of a tree with `levels` rows, centered in the panel when it fits.
pub fn start_y(levels: usize, panel_height: f64, opts: &LayoutOptions) -> f64 {
    let tree_height = levels as f64 * opts.row_height;
    let available_height = panel_height - opts.start_y - opts.bottom_margin;
    if tree_height < available_height {
        opts.start_y + (available_height - tree_height) / 2.0
    } else {
        opts.start_y
    }
}

/// Places the subtree of `root` with the root slot centered at `origin`.
///
/// Children split their parent's slot left to right, each centered in a span of its own width
/// times `factor`, one row further down. Once the children are final, an internal node moves to
/// the mean x of its children.
pub(crate) fn assign_positions(
    forest: &RootedForest,
    root: NodeId,
    origin: Point,
    widths: &[f64],
    factor: f64,
    row_height: f64,
    positions: &mut Positions,
) {
    positions.set(root, origin);
    let order = forest.pre_order(root);

    for &u in &order {
        let children = forest.children(u);
        let Some(slot) = positions.get(u) else {
            continue;
        };
        let total: f64 = children.iter().map(|c| widths[c.index()]).sum();
        let mut cursor = slot.x - total * factor / 2.0;
        for &c in children {
            let w = widths[c.index()] * factor;
            positions.set(c, Point::new(cursor + w / 2.0, slot.y + row_height));
            cursor += w;
        }
    }

    for &u in order.iter().rev() {
        let children = forest.children(u);
        if children.is_empty() {
            continue;
        }
        let sum: f64 = children
            .iter()
            .filter_map(|&c| positions.get(c))
            .map(|p| p.x)
            .sum();
        if let Some(p) = positions.get(u) {
            positions.set(u, Point::new(sum / children.len() as f64, p.y));
        }
    }
}
