#![forbid(unsafe_code)]

//! Headless tree layout for minimum spanning forests over visibility graphs.
//!
//! [`layout`] runs the whole pipeline: points and obstacle segments go through
//! `narwhal_graph` (visibility graph, then Kruskal), the resulting forest is rooted, placed row
//! by row, compacted and finally shifted to non-negative x. Every call recomputes from scratch.

pub mod compaction;
pub mod error;
pub mod model;
pub mod normalize;
pub mod options;
pub mod position;
pub mod tree;

pub use narwhal_graph as graph;

pub use compaction::Contour;
pub use error::{Error, Result};
pub use model::{ForestLayout, Layout, LayoutResult};
pub use normalize::{layout_width, normalize_to_non_negative};
pub use options::LayoutOptions;
pub use tree::RootedForest;

use model::Positions;
use narwhal_graph::{Edge, NodeId, NodeSet, Point, Segment};

/// Full pipeline entry point.
///
/// `root` is honored when it is one of `points`; otherwise it is ignored. `panel_height` only
/// drives vertical centering.
pub fn layout(
    points: &[Point],
    obstacles: &[Segment],
    root: Option<Point>,
    panel_height: f64,
    opts: &LayoutOptions,
) -> Result<LayoutResult> {
    let nodes = NodeSet::from_points(points.iter().copied());
    let candidates = narwhal_graph::candidate_edges(&nodes, points, obstacles)?;
    let forest = narwhal_graph::minimum_spanning_forest(&nodes, &candidates)?;

    let root = root.and_then(|p| nodes.id_of(&p));
    let ForestLayout { roots, positions } =
        layout_forest(&nodes, &forest.edges, root, panel_height, opts)?;

    Ok(LayoutResult {
        nodes: nodes.iter().map(|(_, p)| p).collect(),
        forest,
        roots,
        positions,
    })
}

/// Lays out an already selected forest over `nodes`.
///
/// Fails when an edge endpoint is not in `nodes` or when `edges` contain a cycle; no partial
/// layout is produced in either case.
pub fn layout_forest(
    nodes: &NodeSet,
    edges: &[Edge],
    root: Option<NodeId>,
    panel_height: f64,
    opts: &LayoutOptions,
) -> Result<ForestLayout> {
    let forest = RootedForest::build(nodes, edges, root)?;
    let mut widths = vec![opts.leaf_width; nodes.len()];
    let mut positions = Positions::new(nodes.len());

    let mut current_x = opts.start_x;
    let mut placed_right: Option<f64> = None;
    for &tree_root in forest.roots() {
        position::subtree_widths(&forest, tree_root, opts.leaf_width, &mut widths);
        let tree_width = widths[tree_root.index()];
        let factor = position::spacing_factor(tree_width, opts.available_width);
        let levels = forest.levels(tree_root);

        // The tree owns the slot [start, start + tree_width * factor].
        let slot_start = current_x + opts.tree_offset_x;
        let origin = Point::new(
            slot_start + tree_width * factor / 2.0,
            position::start_y(levels.len(), panel_height, opts),
        );
        tracing::debug!(
            root = %tree_root,
            tree_width,
            factor,
            levels = levels.len(),
            x = origin.x,
            y = origin.y,
            "placing tree"
        );

        position::assign_positions(
            &forest,
            tree_root,
            origin,
            &widths,
            factor,
            opts.row_height,
            &mut positions,
        );
        compaction::compact_tree(&forest, tree_root, &levels, &mut positions, opts.min_gap);

        // Compaction may push nodes past the slot; keep min_gap to everything placed before.
        let members = forest.pre_order(tree_root);
        let (left, right) = x_extent(&members, &positions);
        let dx = placed_right.map_or(0.0, |prev| (prev + opts.min_gap - left).max(0.0));
        if dx > 0.0 {
            compaction::shift_subtree(&forest, tree_root, dx, &mut positions);
            tracing::debug!(root = %tree_root, dx, "tree moved clear of its predecessor");
        }
        placed_right = Some(placed_right.map_or(right + dx, |prev| prev.max(right + dx)));

        // Advance by the width reserved before compaction.
        current_x += tree_width * factor;
    }

    let mut positions = positions.into_layout();
    normalize_to_non_negative(&mut positions, opts.normalize_margin);

    Ok(ForestLayout {
        roots: forest.roots().to_vec(),
        positions,
    })
}

fn x_extent(members: &[NodeId], positions: &Positions) -> (f64, f64) {
    members
        .iter()
        .filter_map(|&u| positions.get(u))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.x), hi.max(p.x))
        })
}
