use narwhal::graph::{Edge, NodeId, NodeSet};
use narwhal::{LayoutOptions, layout_forest, layout_width};

fn n(ix: usize) -> NodeId {
    NodeId::new(ix)
}

fn star(leaves: usize) -> (NodeSet, Vec<Edge>) {
    let nodes = NodeSet::from_points((0..=leaves).map(|i| (i as f64, 0.0)));
    let edges = (1..=leaves)
        .map(|i| Edge::between(&nodes, n(0), n(i)).unwrap())
        .collect();
    (nodes, edges)
}

fn tight() -> LayoutOptions {
    LayoutOptions {
        leaf_width: 10.0,
        available_width: 0.0,
        min_gap: 20.0,
        ..Default::default()
    }
}

#[test]
fn overlapping_siblings_are_pushed_right() {
    let (nodes, edges) = star(3);
    let out = layout_forest(&nodes, &edges, Some(n(0)), 0.0, &tight()).unwrap();
    let x = |i| out.positions[&n(i)].x;

    // Leaves start 10 apart in the slot [700, 730]; the root keeps its pre-compaction x.
    assert_eq!(x(0), 715.0);
    assert_eq!(x(1), 705.0);
    assert_eq!(x(2), 725.0);
    assert_eq!(x(3), 745.0);
    assert_eq!(out.positions[&n(0)].y, 20.0);
    assert_eq!(out.positions[&n(1)].y, 70.0);
}

#[test]
fn tree_after_a_compacted_one_keeps_its_distance() {
    // Star 0 -> {1, 2, 3} plus the lone node 4 as a second tree.
    let nodes = NodeSet::from_points((0..5).map(|i| (i as f64, 0.0)));
    let edges: Vec<Edge> = (1..=3)
        .map(|i| Edge::between(&nodes, n(0), n(i)).unwrap())
        .collect();
    let out = layout_forest(&nodes, &edges, Some(n(0)), 0.0, &tight()).unwrap();
    let x = |i| out.positions[&n(i)].x;

    assert_eq!(out.roots, vec![n(0), n(4)]);
    // Its slot centre would be 735, but the first tree's leaves now reach 745.
    assert_eq!(x(3), 745.0);
    assert_eq!(x(4), 765.0);
}

#[test]
fn whole_subtrees_move_together() {
    // 0 -> {1, 2}, 1 -> {3, 4}, 2 -> {5, 6}
    let nodes = NodeSet::from_points((0..7).map(|i| (i as f64, i as f64)));
    let pairs = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)];
    let edges: Vec<Edge> = pairs
        .iter()
        .map(|&(a, b)| Edge::between(&nodes, n(a), n(b)).unwrap())
        .collect();
    let out = layout_forest(&nodes, &edges, Some(n(0)), 0.0, &tight()).unwrap();
    let x = |i| out.positions[&n(i)].x;

    // Cousins on the bottom row end up exactly one gap apart.
    assert_eq!(x(4) - x(3), 20.0);
    assert_eq!(x(6) - x(5), 20.0);
    assert!(x(5) - x(4) >= 20.0);
    assert!(x(2) - x(1) >= 20.0);
    assert!(layout_width(&out.positions) > 0.0);
}

#[test]
fn default_spacing_needs_no_shift() {
    let (nodes, edges) = star(3);
    let out = layout_forest(&nodes, &edges, Some(n(0)), 0.0, &LayoutOptions::default()).unwrap();
    let x = |i| out.positions[&n(i)].x;
    assert_eq!(x(2) - x(1), 50.0);
    assert_eq!(x(3) - x(2), 50.0);
    assert_eq!(x(0), x(2));
}

#[test]
fn options_deserialize_with_defaults() {
    let opts: LayoutOptions = serde_json::from_str(r#"{ "min_gap": 8.0 }"#).unwrap();
    assert_eq!(opts.min_gap, 8.0);
    assert_eq!(opts.leaf_width, 50.0);
    assert_eq!(opts.normalize_margin, 5.0);
}
