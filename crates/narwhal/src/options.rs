use serde::{Deserialize, Serialize};

/// Layout constants, in layout units.
///
/// The horizontal budget is fixed here rather than taken from the caller; only the panel height
/// is supplied per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Width reserved for a leaf. An internal node reserves the sum of its children.
    pub leaf_width: f64,
    /// Vertical distance between a parent row and its children.
    pub row_height: f64,
    /// Budget against which a tree's spacing factor is computed.
    ///
    /// A tree narrower than this is spread out to fill it; a wider one keeps factor 1. With the
    /// default of 50 every tree with two or more leaves is already wider, so the factor only
    /// changes anything for custom budgets.
    pub available_width: f64,
    /// Horizontal cursor for the first tree.
    pub start_x: f64,
    /// Added to the cursor when centering each tree.
    pub tree_offset_x: f64,
    pub start_y: f64,
    /// Space kept free below the tree block when centering vertically.
    pub bottom_margin: f64,
    /// Minimum horizontal distance between nodes of different subtrees on the same row.
    pub min_gap: f64,
    /// Left margin applied when the layout is shifted back to non-negative x.
    pub normalize_margin: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            leaf_width: 50.0,
            row_height: 50.0,
            available_width: 50.0,
            start_x: 250.0,
            tree_offset_x: 450.0,
            start_y: 20.0,
            bottom_margin: 20.0,
            min_gap: 20.0,
            normalize_margin: 5.0,
        }
    }
}
