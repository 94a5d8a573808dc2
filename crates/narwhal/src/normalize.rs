use crate::model::Layout;

/// Shifts every x so the leftmost node sits at `margin` when any x is negative.
///
/// Returns the applied offset, or `None` when the layout was already non-negative.
pub fn normalize_to_non_negative(layout: &mut Layout, margin: f64) -> Option<f64> {
    let min_x = layout.values().map(|p| p.x).fold(f64::INFINITY, f64::min);
    if min_x >= 0.0 {
        return None;
    }
    let dx = -min_x + margin;
    for p in layout.values_mut() {
        *p = p.translated(dx, 0.0);
    }
    tracing::debug!(dx, "layout shifted to non-negative x");
    Some(dx)
}

/// Horizontal extent of `layout` (max x - min x); 0 for an empty layout.
pub fn layout_width(layout: &Layout) -> f64 {
    if layout.is_empty() {
        return 0.0;
    }
    let (lo, hi) = layout
        .values()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.x), hi.max(p.x))
        });
    hi - lo
}
