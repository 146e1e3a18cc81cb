// File: crates/rechart-core/src/grid.rs
// Summary: Thinning moduli for x-axis labels and vertical grid lines.

use crate::geometry::to_int;

/// Stride so that `visible` items of `item_width` pixels fit in `available` pixels.
///
/// Always at least 1; 1 whenever every item fits.
pub fn thinning_modulus(visible: usize, available: f64, item_width: f64) -> usize {
    let per_item = available / item_width;
    let m = to_int(visible as f64 / per_item) + 1;
    if m > 1 { m as usize } else { 1 }
}

/// Label stride from the average measured label width.
pub fn label_modulus(visible: usize, chart_width: f64, widths: impl IntoIterator<Item = f64>) -> usize {
    let (sum, n) = widths.into_iter().fold((0.0, 0usize), |(s, n), w| (s + w, n + 1));
    if n == 0 {
        return 1;
    }
    thinning_modulus(visible, chart_width, sum / n as f64)
}
