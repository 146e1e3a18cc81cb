// File: crates/rechart-core/src/scale.rs
// Summary: Horizontal step scale (index <-> pixel) and vertical value scale helpers.

use crate::geometry::to_int;

/// Round `largest` up to one significant digit at its own magnitude.
///
/// `8234 -> 9000`, `300 -> 300`, `0.37 -> 0.4`. Zero, negative and
/// non-finite input map to 1 so the vertical scale never divides by zero.
pub fn order_of_magnitude(largest: f64) -> f64 {
    if !largest.is_finite() || largest <= 0.0 {
        return 1.0;
    }
    let exp = decimal_exponent(largest);
    // divide by an exact power of ten; 0.1-style units are not exact
    let rounded = if exp >= 0 {
        let unit = 10f64.powi(exp);
        snapped_ceil(largest / unit) * unit
    } else {
        let factor = 10f64.powi(-exp);
        snapped_ceil(largest * factor) / factor
    };
    if rounded > 0.0 && rounded.is_finite() { rounded } else { 1.0 }
}

/// `floor(log10(v))` for positive finite `v`, corrected at exact powers of ten.
fn decimal_exponent(v: f64) -> i32 {
    let mut exp = v.log10().floor() as i32;
    if 10f64.powi(exp + 1) <= v {
        exp += 1;
    } else if 10f64.powi(exp) > v {
        exp -= 1;
    }
    exp
}

/// Ceiling that treats values within float noise of an integer as that integer.
fn snapped_ceil(v: f64) -> f64 {
    let nearest = v.round();
    if (v - nearest).abs() < 1e-9 { nearest } else { v.ceil() }
}

/// Format a vertical tick value, abbreviating thousands and millions when
/// `numerals` is set. Values below 1 keep one truncated decimal.
pub fn format_tick(value: f64, numerals: bool) -> String {
    let (mut v, mut suffix) = (value, "");
    if numerals {
        if v >= 1_000_000.0 {
            v /= 1_000_000.0;
            suffix = "m";
        } else if v >= 1_000.0 {
            v /= 1_000.0;
            suffix = "k";
        }
    }
    if v < 1.0 {
        format!("{:.1}{suffix}", (v * 10.0).trunc() / 10.0)
    } else {
        format!("{}{suffix}", to_int(v))
    }
}

/// Horizontal scale over the visible window of axis positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepScale {
    /// Pixel x of the first visible position.
    pub left_px: f64,
    /// Index of the first visible position.
    pub start: usize,
    /// Pixels per axis position.
    pub step: f64,
}

impl StepScale {
    pub fn new(left_px: f64, start: usize, step: f64) -> Self {
        Self { left_px, start, step }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        self.left_px + self.step * (index as f64 - self.start as f64)
    }

    /// Map a pointer x (relative to the element) to an axis index in
    /// `[start, count - 1]`.
    ///
    /// Line charts hit-test half a step either side of each point; bar charts
    /// hit-test whole cells. `plot_width` and `right_px` bound the active band.
    pub fn index_at(&self, x: f64, plot_width: f64, right_px: f64, count: usize, cells: bool) -> usize {
        let last = count.saturating_sub(1).max(self.start);
        let half = if cells { 0.0 } else { self.step / 2.0 };
        let start = to_int(self.left_px - half) as f64;
        let end = to_int(plot_width + half + right_px) as f64;
        if x.is_nan() || x < start {
            return self.start;
        }
        if x > end {
            return last;
        }
        let offset = if self.step > 0.0 && self.step.is_finite() { to_int((x - start) / self.step) } else { 0 };
        (self.start + offset.max(0) as usize).min(last)
    }
}
