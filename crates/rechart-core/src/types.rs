// File: crates/rechart-core/src/types.rs
// Summary: Shared types and constants (content offsets, timing constants).

use std::time::Duration;

/// Delay before a touch release clears hover state; swallows flicker on quick taps.
pub const TOUCH_RELEASE_DELAY: Duration = Duration::from_millis(10);

/// Bars take this share of their per-series slot.
pub const BAR_FILL_RATIO: f64 = 0.8;

/// Content offsets around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(10.0, 10.0, 10.0, 10.0)
    }
}
