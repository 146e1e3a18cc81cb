// File: crates/rechart-core/src/layout.rs
// Summary: Layout engine: per-pass geometry (sizes, visible window, thinning, scales).

use tracing::debug;

use crate::axis::{select_variant, AxisLabel};
use crate::geometry::{clamp, to_int, Point};
use crate::grid::{label_modulus, thinning_modulus};
use crate::host::Host;
use crate::options::ChartOptions;
use crate::scale::{order_of_magnitude, StepScale};
use crate::types::Insets;

/// Geometry for one render pass. Recomputed wholesale on every layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutState {
    pub container_width: f64,
    pub element_width: f64,
    pub element_height: f64,
    pub chart_width: f64,
    pub chart_height: f64,
    pub insets: Insets,
    /// Total axis positions.
    pub axis_count: usize,
    /// Positions eligible for drawing: `visible_start..axis_count`.
    pub visible_count: usize,
    pub visible_start: usize,
    pub label_mod: usize,
    pub grid_mod: usize,
    /// Pixels per axis position.
    pub x_padding: f64,
    /// Vertical ceiling the plot height maps to.
    pub ceiling: f64,
    pub y_visible_count: usize,
    pub y_interval: f64,
    pub y_padding: f64,
    /// Pixels per data unit.
    pub y_scale: f64,
    pub hovered_index: Option<usize>,
}

impl LayoutState {
    /// Compute geometry for the current host size.
    pub fn compute<H: Host + ?Sized>(
        host: &H,
        opts: &ChartOptions,
        labels: &[AxisLabel],
        largest: f64,
    ) -> Self {
        let container_width = host.container_width();
        let (element_width, element_height) = element_size(host, opts, container_width);
        let insets = opts.insets();
        let chart_width = element_width - insets.hsum();
        let chart_height = element_height - insets.vsum();

        let axis_count = labels.len();
        let mut visible_count = axis_count;
        let mut visible_start = 0;
        if opts.reduce_data {
            // A zero or non-finite spacing imposes no limit.
            if let Some(fit) = fit_count(chart_width, opts.x_axis_min_distance) {
                if fit < axis_count {
                    visible_count = fit;
                    visible_start = axis_count - visible_count;
                }
            }
        }

        let label_mod = if opts.show_x_axis_label && opts.reduce_x_axis_label {
            let widths = labels.iter().map(|l| {
                l.width(select_variant(l, chart_width, opts), host, opts.text_spacing)
            });
            label_modulus(visible_count, chart_width, widths)
        } else {
            1
        };
        let grid_mod = thinning_modulus(visible_count, chart_width, opts.x_axis_grid_min_distance);

        let cells = visible_count as f64 - if opts.show_bar { 0.0 } else { 1.0 };
        let x_padding = if cells > 0.0 { chart_width / cells } else { chart_width };

        let ceiling = order_of_magnitude(largest);
        // Without a usable spacing only the baseline and ceiling are marked.
        let y_visible_count = fit_count(chart_height, opts.y_axis_min_distance).unwrap_or(1);
        let (y_interval, y_padding) = if y_visible_count > 0 {
            (ceiling / y_visible_count as f64, chart_height / y_visible_count as f64)
        } else {
            (ceiling, chart_height)
        };
        let y_scale = chart_height / ceiling;

        Self {
            container_width,
            element_width,
            element_height,
            chart_width,
            chart_height,
            insets,
            axis_count,
            visible_count,
            visible_start,
            label_mod,
            grid_mod,
            x_padding,
            ceiling,
            y_visible_count,
            y_interval,
            y_padding,
            y_scale,
            hovered_index: None,
        }
    }

    /// False for zero-area or non-finite geometry; draws then emit nothing.
    pub fn is_drawable(&self) -> bool {
        self.chart_width > 0.0
            && self.chart_height > 0.0
            && self.visible_count > 0
            && self.x_padding.is_finite()
            && self.y_scale.is_finite()
    }

    pub fn step_scale(&self) -> StepScale {
        StepScale::new(self.insets.left, self.visible_start, self.x_padding)
    }

    /// Visible axis indices, oldest first.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        self.visible_start..self.axis_count
    }

    pub fn x_at(&self, index: usize) -> f64 {
        self.step_scale().to_px(index)
    }

    pub fn y_at(&self, value: f64) -> f64 {
        self.insets.top + self.chart_height - value * self.y_scale
    }

    pub fn point(&self, index: usize, value: f64) -> Point {
        Point::new(self.x_at(index), self.y_at(value))
    }

    /// Baseline y of the plot area.
    pub fn base_y(&self) -> f64 {
        self.insets.top + self.chart_height
    }

    /// Axis index under element-relative x, clamped to the visible window.
    pub fn index_at(&self, x: f64, cells: bool) -> usize {
        self.step_scale()
            .index_at(x, self.chart_width, self.insets.right, self.axis_count, cells)
    }
}

/// How many `spacing`-wide slots fit in `extent`; `None` for a spacing that
/// is not positive or a quotient that is not finite.
fn fit_count(extent: f64, spacing: f64) -> Option<usize> {
    let q = extent / spacing;
    (spacing > 0.0 && q.is_finite()).then(|| to_int(q).max(0) as usize)
}

fn element_size<H: Host + ?Sized>(host: &H, opts: &ChartOptions, container_width: f64) -> (f64, f64) {
    if !opts.responsive {
        return host.client_size();
    }
    let height = match (opts.keep_ratio, opts.ratio) {
        (true, Some(ratio)) => {
            let h = to_int(container_width * ratio) as f64;
            clamp(h, opts.min_height, opts.max_height.max(opts.min_height))
        }
        _ => host.client_size().1,
    };
    (container_width, height)
}

/// Gate in front of [`LayoutState::compute`] that skips redundant passes.
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
    previous_container_width: Option<f64>,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when responsive and the container width is unchanged, NaN or below
    /// one pixel, unless `force` is set.
    pub fn prepare<H: Host + ?Sized>(
        &mut self,
        host: &H,
        opts: &ChartOptions,
        labels: &[AxisLabel],
        largest: f64,
        force: bool,
    ) -> Option<LayoutState> {
        let width = host.container_width();
        if !force && opts.responsive {
            if width.is_nan() || width < 1.0 {
                debug!(width, "layout skipped: container has no width");
                return None;
            }
            if self.previous_container_width == Some(width) {
                debug!(width, "layout skipped: container width unchanged");
                return None;
            }
        }
        self.previous_container_width = Some(width);
        Some(LayoutState::compute(host, opts, labels, largest))
    }
}
