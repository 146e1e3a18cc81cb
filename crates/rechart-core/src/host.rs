// File: crates/rechart-core/src/host.rs
// Summary: Host seam providing container measurement, text metrics and device facts.

use crate::text::{TextExtent, TextMetrics};
use crate::tooltip::Tooltip;

/// The page environment a chart is mounted in.
///
/// The chart owns the SVG subtree it draws into; the host only answers layout
/// questions about the element and its parent container.
pub trait Host {
    /// Live client width of the element's parent container. May be NaN.
    fn container_width(&self) -> f64;

    /// Rendered (client) width and height of the chart element.
    fn client_size(&self) -> (f64, f64);

    /// Width/height given as element attributes, if any.
    fn attribute_size(&self) -> Option<(f64, f64)> {
        None
    }

    /// Left edge of the element's bounding rectangle in page coordinates.
    fn bounding_left(&self) -> f64 {
        0.0
    }

    fn measure_text(&self, class: &str, text: &str) -> TextExtent;

    /// Rendered width of the tooltip block.
    fn measure_tooltip(&self, tooltip: &Tooltip) -> f64 {
        let widest = tooltip
            .rows
            .iter()
            .map(|r| self.measure_text("data-label", &format!("{} {}", r.label, r.value)).width)
            .chain(std::iter::once(self.measure_text("tooltip-title", &tooltip.title).width))
            .fold(0.0, f64::max);
        // swatch + paddings
        widest + 28.0
    }

    /// Whether the device reports touch support.
    fn is_touch(&self) -> bool {
        false
    }
}

/// Headless host with fixed, settable measurements.
#[derive(Clone, Debug)]
pub struct StaticHost {
    pub container_width: f64,
    pub client_width: f64,
    pub client_height: f64,
    pub attribute_size: Option<(f64, f64)>,
    pub left: f64,
    pub touch: bool,
    pub metrics: TextMetrics,
}

impl StaticHost {
    /// Host whose element fills a container of `width` x `height` pixels.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            container_width: width,
            client_width: width,
            client_height: height,
            attribute_size: None,
            left: 0.0,
            touch: false,
            metrics: TextMetrics::default(),
        }
    }

    pub fn touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    pub fn with_left(mut self, left: f64) -> Self {
        self.left = left;
        self
    }

    /// Simulate the parent container being resized.
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width;
        self.client_width = width;
    }
}

impl Host for StaticHost {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn client_size(&self) -> (f64, f64) {
        (self.client_width, self.client_height)
    }

    fn attribute_size(&self) -> Option<(f64, f64)> {
        self.attribute_size
    }

    fn bounding_left(&self) -> f64 {
        self.left
    }

    fn measure_text(&self, _class: &str, text: &str) -> TextExtent {
        self.metrics.measure(text)
    }

    fn is_touch(&self) -> bool {
        self.touch
    }
}
