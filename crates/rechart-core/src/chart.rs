// File: crates/rechart-core/src/chart.rs
// Summary: Chart facade: construction, draw passes, pointer/resize event handling and SVG export.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, trace};

use crate::axis::AxisLabel;
use crate::error::{ChartError, ChartResult};
use crate::host::Host;
use crate::interaction::{InteractionTracker, PointerPhase, TimerEvent};
use crate::layout::{LayoutEngine, LayoutState};
use crate::options::{ChartOptions, OptionOverrides, ResolveContext};
use crate::render::{place_guideline, remove_guideline, set_circle_radius, RenderedElements, Renderer};
use crate::scale::{format_tick, order_of_magnitude};
use crate::series::{largest, Series, SeriesValue};
use crate::svg::SvgDocument;
use crate::theme::Theme;
use crate::tooltip::{tooltip_left, Tooltip, TooltipNode};

/// What a caller hands over to build a chart. Every field is required.
#[derive(Clone, Debug)]
pub struct ChartRequest<H> {
    pub element: Option<H>,
    pub dataset: Option<Vec<Series>>,
    pub x_axis: Option<Vec<AxisLabel>>,
}

impl<H> ChartRequest<H> {
    pub fn new(element: H, dataset: Vec<Series>, x_axis: Vec<AxisLabel>) -> Self {
        Self { element: Some(element), dataset: Some(dataset), x_axis: Some(x_axis) }
    }
}

/// One chart bound to its host element.
pub struct Chart<H: Host> {
    host: H,
    opts: ChartOptions,
    dataset: Vec<Series>,
    labels: Vec<AxisLabel>,
    largest: f64,
    engine: LayoutEngine,
    layout: Option<LayoutState>,
    doc: SvgDocument,
    elements: RenderedElements,
    tracker: InteractionTracker,
    /// Page x of the press that started the current session; replayed when the
    /// hold timer turns it into hovering.
    press_x: Option<f64>,
    next_tooltip_id: u64,
}

impl<H: Host> Chart<H> {
    /// Resolve options against the host, derive series classes and label
    /// tooltips, then draw.
    pub fn new(request: ChartRequest<H>, overrides: &OptionOverrides) -> ChartResult<Self> {
        let host = request.element.ok_or(ChartError::MissingInput("element"))?;
        let mut dataset = request.dataset.ok_or(ChartError::MissingInput("dataset"))?;
        let mut labels = request.x_axis.ok_or(ChartError::MissingInput("xAxis"))?;

        dataset.iter_mut().for_each(Series::derive_classes);
        labels.iter_mut().for_each(AxisLabel::finalize);

        let ctx = ResolveContext {
            axis_count: labels.len(),
            client_size: host.client_size(),
            attribute_size: host.attribute_size(),
        };
        let mut opts = ChartOptions::resolve(overrides, &ctx);
        let largest = largest(&dataset);
        if opts.label_outside {
            widen_for_outside_labels(&host, &mut opts, &labels, largest);
        }

        debug!(series = dataset.len(), positions = labels.len(), largest, "chart created");
        let tracker = InteractionTracker::new(host.is_touch());
        let mut chart = Self {
            host,
            opts,
            dataset,
            labels,
            largest,
            engine: LayoutEngine::new(),
            layout: None,
            doc: SvgDocument::new(),
            elements: RenderedElements::default(),
            tracker,
            press_x: None,
            next_tooltip_id: 0,
        };
        chart.draw(false);
        Ok(chart)
    }

    /// Lay out and redraw. Returns false when the layout gate skipped the pass
    /// (responsive, container width unchanged or unusable) and `force` is unset.
    pub fn draw(&mut self, force: bool) -> bool {
        let Some(layout) = self.engine.prepare(&self.host, &self.opts, &self.labels, self.largest, force) else {
            return false;
        };
        self.tracker.invalidate_bounds();
        self.elements = Renderer {
            doc: &mut self.doc,
            host: &self.host,
            layout: &layout,
            opts: &self.opts,
            labels: &self.labels,
            dataset: &self.dataset,
        }
        .draw();
        self.layout = Some(layout);
        true
    }

    /// Pointer entered the container, or a touch started, at page x `page_x`.
    pub fn pointer_enter(&mut self, page_x: f64, now: Instant) {
        self.press_x = Some(page_x);
        if let Some(event) = self.tracker.enter(now, self.opts.touch_delay()) {
            self.on_timer(event);
        }
    }

    /// Pointer moved within the container. Touch moves only count once the hold
    /// has turned into hovering.
    pub fn pointer_move(&mut self, page_x: f64, now: Instant) {
        self.advance(now);
        if !self.tracker.accepts_move() {
            return;
        }
        self.hover_at(page_x);
    }

    /// Pointer left the container, or the touch ended.
    pub fn pointer_leave(&mut self, now: Instant) {
        self.press_x = None;
        if let Some(event) = self.tracker.leave(now) {
            self.on_timer(event);
        }
    }

    /// Fire timers due at `now`.
    pub fn advance(&mut self, now: Instant) {
        for event in self.tracker.advance(now) {
            self.on_timer(event);
        }
    }

    /// Earliest time [`Chart::advance`] has something to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tracker.next_deadline()
    }

    /// Invoke the click callback for the position under `page_x`. Returns whether
    /// it was called.
    pub fn click(&mut self, page_x: f64) -> bool {
        let Some(callback) = self.opts.click.clone() else { return false };
        let Some(index) = self.index_at(page_x) else { return false };
        let Some(label) = self.labels.get(index) else { return false };
        let values: Vec<SeriesValue> = self.dataset.iter().map(|s| s.snapshot(index)).collect();
        callback.call(label, &values, index);
        true
    }

    /// Window resize: redraw when responsive.
    pub fn resize(&mut self) -> bool {
        self.opts.responsive && self.draw(false)
    }

    /// Viewport reorientation: drop the tooltip, its position is stale.
    pub fn orientation_change(&mut self) {
        if self.elements.tooltip.take().is_some() {
            debug!("tooltip dropped on orientation change");
        }
    }

    /// Whether touch-move default handling should be prevented right now.
    pub fn locks_scroll(&self) -> bool {
        self.tracker.is_touch() && self.tracker.locks_scroll(self.opts.lock_scroll_on_touch_press)
    }

    pub fn phase(&self) -> PointerPhase {
        self.tracker.phase()
    }

    pub fn to_svg(&self) -> String {
        self.doc.to_svg_string(None)
    }

    /// SVG markup with an embedded stylesheet for the dataset's colors.
    pub fn to_svg_with_theme(&self, theme: &Theme) -> String {
        let css = theme.stylesheet(self.dataset.iter().filter_map(|s| s.color.as_deref()));
        self.doc.to_svg_string(Some(&css))
    }

    pub fn write_svg(&self, path: impl AsRef<Path>, theme: Option<&Theme>) -> ChartResult<()> {
        let svg = match theme {
            Some(t) => self.to_svg_with_theme(t),
            None => self.to_svg(),
        };
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, svg)?;
        Ok(())
    }

    pub fn tooltip_html(&self) -> Option<String> {
        self.elements.tooltip.as_ref().map(TooltipNode::to_html)
    }

    pub fn tooltip(&self) -> Option<&TooltipNode> {
        self.elements.tooltip.as_ref()
    }

    pub fn layout(&self) -> Option<&LayoutState> {
        self.layout.as_ref()
    }

    pub fn document(&self) -> &SvgDocument {
        &self.doc
    }

    pub fn elements(&self) -> &RenderedElements {
        &self.elements
    }

    pub fn options(&self) -> &ChartOptions {
        &self.opts
    }

    pub fn dataset(&self) -> &[Series] {
        &self.dataset
    }

    pub fn labels(&self) -> &[AxisLabel] {
        &self.labels
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, e.g. to simulate a container resize before [`Chart::resize`].
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn on_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Hover => {
                if let Some(x) = self.press_x {
                    self.hover_at(x);
                }
            }
            TimerEvent::Release => self.clear_hover(),
        }
    }

    fn index_at(&mut self, page_x: f64) -> Option<usize> {
        let layout = self.layout.as_ref().filter(|l| l.is_drawable())?;
        let x = self.tracker.element_x(page_x, &self.host);
        let index = layout.index_at(x, self.opts.show_bar);
        if index >= layout.axis_count || index < layout.visible_start {
            debug!(index, "pointer outside data range");
            return None;
        }
        Some(index)
    }

    fn hover_at(&mut self, page_x: f64) {
        let Some(index) = self.index_at(page_x) else { return };
        let Some(layout) = self.layout.as_mut() else { return };
        let previous = layout.hovered_index;
        if previous == Some(index) {
            return;
        }
        layout.hovered_index = Some(index);
        let layout = &*layout;

        if self.opts.show_x_axis_guideline {
            place_guideline(&mut self.doc, &mut self.elements, layout, &self.opts, index);
        }
        if self.opts.show_circle {
            if let Some(p) = previous {
                set_circle_radius(&mut self.doc, &self.elements, p, self.opts.circle_radius);
            }
            set_circle_radius(&mut self.doc, &self.elements, index, self.opts.circle_radius_hover);
        }
        if self.opts.show_tooltip {
            if let Some(label) = self.labels.get(index) {
                let content = Tooltip::build(label, &self.dataset, index);
                let width = self.host.measure_tooltip(&content);
                let left = tooltip_left(layout, &self.opts, index, width);
                match self.elements.tooltip.as_mut() {
                    Some(node) => {
                        node.content = content;
                        node.width = width;
                        node.left = left;
                    }
                    None => {
                        self.next_tooltip_id += 1;
                        self.elements.tooltip =
                            Some(TooltipNode { id: self.next_tooltip_id, content, width, left, top: 0.0 });
                    }
                }
            }
        }
        trace!(index, ?previous, "hover index changed");
    }

    fn clear_hover(&mut self) {
        remove_guideline(&mut self.doc, &mut self.elements);
        self.elements.tooltip = None;
        if let Some(layout) = self.layout.as_mut() {
            if let Some(p) = layout.hovered_index.take() {
                set_circle_radius(&mut self.doc, &self.elements, p, self.opts.circle_radius);
            }
        }
    }
}

/// Make room for labels drawn outside the plot area: the left offset grows by
/// the widest vertical tick label, the bottom offset becomes one label line.
fn widen_for_outside_labels<H: Host + ?Sized>(
    host: &H,
    opts: &mut ChartOptions,
    labels: &[AxisLabel],
    largest: f64,
) {
    if opts.show_y_axis_label {
        let widest = format_tick(order_of_magnitude(largest), opts.x_axis_numerals);
        opts.content_offset_left += host.measure_text("yaxis-tick-text", &widest).width + opts.text_spacing;
    }
    if opts.show_x_axis_label {
        let sample = labels.first().map(|l| l.tooltip_text()).unwrap_or("0");
        opts.content_offset_bottom = host.measure_text("xaxis-tick-text", sample).height;
    }
}
