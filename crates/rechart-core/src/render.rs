// File: crates/rechart-core/src/render.rs
// Summary: Geometry renderer: emits grid, axes, bars, area/line paths and circles into the SVG document.

use tracing::{debug, trace};

use crate::axis::{display_text, AxisLabel};
use crate::curve::catmull_rom_to_bezier;
use crate::geometry::{to_int, Point};
use crate::host::Host;
use crate::layout::LayoutState;
use crate::options::ChartOptions;
use crate::path::PathData;
use crate::scale::format_tick;
use crate::series::Series;
use crate::svg::{NodeId, ShapeKind, SvgDocument};
use crate::tooltip::TooltipNode;
use crate::types::BAR_FILL_RATIO;

const HALF_PIXEL: &str = "translate(0.5,0.5)";

/// Guideline group created on first hover in a draw cycle; its lines are moved
/// by attribute updates afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Guideline {
    pub group: NodeId,
    pub lines: Vec<NodeId>,
}

/// Handles to the nodes of the current draw.
#[derive(Clone, Debug, Default)]
pub struct RenderedElements {
    pub grid_group: Option<NodeId>,
    pub data_group: Option<NodeId>,
    pub guideline: Option<Guideline>,
    /// Per series, indexed by axis position; `None` where nothing was drawn.
    pub bars: Vec<Vec<Option<NodeId>>>,
    pub circles: Vec<Vec<Option<NodeId>>>,
    pub tooltip: Option<TooltipNode>,
}

/// One draw pass over a fresh document.
pub struct Renderer<'a, H: Host + ?Sized> {
    pub doc: &'a mut SvgDocument,
    pub host: &'a H,
    pub layout: &'a LayoutState,
    pub opts: &'a ChartOptions,
    pub labels: &'a [AxisLabel],
    pub dataset: &'a [Series],
}

impl<H: Host + ?Sized> Renderer<'_, H> {
    /// Clear the document and draw every enabled layer, back to front.
    pub fn draw(mut self) -> RenderedElements {
        self.doc.clear();
        self.doc.set_size(self.layout.element_width, self.layout.element_height);

        let mut el = RenderedElements::default();
        if !self.layout.is_drawable() {
            debug!(
                width = self.layout.chart_width,
                height = self.layout.chart_height,
                visible = self.layout.visible_count,
                "draw skipped: degenerate geometry"
            );
            return el;
        }

        let grid = self.doc.create_shape(ShapeKind::Group, &[], &[("transform", HALF_PIXEL.into())], None);
        el.grid_group = Some(grid);
        let o = self.opts;
        if o.show_x_axis_grid { self.draw_x_grid(grid); }
        if o.show_y_axis_grid { self.draw_y_grid(grid); }
        if o.show_x_axis_label { self.draw_x_ticks(grid, o.show_bar); }
        if o.show_y_axis_label { self.draw_y_ticks(grid); }
        if o.show_x_axis_line { self.draw_x_line(grid); }
        if o.show_y_axis_line { self.draw_y_line(grid); }

        let data = self.doc.create_shape(ShapeKind::Group, &[], &[], None);
        el.data_group = Some(data);
        if o.show_bar { el.bars = self.draw_bars(data); }
        if o.show_area { self.draw_paths(data, true); }
        if o.show_line { self.draw_paths(data, false); }
        if o.show_circle { el.circles = self.draw_circles(data); }

        trace!(nodes = self.doc.len(), visible = self.layout.visible_count, "chart drawn");
        el
    }

    fn draw_x_grid(&mut self, grid: NodeId) {
        let l = self.layout;
        for i in 0..=l.visible_count {
            if self.opts.x_axis_grid_follow_label && i % l.label_mod != 0 {
                continue;
            }
            if i % l.grid_mod != 0 {
                continue;
            }
            let x = to_int(l.insets.left + i as f64 * l.x_padding);
            self.doc.create_shape(
                ShapeKind::Line,
                &["xaxis-grid"],
                &[("x1", x.into()), ("y1", 0.0.into()), ("x2", x.into()), ("y2", l.element_height.into())],
                Some(grid),
            );
        }
    }

    fn draw_y_grid(&mut self, grid: NodeId) {
        let l = self.layout;
        let x1 = if self.opts.label_outside { l.insets.left } else { 0.0 };
        for i in 0..l.y_visible_count {
            let y = to_int(l.insets.top + i as f64 * l.y_padding);
            self.doc.create_shape(
                ShapeKind::Line,
                &["yaxis-grid"],
                &[("x1", x1.into()), ("y1", y.into()), ("x2", l.element_width.into()), ("y2", y.into())],
                Some(grid),
            );
        }
    }

    /// Bar mode centers labels in their cells and draws no tick lines; otherwise
    /// labels sit on ticks and the first position is left to the y axis.
    fn draw_x_ticks(&mut self, grid: NodeId, cells: bool) {
        let l = self.layout;
        let o = self.opts;
        let base = l.element_height - l.insets.bottom;
        let (mut line_y1, mut line_y2, mut text_y) = (base, base, base);
        if o.label_outside {
            line_y2 += o.tick_offset;
            text_y = line_y2 + o.tick_offset + o.text_spacing;
        } else {
            line_y1 -= o.tick_offset;
            text_y -= o.tick_offset + o.text_spacing;
        }

        let first = if cells { 0 } else { 1 };
        for i in first..l.visible_count {
            if i % l.label_mod != 0 {
                continue;
            }
            let Some(label) = self.labels.get(i + l.visible_start) else { continue };
            let text = display_text(label, l.chart_width, o);
            let x = to_int(l.insets.left + i as f64 * l.x_padding);
            let node = if cells {
                self.doc.create_shape(
                    ShapeKind::Text,
                    &["xaxis-tick-text"],
                    &[("x", (x as f64 + l.x_padding / 2.0).into()), ("y", (text_y - o.tick_offset).into())],
                    Some(grid),
                )
            } else {
                self.doc.create_shape(
                    ShapeKind::Line,
                    &["xaxis-tick"],
                    &[("x1", x.into()), ("y1", line_y1.into()), ("x2", x.into()), ("y2", line_y2.into())],
                    Some(grid),
                );
                self.doc.create_shape(
                    ShapeKind::Text,
                    &["xaxis-tick-text"],
                    &[("x", x.into()), ("y", text_y.into())],
                    Some(grid),
                )
            };
            self.doc.set_text(node, text);
        }
    }

    fn draw_y_ticks(&mut self, grid: NodeId) {
        let l = self.layout;
        let o = self.opts;
        let line_x1 = l.insets.left;
        let (line_x2, text_x) = if o.label_outside {
            (line_x1 - o.tick_offset, line_x1 - o.text_spacing - o.tick_offset)
        } else {
            (line_x1 + o.tick_offset, line_x1 + o.tick_offset + o.text_spacing)
        };
        for i in 0..l.y_visible_count {
            let y = to_int(l.insets.top + i as f64 * l.y_padding);
            self.doc.create_shape(
                ShapeKind::Line,
                &["yaxis-tick"],
                &[("x1", line_x1.into()), ("y1", y.into()), ("x2", line_x2.into()), ("y2", y.into())],
                Some(grid),
            );
            let value = l.y_interval * (l.y_visible_count - i) as f64;
            let text = format_tick(value, o.x_axis_numerals);
            // outside labels are right-aligned against the tick
            let x = if o.label_outside {
                text_x - self.host.measure_text("yaxis-tick-text", &text).width
            } else {
                text_x
            };
            let node = self.doc.create_shape(
                ShapeKind::Text,
                &["yaxis-tick-text"],
                &[("x", x.into()), ("y", (y as f64 + o.text_spacing).into())],
                Some(grid),
            );
            self.doc.set_text(node, text);
        }
    }

    fn draw_x_line(&mut self, grid: NodeId) {
        let l = self.layout;
        let y = to_int(l.insets.top + l.y_visible_count as f64 * l.y_padding) - 1;
        self.doc.create_shape(
            ShapeKind::Line,
            &["xaxis-line"],
            &[("x1", 0.0.into()), ("y1", y.into()), ("x2", l.element_width.into()), ("y2", y.into())],
            Some(grid),
        );
    }

    fn draw_y_line(&mut self, grid: NodeId) {
        let l = self.layout;
        self.doc.create_shape(
            ShapeKind::Line,
            &["yaxis-line"],
            &[
                ("x1", l.insets.left.into()),
                ("y1", 0.0.into()),
                ("x2", l.insets.left.into()),
                ("y2", l.element_height.into()),
            ],
            Some(grid),
        );
    }

    fn draw_bars(&mut self, data: NodeId) -> Vec<Vec<Option<NodeId>>> {
        let l = self.layout;
        let n = self.dataset.len().max(1) as f64;
        let w = to_int(l.x_padding / n * BAR_FILL_RATIO).max(1) as f64;
        let pad = to_int((l.x_padding - w * n) / 2.0) as f64;

        let mut out = Vec::with_capacity(self.dataset.len());
        for (d, series) in self.dataset.iter().enumerate() {
            let mut row = vec![None; l.axis_count];
            for i in l.visible_range() {
                let Some(v) = series.value(i) else { continue };
                let x = 1.0 + w * d as f64 + l.x_at(i);
                let y = l.y_at(v);
                let h = l.base_y() - y;
                let class = series.bar_class.as_deref().unwrap_or_default();
                row[i] = Some(self.doc.create_shape(
                    ShapeKind::Rect,
                    &["bar", class],
                    &[
                        ("x", (x + pad - 1.0).into()),
                        ("y", (y - 1.0).into()),
                        ("width", w.into()),
                        ("height", h.into()),
                    ],
                    Some(data),
                ));
            }
            out.push(row);
        }
        out
    }

    /// Line or area path per series. Areas are closed along the baseline.
    fn draw_paths(&mut self, data: NodeId, area: bool) {
        let l = self.layout;
        for series in self.dataset {
            let points: Vec<Point> = l
                .visible_range()
                .filter_map(|i| series.value(i).map(|v| l.point(i, v)))
                .collect();
            let Some(&first) = points.first() else { continue };

            let mut path = PathData::new();
            if area {
                path.move_to(Point::new(l.insets.left, l.base_y())).line_to(first);
            } else {
                path.move_to(first);
            }
            if self.opts.bezier {
                for seg in catmull_rom_to_bezier(&points, self.opts.bezier_denominator) {
                    path.cubic_to(&seg);
                }
            } else {
                for &p in &points[1..] {
                    path.line_to(p);
                }
            }
            if area {
                path.line_to(Point::new(l.chart_width + l.insets.left, l.base_y())).close();
            }

            let (kind, class) = if area {
                ("area", series.path_class.as_deref())
            } else {
                ("line", series.line_class.as_deref())
            };
            self.doc.create_shape(
                ShapeKind::Path,
                &[kind, class.unwrap_or_default()],
                &[("d", path.into_string().into())],
                Some(data),
            );
        }
    }

    fn draw_circles(&mut self, data: NodeId) -> Vec<Vec<Option<NodeId>>> {
        let l = self.layout;
        let mut out = Vec::with_capacity(self.dataset.len());
        for series in self.dataset {
            let mut row = vec![None; l.axis_count];
            let class = series.circle_class.as_deref().unwrap_or_default();
            for i in l.visible_range() {
                let Some(v) = series.value(i) else { continue };
                let p = l.point(i, v);
                row[i] = Some(self.doc.create_shape(
                    ShapeKind::Circle,
                    &["circle", class],
                    &[("r", self.opts.circle_radius.into()), ("cx", p.x.into()), ("cy", p.y.into())],
                    Some(data),
                ));
            }
            out.push(row);
        }
        out
    }
}

/// Show the guideline at `index`, creating it just below the data group on
/// first use and moving the existing lines afterwards.
pub fn place_guideline(
    doc: &mut SvgDocument,
    el: &mut RenderedElements,
    layout: &LayoutState,
    opts: &ChartOptions,
    index: usize,
) {
    let x = to_int(layout.x_at(index));
    // bar mode brackets the whole cell
    let mut xs = vec![x];
    if opts.show_bar {
        xs.push(x + to_int(layout.x_padding));
    }

    match &el.guideline {
        Some(g) if doc.contains(g.group) => {
            for (&line, &x) in g.lines.iter().zip(&xs) {
                doc.set_attr(line, "x1", x);
                doc.set_attr(line, "x2", x);
            }
        }
        _ => {
            let Some(data) = el.data_group else { return };
            let group = doc.insert_before(ShapeKind::Group, &[], &[("transform", HALF_PIXEL.into())], data);
            let lines = xs
                .iter()
                .map(|&x| {
                    doc.create_shape(
                        ShapeKind::Line,
                        &["xaxis-guideline"],
                        &[("x1", x.into()), ("y1", 0.0.into()), ("x2", x.into()), ("y2", layout.element_height.into())],
                        Some(group),
                    )
                })
                .collect();
            el.guideline = Some(Guideline { group, lines });
        }
    }
}

pub fn remove_guideline(doc: &mut SvgDocument, el: &mut RenderedElements) {
    if let Some(g) = el.guideline.take() {
        doc.remove(g.group);
    }
}

/// Set the radius of every series' circle at `index`.
pub fn set_circle_radius(doc: &mut SvgDocument, el: &RenderedElements, index: usize, radius: f64) {
    for row in &el.circles {
        if let Some(Some(c)) = row.get(index) {
            doc.set_attr(*c, "r", radius);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;
    use crate::options::{OptionOverrides, ResolveContext};

    struct Fixture {
        host: StaticHost,
        opts: ChartOptions,
        labels: Vec<AxisLabel>,
        dataset: Vec<Series>,
        layout: LayoutState,
    }

    fn fixture(ov: OptionOverrides, values: Vec<f64>) -> Fixture {
        let host = StaticHost::new(400.0, 200.0);
        let labels: Vec<AxisLabel> = (0..values.len()).map(|i| AxisLabel::new(i.to_string())).collect();
        let ctx = ResolveContext { axis_count: labels.len(), client_size: (400.0, 200.0), attribute_size: None };
        let opts = ChartOptions::resolve(&ov, &ctx);
        let mut s = Series::new(values).with_color("blue");
        s.derive_classes();
        let dataset = vec![s];
        let layout = LayoutState::compute(&host, &opts, &labels, crate::series::largest(&dataset));
        Fixture { host, opts, labels, dataset, layout }
    }

    fn draw(f: &Fixture, doc: &mut SvgDocument) -> RenderedElements {
        Renderer { doc, host: &f.host, layout: &f.layout, opts: &f.opts, labels: &f.labels, dataset: &f.dataset }
            .draw()
    }

    #[test]
    fn draws_one_circle_per_present_value() {
        let f = fixture(OptionOverrides::default(), vec![1.0, f64::NAN, 3.0, 4.0]);
        let mut doc = SvgDocument::new();
        let el = draw(&f, &mut doc);
        assert_eq!(doc.find_by_class("circle").len(), 3);
        assert!(el.circles[0][1].is_none());
        assert_eq!(doc.find_by_class("line").len(), 1);
        assert_eq!(doc.find_by_class("area").len(), 1);
        let area = doc.find_by_class("area")[0];
        assert!(doc.attr(area, "d").is_some_and(|d| d.starts_with("M10,") && d.ends_with(" Z")));
    }

    #[test]
    fn bars_are_at_least_one_pixel_wide() {
        let ov = OptionOverrides { show_bar: Some(true), ..Default::default() };
        let f = fixture(ov, vec![2.0; 10]);
        let mut doc = SvgDocument::new();
        let el = draw(&f, &mut doc);
        let bars = doc.find_by_class("bar");
        assert_eq!(bars.len(), 10);
        assert_eq!(el.bars[0].iter().flatten().count(), 10);
        assert!(bars.iter().all(|&b| doc.attr(b, "width").is_some_and(|w| w.parse::<f64>().unwrap_or(0.0) >= 1.0)));
        // no tick lines next to centered cell labels
        assert!(doc.find_by_class("xaxis-tick").is_empty());
    }

    #[test]
    fn degenerate_geometry_draws_nothing() {
        let mut f = fixture(OptionOverrides::default(), vec![1.0, 2.0]);
        f.layout.chart_width = 0.0;
        let mut doc = SvgDocument::new();
        let el = draw(&f, &mut doc);
        assert!(doc.is_empty());
        assert!(el.data_group.is_none());
    }

    #[test]
    fn guideline_moves_in_place() {
        let f = fixture(OptionOverrides::default(), vec![1.0, 2.0, 3.0]);
        let mut doc = SvgDocument::new();
        let mut el = draw(&f, &mut doc);
        place_guideline(&mut doc, &mut el, &f.layout, &f.opts, 0);
        let created = doc.created_count();
        let line = el.guideline.as_ref().map(|g| g.lines[0]);
        place_guideline(&mut doc, &mut el, &f.layout, &f.opts, 2);
        assert_eq!(doc.created_count(), created);
        assert_eq!(el.guideline.as_ref().map(|g| g.lines[0]), line);
        let x = to_int(f.layout.x_at(2)).to_string();
        assert_eq!(line.and_then(|l| doc.attr(l, "x1")), Some(x.as_str()));

        // sits right below the data group
        let roots = doc.roots().to_vec();
        let data = roots.iter().position(|&r| Some(r) == el.data_group);
        let guide = roots.iter().position(|&r| Some(r) == el.guideline.as_ref().map(|g| g.group));
        assert_eq!(guide.map(|g| g + 1), data);

        remove_guideline(&mut doc, &mut el);
        assert!(doc.find_by_class("xaxis-guideline").is_empty());
    }
}
