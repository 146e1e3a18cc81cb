// File: crates/rechart-core/src/tooltip.rs
// Summary: Tooltip content (one row per series), placement next to the hovered position, HTML markup.

use std::fmt::Write;

use crate::axis::AxisLabel;
use crate::layout::LayoutState;
use crate::options::ChartOptions;
use crate::series::Series;
use crate::svg::{escape_xml, fmt_num};

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub swatch_class: String,
    pub label: String,
    pub value: String,
}

/// What the tooltip shows for one axis position.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub rows: Vec<TooltipRow>,
}

impl Tooltip {
    pub fn build(label: &AxisLabel, dataset: &[Series], index: usize) -> Self {
        let rows = dataset
            .iter()
            .map(|s| TooltipRow {
                swatch_class: s.tooltip_class.clone().unwrap_or_default(),
                label: s.label.clone().unwrap_or_default(),
                value: s.value(index).map(fmt_num).unwrap_or_default(),
            })
            .collect();
        Self { title: label.tooltip_text().to_string(), rows }
    }
}

/// The live tooltip block. Persists across hover updates within one draw.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipNode {
    /// Stable for the node's lifetime; a new node gets a new id.
    pub id: u64,
    pub content: Tooltip,
    pub width: f64,
    pub left: f64,
    pub top: f64,
}

impl TooltipNode {
    pub fn style(&self) -> String {
        format!("top: {}px; left:{}px", fmt_num(self.top), fmt_num(self.left))
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let _ = write!(html, r#"<div class="rechart-tooltip" style="{}">"#, self.style());
        let _ = write!(html, r#"<div class="tooltip-title">{}</div>"#, escape_xml(&self.content.title));
        for row in &self.content.rows {
            html.push_str(r#"<div class="data-wrapper">"#);
            let _ = write!(html, r#"<div class="data-color {}"></div>"#, escape_xml(&row.swatch_class));
            let _ = write!(html, r#"<div class="data-label">{} </div>"#, escape_xml(&row.label));
            let _ = write!(html, r#"<div class="data-value">{}</div>"#, escape_xml(&row.value));
            html.push_str("</div>");
        }
        html.push_str("</div>");
        html
    }
}

/// Left offset for a tooltip of `width` next to `index`.
///
/// Sits to the right of the position; flips to the left when it would overflow
/// the plot area, and pins to the left inset if that overflows too. Bar charts
/// clear the whole cell.
pub fn tooltip_left(layout: &LayoutState, opts: &ChartOptions, index: usize, width: f64) -> f64 {
    let cell = if opts.show_bar { layout.x_padding } else { 0.0 };
    let x = layout.x_at(index);
    if x + width + opts.tooltip_offset + cell > layout.chart_width {
        let flipped = x - (width + opts.tooltip_offset);
        if flipped < 0.0 { layout.insets.left } else { flipped }
    } else {
        x + opts.tooltip_offset + cell
    }
}
