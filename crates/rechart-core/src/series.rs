// File: crates/rechart-core/src/series.rs
// Summary: Series model: values per axis position plus color, label and derived style classes.

use serde::Deserialize;

/// One series of values, one entry per axis position.
///
/// Class names left unset are derived from `color` when the chart is built:
/// `fill-{color}` for circles, bars and area fills, `stroke-{color}` for lines and
/// `bg-{color}` for the tooltip swatch.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Series {
    pub data: Vec<f64>,
    pub color: Option<String>,
    pub label: Option<String>,
    pub circle_class: Option<String>,
    pub bar_class: Option<String>,
    pub line_class: Option<String>,
    pub tooltip_class: Option<String>,
    pub path_class: Option<String>,
}

/// Per-series payload handed to click callbacks.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesValue {
    pub value: Option<f64>,
    pub color: Option<String>,
    pub label: Option<String>,
}

pub type Dataset = Vec<Series>;

impl Series {
    pub fn new(data: Vec<f64>) -> Self {
        Self { data, ..Default::default() }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Value at `index`, or `None` when the series is shorter than the axis.
    #[inline]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied().filter(|v| v.is_finite())
    }

    pub(crate) fn derive_classes(&mut self) {
        let Some(color) = self.color.as_deref() else { return };
        let fill = format!("fill-{color}");
        self.circle_class.get_or_insert_with(|| fill.clone());
        self.bar_class.get_or_insert_with(|| fill.clone());
        self.path_class.get_or_insert_with(|| fill.clone());
        self.line_class.get_or_insert_with(|| format!("stroke-{color}"));
        self.tooltip_class.get_or_insert_with(|| format!("bg-{color}"));
    }

    pub(crate) fn snapshot(&self, index: usize) -> SeriesValue {
        SeriesValue { value: self.value(index), color: self.color.clone(), label: self.label.clone() }
    }
}

/// Largest finite value across all series; 0 when there is none.
pub fn largest(dataset: &[Series]) -> f64 {
    dataset
        .iter()
        .flat_map(|s| s.data.iter().copied())
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
        .unwrap_or(0.0)
}
