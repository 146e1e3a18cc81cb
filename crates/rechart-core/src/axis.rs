// File: crates/rechart-core/src/axis.rs
// Summary: Axis label model (three text variants, tooltip, memoized widths) and variant selection.

use std::cell::OnceCell;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::host::Host;
use crate::options::ChartOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelVariant {
    Small,
    Medium,
    Large,
}

#[derive(Clone, Debug, Default)]
struct LabelWidths {
    small: OnceCell<f64>,
    medium: OnceCell<f64>,
    large: OnceCell<f64>,
}

/// Label for one axis position.
///
/// Text is static after construction; pixel widths are measured on first use and
/// cached.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AxisLabel {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    pub tooltip: Option<String>,
    #[serde(skip)]
    widths: LabelWidths,
}

impl AxisLabel {
    pub fn new(small: impl Into<String>) -> Self {
        Self { small: Some(small.into()), ..Default::default() }
    }

    pub fn with_medium(mut self, text: impl Into<String>) -> Self {
        self.medium = Some(text.into());
        self
    }

    pub fn with_large(mut self, text: impl Into<String>) -> Self {
        self.large = Some(text.into());
        self
    }

    pub fn with_tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }

    /// `13/9`, `2023-09-13` and `September 13, 2023`, with the long form as tooltip.
    pub fn from_date(date: NaiveDate) -> Self {
        let long = date.format("%B %-d, %Y").to_string();
        Self::new(date.format("%-d/%-m").to_string())
            .with_medium(date.format("%Y-%m-%d").to_string())
            .with_large(long.clone())
            .with_tooltip(long)
    }

    pub fn text(&self, variant: LabelVariant) -> Option<&str> {
        match variant {
            LabelVariant::Small => self.small.as_deref(),
            LabelVariant::Medium => self.medium.as_deref(),
            LabelVariant::Large => self.large.as_deref(),
        }
    }

    pub fn tooltip_text(&self) -> &str {
        self.tooltip.as_deref().unwrap_or_else(|| self.fallback_text())
    }

    fn fallback_text(&self) -> &str {
        self.small
            .as_deref()
            .or(self.medium.as_deref())
            .or(self.large.as_deref())
            .unwrap_or("")
    }

    /// Fill in the tooltip from the compact text when the caller gave none.
    pub(crate) fn finalize(&mut self) {
        if self.tooltip.is_none() {
            self.tooltip = Some(self.fallback_text().to_string());
        }
    }

    /// Measured width of `variant` plus `spacing`; 0 when the variant is absent.
    pub fn width<H: Host + ?Sized>(&self, variant: LabelVariant, host: &H, spacing: f64) -> f64 {
        let Some(text) = self.text(variant) else { return 0.0 };
        let cell = match variant {
            LabelVariant::Small => &self.widths.small,
            LabelVariant::Medium => &self.widths.medium,
            LabelVariant::Large => &self.widths.large,
        };
        *cell.get_or_init(|| host.measure_text("xaxis-tick-text", text).width + spacing)
    }
}

/// Pick the label variant for the current chart width.
///
/// Large wins at `size_large` and up, medium at `size_medium` and up; a label
/// missing its compact text falls back to the next variant it does carry.
pub fn select_variant(label: &AxisLabel, chart_width: f64, opts: &ChartOptions) -> LabelVariant {
    if label.large.is_some() && chart_width >= opts.size_large {
        return LabelVariant::Large;
    }
    if label.medium.is_some() && chart_width >= opts.size_medium {
        return LabelVariant::Medium;
    }
    if label.small.is_some() {
        LabelVariant::Small
    } else if label.medium.is_some() {
        LabelVariant::Medium
    } else {
        LabelVariant::Large
    }
}

/// Text shown for `label` at `chart_width`.
pub fn display_text<'a>(label: &'a AxisLabel, chart_width: f64, opts: &ChartOptions) -> &'a str {
    label.text(select_variant(label, chart_width, opts)).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;

    fn full() -> AxisLabel {
        AxisLabel::new("1/2").with_medium("2024-02-01").with_large("February 1, 2024")
    }

    #[test]
    fn variant_tracks_breakpoints() {
        let o = ChartOptions::defaults();
        let l = full();
        assert_eq!(select_variant(&l, 500.0, o), LabelVariant::Small);
        assert_eq!(select_variant(&l, 768.0, o), LabelVariant::Medium);
        assert_eq!(select_variant(&l, 992.0, o), LabelVariant::Large);
        assert_eq!(display_text(&l, 800.0, o), "2024-02-01");
    }

    #[test]
    fn missing_variants_fall_back() {
        let o = ChartOptions::defaults();
        let only_medium = AxisLabel { medium: Some("mid".into()), ..Default::default() };
        assert_eq!(display_text(&only_medium, 100.0, o), "mid");
        assert_eq!(display_text(&AxisLabel::default(), 100.0, o), "");
    }

    #[test]
    fn tooltip_defaults_to_compact_text() {
        let mut l = full();
        l.finalize();
        assert_eq!(l.tooltip_text(), "1/2");
        let mut t = AxisLabel::new("a").with_tooltip("Alpha");
        t.finalize();
        assert_eq!(t.tooltip_text(), "Alpha");
    }

    #[test]
    fn widths_are_memoized_with_spacing() {
        let host = StaticHost::new(600.0, 300.0);
        let l = full();
        let w = l.width(LabelVariant::Small, &host, 4.0);
        assert_eq!(w, host.metrics.measure_width("1/2") + 4.0);
        // spacing is part of the first measurement only
        assert_eq!(l.width(LabelVariant::Small, &host, 100.0), w);
        assert_eq!(AxisLabel::default().width(LabelVariant::Large, &host, 4.0), 0.0);
    }

    #[test]
    fn date_labels() {
        let d = NaiveDate::from_ymd_opt(2023, 9, 13).expect("valid date");
        let l = AxisLabel::from_date(d);
        assert_eq!(l.small.as_deref(), Some("13/9"));
        assert_eq!(l.medium.as_deref(), Some("2023-09-13"));
        assert_eq!(l.tooltip_text(), "September 13, 2023");
    }
}
