// File: crates/rechart-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests (labels, series, chart construction).
#![allow(dead_code)]

use rechart_core::{AxisLabel, Chart, ChartRequest, OptionOverrides, Series, StaticHost};

pub fn labels(n: usize) -> Vec<AxisLabel> {
    (1..=n).map(|i| AxisLabel::new(format!("{i}/9")).with_tooltip(format!("September {i}"))).collect()
}

/// Deterministic wavy values between 300 and 1000.
pub fn values(n: usize, phase: f64) -> Vec<f64> {
    (0..n).map(|i| 650.0 + 350.0 * ((i as f64 * 0.7 + phase).sin())).collect()
}

pub fn chart(width: f64, height: f64, n: usize, ov: OptionOverrides) -> Chart<StaticHost> {
    chart_on(StaticHost::new(width, height), n, ov)
}

pub fn chart_on(host: StaticHost, n: usize, ov: OptionOverrides) -> Chart<StaticHost> {
    let dataset = vec![
        Series::new(values(n, 0.0)).with_color("navy").with_label("Safari"),
        Series::new(values(n, 1.3)).with_color("fuchsia").with_label("Internet Explorer"),
    ];
    Chart::new(ChartRequest::new(host, dataset, labels(n)), &ov).expect("chart builds")
}
