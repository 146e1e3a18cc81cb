// File: crates/rechart-demo/src/main.rs
// Summary: Demo loads a dated CSV dataset and renders line, bezier-area and bar charts to SVG.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rechart_core::{AxisLabel, Chart, ChartRequest, OptionOverrides, Series, StaticHost};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const COLORS: &[&str] = &["blue", "orange", "green", "fuchsia", "navy", "red"];

struct Table {
    labels: Vec<AxisLabel>,
    series: Vec<Series>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Accept path from CLI or fall back to the bundled sample
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("data/browsers.csv"));
    let theme = std::env::args().nth(2).map(|n| rechart_core::theme::find(&n)).unwrap_or_default();
    info!(input = %path.display(), theme = theme.name, "loading dataset");

    let table = load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if table.labels.is_empty() {
        anyhow::bail!("no rows loaded, check headers/delimiter.");
    }
    info!(rows = table.labels.len(), series = table.series.len(), "dataset loaded");

    let styles = [
        ("line", OptionOverrides::default()),
        (
            "area",
            OptionOverrides { bezier: Some(true), show_line: Some(false), show_circle: Some(false), ..Default::default() },
        ),
        (
            "bar",
            OptionOverrides {
                show_bar: Some(true),
                show_area: Some(false),
                show_line: Some(false),
                show_circle: Some(false),
                ..Default::default()
            },
        ),
    ];

    for (suffix, ov) in &styles {
        let request = ChartRequest::new(StaticHost::new(960.0, 320.0), table.series.clone(), table.labels.clone());
        let chart = Chart::new(request, ov).with_context(|| format!("building {suffix} chart"))?;
        let out = out_name_with(&path, suffix);
        chart.write_svg(&out, Some(&theme)).with_context(|| format!("writing {}", out.display()))?;
        info!(output = %out.display(), nodes = chart.document().len(), "wrote chart");
    }

    Ok(())
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.svg
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}_{suffix}.svg"))
}

/// Load a CSV whose first column is a date and every other column one series.
fn load_csv(path: &Path) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    let names = headers.get(1..).unwrap_or_default();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    let mut labels = Vec::new();

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(date) = rec.get(0).and_then(parse_date) else {
            warn!(row, "skipping row without a date");
            continue;
        };
        labels.push(AxisLabel::from_date(date));
        for (i, col) in columns.iter_mut().enumerate() {
            // gaps stay in place so positions line up with labels
            let v = rec.get(i + 1).and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(f64::NAN);
            col.push(v);
        }
    }

    let series = names
        .iter()
        .zip(columns)
        .enumerate()
        .map(|(i, (name, data))| {
            Series::new(data).with_label(name.replace('_', " ")).with_color(COLORS[i % COLORS.len()])
        })
        .collect();
    Ok(Table { labels, series })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}
