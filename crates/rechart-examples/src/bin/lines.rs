// File: crates/rechart-examples/src/bin/lines.rs
// Summary: Minimal example that renders a simple line chart to SVG.

use rechart_core::{AxisLabel, Chart, ChartRequest, OptionOverrides, Series, StaticHost, Theme};

fn main() -> Result<(), rechart_core::ChartError> {
    // Build a simple line series
    let data = vec![120.0, 180.0, 150.0, 260.0, 210.0, 300.0];
    let labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].map(AxisLabel::new).to_vec();

    let request = ChartRequest::new(
        StaticHost::new(480.0, 200.0),
        vec![Series::new(data).with_color("blue").with_label("Orders")],
        labels,
    );
    let chart = Chart::new(request, &OptionOverrides { bezier: Some(true), ..Default::default() })?;

    let out = std::path::PathBuf::from("target/out/example_lines.svg");
    chart.write_svg(&out, Some(&Theme::light()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
