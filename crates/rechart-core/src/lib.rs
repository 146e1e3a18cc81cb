// File: crates/rechart-core/src/lib.rs
// Summary: Core library entry point; exports the chart facade, options, host seam and SVG document.

pub mod axis;
pub mod chart;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod host;
pub mod interaction;
pub mod layout;
pub mod options;
pub mod path;
pub mod render;
pub mod scale;
pub mod series;
pub mod svg;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{AxisLabel, LabelVariant};
pub use chart::{Chart, ChartRequest};
pub use error::{ChartError, ChartResult};
pub use host::{Host, StaticHost};
pub use interaction::{InteractionTracker, PointerPhase};
pub use layout::{LayoutEngine, LayoutState};
pub use options::{ChartOptions, ClickCallback, OptionOverrides};
pub use render::RenderedElements;
pub use series::{Dataset, Series, SeriesValue};
pub use svg::{NodeId, ShapeKind, SvgDocument};
pub use text::{TextExtent, TextMetrics};
pub use theme::Theme;
pub use tooltip::{Tooltip, TooltipNode};
