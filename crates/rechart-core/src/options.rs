// File: crates/rechart-core/src/options.rs
// Summary: Chart options, process-wide defaults and the resolver that merges caller overrides.

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use serde::Deserialize;

use crate::axis::AxisLabel;
use crate::error::ChartResult;
use crate::series::SeriesValue;
use crate::types::Insets;

type ClickFn = dyn Fn(&AxisLabel, &[SeriesValue], usize) + Send + Sync;

/// Callback invoked with the clicked label, per-series values and the data index.
#[derive(Clone)]
pub struct ClickCallback(Arc<ClickFn>);

impl ClickCallback {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&AxisLabel, &[SeriesValue], usize) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, label: &AxisLabel, values: &[SeriesValue], index: usize) {
        (self.0)(label, values, index)
    }
}

impl fmt::Debug for ClickCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickCallback(..)")
    }
}

macro_rules! chart_options {
    ($( $(#[$doc:meta])* $field:ident : $ty:ty = $default:expr, )*) => {
        /// Fully resolved options; every recognized key has a concrete value.
        #[derive(Clone, Debug)]
        pub struct ChartOptions {
            $( $(#[$doc])* pub $field: $ty, )*
            /// Height / width ratio. Derived from the host element when unset.
            pub ratio: Option<f64>,
            pub click: Option<ClickCallback>,
        }

        /// Caller-supplied partial options. `None` means "use the default".
        #[derive(Clone, Debug, Default, Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct OptionOverrides {
            $( pub $field: Option<$ty>, )*
            pub ratio: Option<f64>,
            #[serde(skip)]
            pub click: Option<ClickCallback>,
        }

        impl ChartOptions {
            fn builtin() -> Self {
                Self { $( $field: $default, )* ratio: None, click: None }
            }

            /// Take the override for each key when present, else the default.
            pub fn merged(defaults: &ChartOptions, overrides: &OptionOverrides) -> Self {
                Self {
                    $( $field: overrides.$field.clone().unwrap_or_else(|| defaults.$field.clone()), )*
                    ratio: overrides.ratio.or(defaults.ratio),
                    click: overrides.click.clone().or_else(|| defaults.click.clone()),
                }
            }
        }
    };
}

chart_options! {
    min_height: f64 = 0.0,
    max_height: f64 = f64::INFINITY,
    /// Derive height from `ratio` in responsive mode instead of reading it from the host.
    keep_ratio: bool = true,
    content_offset_top: f64 = 10.0,
    content_offset_right: f64 = 10.0,
    content_offset_bottom: f64 = 10.0,
    content_offset_left: f64 = 10.0,
    tooltip_offset: f64 = 10.0,
    tick_offset: f64 = 8.0,
    /// Hold time in milliseconds before a touch press turns into hovering.
    touch_delay: u64 = 300,
    lock_scroll_on_touch_press: bool = true,
    text_spacing: f64 = 4.0,
    bezier: bool = false,
    bezier_denominator: f64 = 9.0,
    responsive: bool = true,
    reduce_data: bool = true,
    label_outside: bool = false,
    reduce_x_axis_label: bool = true,
    circle_radius: f64 = 4.0,
    circle_radius_hover: f64 = 8.0,
    x_axis_grid_follow_label: bool = false,
    x_axis_grid_min_distance: f64 = 34.0,
    x_axis_min_distance: f64 = 17.0,
    /// Abbreviate vertical tick labels with `k` / `m` suffixes.
    x_axis_numerals: bool = true,
    y_axis_min_distance: f64 = 30.0,
    show_x_axis_label: bool = true,
    show_x_axis_grid: bool = true,
    show_x_axis_line: bool = true,
    show_y_axis_label: bool = true,
    show_y_axis_grid: bool = true,
    show_y_axis_line: bool = true,
    show_bar: bool = false,
    show_area: bool = true,
    show_line: bool = true,
    show_circle: bool = true,
    show_tooltip: bool = true,
    show_x_axis_guideline: bool = true,
    size_medium: f64 = 768.0,
    size_large: f64 = 992.0,
}

/// Host facts the resolver needs for its derived adjustments.
#[derive(Clone, Copy, Debug)]
pub struct ResolveContext {
    pub axis_count: usize,
    pub client_size: (f64, f64),
    pub attribute_size: Option<(f64, f64)>,
}

impl ChartOptions {
    /// Process-wide defaults. Charts clone these; nothing writes to them.
    pub fn defaults() -> &'static ChartOptions {
        static DEFAULTS: OnceLock<ChartOptions> = OnceLock::new();
        DEFAULTS.get_or_init(ChartOptions::builtin)
    }

    /// Merge `overrides` over the defaults, then apply the derived adjustments:
    /// bar mode implies outside labels and grid-sized spacing unless set explicitly,
    /// bezier needs three axis positions, and a missing ratio comes from the host.
    pub fn resolve(overrides: &OptionOverrides, ctx: &ResolveContext) -> Self {
        let mut opts = Self::merged(Self::defaults(), overrides);

        if opts.show_bar {
            if overrides.label_outside.is_none() {
                opts.label_outside = true;
            }
            if overrides.x_axis_min_distance.is_none() {
                opts.x_axis_min_distance = opts.x_axis_grid_min_distance;
            }
        }

        if opts.bezier && ctx.axis_count < 3 {
            opts.bezier = false;
        }

        if opts.ratio.is_none() {
            opts.ratio = ratio_of(ctx.client_size).or_else(|| ctx.attribute_size.and_then(ratio_of));
        }

        opts
    }

    pub fn insets(&self) -> Insets {
        Insets::new(
            self.content_offset_left,
            self.content_offset_right,
            self.content_offset_top,
            self.content_offset_bottom,
        )
    }

    pub fn touch_delay(&self) -> Duration {
        Duration::from_millis(self.touch_delay)
    }
}

impl OptionOverrides {
    /// Parse camelCase JSON options. Unrecognized keys are ignored.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_click<F>(mut self, f: F) -> Self
    where
        F: Fn(&AxisLabel, &[SeriesValue], usize) + Send + Sync + 'static,
    {
        self.click = Some(ClickCallback::new(f));
        self
    }
}

fn ratio_of((width, height): (f64, f64)) -> Option<f64> {
    let r = height / width;
    r.is_finite().then_some(r)
}
