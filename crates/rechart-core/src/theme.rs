// File: crates/rechart-core/src/theme.rs
// Summary: Light/Dark stylesheets for rendered charts, including the per-color series classes.

use std::fmt::Write;

/// CSS colors for the chart chrome plus a palette resolving series color names.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub guideline: &'static str,
    /// Fill opacity of area paths.
    pub area_opacity: f64,
    /// Series color name to CSS color. Names not listed pass through as-is.
    pub palette: &'static [(&'static str, &'static str)],
}

const DARK_PALETTE: &[(&str, &str)] = &[
    ("white", "#f5f5f7"),
    ("black", "#2a2a30"),
    ("red", "#dc5050"),
    ("green", "#28c878"),
    ("blue", "#40a0ff"),
    ("navy", "#5a78c8"),
    ("fuchsia", "#e060d0"),
    ("orange", "#f09a40"),
];

const LIGHT_PALETTE: &[(&str, &str)] = &[
    ("white", "#d8d8de"),
    ("black", "#14141e"),
    ("red", "#c83c3c"),
    ("green", "#14a05a"),
    ("blue", "#2078c8"),
    ("navy", "#1e2e78"),
    ("fuchsia", "#b4289c"),
    ("orange", "#d2781e"),
];

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            guideline: "#ffe646",
            area_opacity: 0.35,
            palette: DARK_PALETTE,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            grid: "#e6e6eb",
            axis_line: "#3c3c46",
            axis_label: "#14141e",
            guideline: "#1e78f0",
            area_opacity: 0.25,
            palette: LIGHT_PALETTE,
        }
    }

    /// CSS color for a series color name.
    pub fn color<'a>(&self, name: &'a str) -> &'a str {
        self.palette
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map_or(name, |&(_, css)| css)
    }

    /// Stylesheet covering the chart chrome and the `fill-`, `stroke-` and `bg-`
    /// classes of every listed color. Duplicate colors emit one rule set.
    pub fn stylesheet<'a>(&self, colors: impl IntoIterator<Item = &'a str>) -> String {
        let mut css = String::new();
        let _ = writeln!(css, "svg{{background:{}}}", self.background);
        let _ = writeln!(css, ".xaxis-grid,.yaxis-grid{{stroke:{};stroke-width:1}}", self.grid);
        let _ = writeln!(
            css,
            ".xaxis-line,.yaxis-line,.xaxis-tick,.yaxis-tick{{stroke:{}}}",
            self.axis_line
        );
        let _ = writeln!(
            css,
            ".xaxis-tick-text,.yaxis-tick-text{{fill:{};font:12px sans-serif}}",
            self.axis_label
        );
        let _ = writeln!(css, ".xaxis-guideline{{stroke:{}}}", self.guideline);
        let _ = writeln!(css, ".line{{fill:none;stroke-width:2}}");
        let _ = writeln!(css, ".area{{opacity:{}}}", self.area_opacity);

        let mut seen: Vec<&str> = Vec::new();
        for name in colors {
            if seen.contains(&name) {
                continue;
            }
            seen.push(name);
            let c = self.color(name);
            let _ = writeln!(css, ".fill-{name}{{fill:{c}}}");
            let _ = writeln!(css, ".stroke-{name}{{stroke:{c}}}");
            let _ = writeln!(css, ".bg-{name}{{background-color:{c}}}");
        }
        css
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_series_classes_once() {
        let css = Theme::dark().stylesheet(["navy", "teal", "navy"]);
        assert!(css.contains(".fill-navy{fill:#5a78c8}"));
        assert!(css.contains(".stroke-teal{stroke:teal}"));
        assert!(css.contains(".bg-teal{background-color:teal}"));
        assert_eq!(css.matches(".fill-navy").count(), 1);
    }

    #[test]
    fn unknown_theme_falls_back_to_light() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("sepia").name, "light");
    }
}
