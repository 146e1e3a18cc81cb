// File: crates/rechart-core/src/path.rs
// Summary: Builder for SVG path data using absolute commands.

use std::fmt::Write;

use crate::curve::CubicSegment;
use crate::geometry::Point;
use crate::svg::fmt_num;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    d: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    fn sep(&mut self) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.sep();
        let _ = write!(self.d, "M{},{}", fmt_num(p.x), fmt_num(p.y));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.sep();
        let _ = write!(self.d, "L{},{}", fmt_num(p.x), fmt_num(p.y));
        self
    }

    pub fn cubic_to(&mut self, s: &CubicSegment) -> &mut Self {
        self.sep();
        let _ = write!(
            self.d,
            "C{},{},{},{},{},{}",
            fmt_num(s.c1.x),
            fmt_num(s.c1.y),
            fmt_num(s.c2.x),
            fmt_num(s.c2.y),
            fmt_num(s.to.x),
            fmt_num(s.to.y)
        );
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.sep();
        self.d.push('Z');
        self
    }

    pub fn as_str(&self) -> &str {
        &self.d
    }

    pub fn into_string(self) -> String {
        self.d
    }
}
