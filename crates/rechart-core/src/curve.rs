// File: crates/rechart-core/src/curve.rs
// Summary: Catmull-Rom to cubic Bezier conversion for smoothed line and area paths.

use crate::geometry::Point;

/// One cubic segment: two control points and the end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

/// Convert a polyline into cubic segments through every point.
///
/// `denominator` is the tension divisor; larger values pull control points
/// closer to their anchors. The first and last points are duplicated as guide
/// points for the open ends. Fewer than two points yield no segments.
pub fn catmull_rom_to_bezier(points: &[Point], denominator: f64) -> Vec<CubicSegment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let d = denominator;
    (0..n - 1)
        .map(|i| {
            let p1 = points[i];
            let p2 = points[i + 1];
            let p0 = if i == 0 { p1 } else { points[i - 1] };
            let p3 = if i + 2 >= n { p2 } else { points[i + 2] };
            CubicSegment {
                c1: Point::new((-p0.x + d * p1.x + p2.x) / d, (-p0.y + d * p1.y + p2.y) / d),
                c2: Point::new((p1.x + d * p2.x - p3.x) / d, (p1.y + d * p2.y - p3.y) / d),
                to: p2,
            }
        })
        .collect()
}
