// File: crates/rechart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Truncate toward zero, mapping NaN and infinities to 0.
///
/// Pixel positions are snapped with this before they land in SVG attributes.
#[inline]
pub fn to_int(v: f64) -> i64 {
    if v.is_finite() { v.trunc() as i64 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_int_truncates_toward_zero() {
        assert_eq!(to_int(3.9), 3);
        assert_eq!(to_int(-3.9), -3);
        assert_eq!(to_int(f64::NAN), 0);
        assert_eq!(to_int(f64::INFINITY), 0);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-1.0, 0.0, 3.0), 0.0);
    }
}
