// File: crates/rechart-core/src/text.rs
// Summary: Headless text measurement with a proportional glyph-width estimate.

/// Measured size of a run of text, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Estimates text extents without a font stack.
///
/// Digits and narrow punctuation get a smaller advance than letters so tick labels
/// such as `1.5k` measure close to what a browser reports for a sans-serif face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub font_size: f64,
    pub line_height: f64,
}

impl TextMetrics {
    pub const fn new(font_size: f64) -> Self {
        Self { font_size, line_height: 1.2 }
    }

    fn advance(&self, ch: char) -> f64 {
        let em = match ch {
            'i' | 'l' | 'j' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.28,
            ' ' | '/' | '-' | 't' | 'f' | 'r' => 0.35,
            '0'..='9' => 0.56,
            'm' | 'w' | 'M' | 'W' => 0.85,
            c if c.is_ascii_uppercase() => 0.68,
            _ => 0.55,
        };
        em * self.font_size
    }

    pub fn measure_width(&self, text: &str) -> f64 {
        text.chars().map(|c| self.advance(c)).sum()
    }

    pub fn measure(&self, text: &str) -> TextExtent {
        TextExtent { width: self.measure_width(text), height: self.font_size * self.line_height }
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::new(12.0)
    }
}
