// Whole-buffer color passes: grayscale, average, alpha flattening and
// normalizing fully transparent pixels.

use crate::buffer::Buffer;
use crate::color::Color;

impl Buffer {
    /// Replace RGB with the pixel's luma (see `LUMA_WEIGHTS`); alpha is kept.
    /// Visual: green reads brightest, blue darkest; see-through areas stay see-through.
    pub fn grayscale(&mut self) {
        for c in &mut self.colors {
            let l = c.luma();
            *c = Color::new(l, l, l, c.a);
        }
    }

    /// Mean of every pixel, alpha included. `Color::NO_ALPHA` for an empty grid.
    pub fn average(&self) -> Color {
        if self.colors.is_empty() {
            return Color::NO_ALPHA;
        }
        let sum = self.colors.iter().fold(Color::NO_ALPHA, |acc, c| acc + *c);
        sum / self.colors.len() as f32
    }

    /// Replace every pixel with alpha below `threshold` by `background`.
    /// Used before saving to a format without alpha.
    /// Visual: translucent edges become solid `background` instead of turning black
    /// once the alpha channel is dropped.
    pub fn full_alpha(&mut self, background: Color, threshold: f32) {
        for c in &mut self.colors {
            if c.a < threshold {
                *c = background;
            }
        }
    }

    /// Turn every zero-alpha pixel into `Color::NO_ALPHA`, whatever its RGB.
    pub fn sanitize(&mut self) {
        for c in &mut self.colors {
            if c.is_transparent() {
                *c = Color::NO_ALPHA;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, Size};

    #[test]
    fn grayscale_uses_luma_weights_and_keeps_alpha() {
        let mut b = Buffer::new(Size::new(1, 1), Color::new(1.0, 0.0, 0.0, 0.5));
        b.grayscale();
        assert_eq!(b.get(Point::ORIGIN), Color::new(0.222, 0.222, 0.222, 0.5));

        let mut w = Buffer::new(Size::new(2, 2), Color::WHITE);
        w.grayscale();
        let c = w.get(Point::new(1, 1));
        assert!((c.r - 1.0).abs() < 1e-6 && c.r == c.g && c.g == c.b);
    }

    #[test]
    fn average_of_half_black_half_white() {
        let mut b = Buffer::new(Size::new(2, 1), Color::BLACK);
        b.set(Point::new(1, 0), Color::WHITE);
        assert_eq!(b.average(), Color::new(0.5, 0.5, 0.5, 1.0));
        assert_eq!(Buffer::default().average(), Color::NO_ALPHA);
    }

    #[test]
    fn full_alpha_replaces_below_threshold_only() {
        let mut b = Buffer::new(Size::new(3, 1), Color::RED);
        b.set(Point::new(0, 0), Color::new(0.0, 1.0, 0.0, 0.2));
        b.set(Point::new(1, 0), Color::new(0.0, 1.0, 0.0, 0.5));
        b.full_alpha(Color::WHITE, 0.5);
        assert_eq!(b.get(Point::new(0, 0)), Color::WHITE);
        assert_eq!(b.get(Point::new(1, 0)), Color::new(0.0, 1.0, 0.0, 0.5));
        assert_eq!(b.get(Point::new(2, 0)), Color::RED);
    }

    #[test]
    fn sanitize_normalizes_clear_pixels() {
        let mut b = Buffer::new(Size::new(2, 1), Color::new(0.7, 0.1, 0.4, 0.0));
        b.set(Point::new(1, 0), Color::new(0.7, 0.1, 0.4, 0.01));
        b.sanitize();
        assert_eq!(b.get(Point::new(0, 0)), Color::NO_ALPHA);
        assert_eq!(b.get(Point::new(1, 0)), Color::new(0.7, 0.1, 0.4, 0.01));
    }
}
