// Axis-aligned drawing on a Buffer.
// Every primitive is total: endpoints and rects are clamped to the grid first,
// and anything that is still malformed afterwards draws nothing.

use crate::buffer::Buffer;
use crate::color::Color;
use crate::types::{Point, Rect};

impl Buffer {
    /* ---------- lines ---------- */

    /// Fill the inclusive span from `start` to `end` on one row.
    /// Both ends are clamped; the call is a no-op unless they share a row and
    /// `start.x <= end.x`.
    pub fn draw_horizontal_line(&mut self, start: Point, end: Point, color: Color) {
        let s = self.clamp_point(start);
        let e = self.clamp_point(end);

        if s.y != e.y || s.x > e.x || !self.in_bounds(s) || !self.in_bounds(e) {
            return;
        }

        let (first, last) = (self.index(s), self.index(e));
        self.colors[first..=last].fill(color);
    }

    /// Fill the inclusive span from `start` to `end` on one column.
    /// Same clamping and no-op rules as `draw_horizontal_line`, on the other axis.
    pub fn draw_vertical_line(&mut self, start: Point, end: Point, color: Color) {
        let s = self.clamp_point(start);
        let e = self.clamp_point(end);

        if s.x != e.x || s.y > e.y || !self.in_bounds(s) || !self.in_bounds(e) {
            return;
        }

        let stride = self.size.w as usize; // one row down
        let (first, last) = (self.index(s), self.index(e));
        for idx in (first..=last).step_by(stride) {
            self.colors[idx] = color;
        }
    }

    /* ---------- rects ---------- */

    /// Outline of `rect`. Corner pixels are written twice.
    /// Visual: a one-pixel frame around the on-grid part of `rect`.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        let r = self.clamp_rect(rect);
        if r.is_empty() {
            return;
        }

        self.draw_horizontal_line(r.top_left(), r.top_right(), color);
        self.draw_horizontal_line(r.bottom_left(), r.bottom_right(), color);
        self.draw_vertical_line(r.top_left(), r.bottom_left(), color);
        self.draw_vertical_line(r.top_right(), r.bottom_right(), color);
    }

    /// Solid `rect`, drawn one row at a time from top to bottom.
    /// Visual: the clipped part of the rect becomes one flat block of `color`.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = self.clamp_rect(rect);
        if r.is_empty() {
            return;
        }

        let step = Point::new(0, 1);
        let (mut from, mut to) = (r.top_left(), r.top_right());
        let end = r.bottom_left() + step;
        while from != end {
            self.draw_horizontal_line(from, to, color);
            from += step;
            to += step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Size;

    fn count(b: &Buffer, c: Color) -> usize {
        b.colors().iter().filter(|p| **p == c).count()
    }

    #[test]
    fn horizontal_line_clamps_end() {
        let mut b = Buffer::new(Size::new(2, 2), Color::NO_ALPHA);
        b.draw_horizontal_line(Point::new(0, 0), Point::new(5, 0), Color::RED);
        assert_eq!(b.get(Point::new(0, 0)), Color::RED);
        assert_eq!(b.get(Point::new(1, 0)), Color::RED);
        assert_eq!(count(&b, Color::RED), 2);
    }

    #[test]
    fn misaligned_or_reversed_lines_are_ignored() {
        let mut b = Buffer::new(Size::new(4, 4), Color::NO_ALPHA);
        b.draw_horizontal_line(Point::new(0, 0), Point::new(3, 1), Color::RED);
        b.draw_horizontal_line(Point::new(3, 0), Point::new(0, 0), Color::RED);
        b.draw_vertical_line(Point::new(0, 0), Point::new(1, 3), Color::RED);
        b.draw_vertical_line(Point::new(0, 3), Point::new(0, 0), Color::RED);
        assert_eq!(count(&b, Color::RED), 0);
    }

    #[test]
    fn vertical_line_steps_by_row() {
        let mut b = Buffer::new(Size::new(3, 4), Color::NO_ALPHA);
        b.draw_vertical_line(Point::new(1, -2), Point::new(1, 2), Color::BLUE);
        for y in 0..=2 {
            assert_eq!(b.get(Point::new(1, y)), Color::BLUE);
        }
        assert_eq!(b.get(Point::new(1, 3)), Color::NO_ALPHA);
        assert_eq!(count(&b, Color::BLUE), 3);
    }

    #[test]
    fn rect_outline_and_fill() {
        let mut b = Buffer::new(Size::new(6, 6), Color::NO_ALPHA);
        b.draw_rect(Rect::new(1, 1, 4, 4), Color::GREEN);
        assert_eq!(count(&b, Color::GREEN), 12);
        assert_eq!(b.get(Point::new(2, 2)), Color::NO_ALPHA);

        b.fill_rect(Rect::new(1, 1, 4, 4), Color::RED);
        assert_eq!(count(&b, Color::RED), 16);
        assert_eq!(count(&b, Color::GREEN), 0);
    }

    #[test]
    fn off_grid_and_inverted_rects_draw_nothing() {
        let mut b = Buffer::new(Size::new(4, 4), Color::NO_ALPHA);
        b.fill_rect(Rect::new(10, 10, 20, 20), Color::RED);
        b.fill_rect(Rect::new(3, 3, 1, 1), Color::RED);
        b.draw_rect(Rect::new(-9, -9, -5, -5), Color::RED);
        assert_eq!(count(&b, Color::RED), 0);

        let mut empty = Buffer::default();
        empty.fill_rect(Rect::new(0, 0, 3, 3), Color::RED);
        empty.draw_horizontal_line(Point::ORIGIN, Point::new(3, 0), Color::RED);
        assert!(empty.colors().is_empty());
    }

    #[test]
    fn extreme_corner_rects_do_not_overflow() {
        let mut b = Buffer::new(Size::new(4, 4), Color::NO_ALPHA);
        b.fill_rect(Rect::new(0, i32::MAX, 3, i32::MIN), Color::RED);
        b.draw_rect(Rect::new(i32::MAX, i32::MAX, i32::MIN, i32::MIN), Color::RED);
        b.draw_horizontal_line(Point::new(i32::MAX, 0), Point::new(i32::MIN, 0), Color::RED);
        assert_eq!(count(&b, Color::RED), 0);

        b.fill_rect(Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX), Color::GREEN);
        assert_eq!(count(&b, Color::GREEN), 16);
        b.draw_rect(Rect::new(i32::MIN, 1, 2, i32::MAX), Color::BLUE);
        // Framed at the clamped rect (0,1)-(2,3).
        assert_eq!(count(&b, Color::BLUE), 8);
        assert_eq!(b.get(Point::new(1, 2)), Color::GREEN);
    }

    #[test]
    fn fill_overhanging_rect_is_clipped() {
        let mut b = Buffer::new(Size::new(4, 4), Color::NO_ALPHA);
        b.fill_rect(Rect::new(-2, 2, 10, 10), Color::RED);
        assert_eq!(count(&b, Color::RED), 8);
    }
}
