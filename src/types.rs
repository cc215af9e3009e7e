// Integer geometry shared by the buffer: points, sizes and inclusive rects.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Pixel coordinate. May lie outside any buffer; the buffer decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);
    /// Sentinel for "no point".
    pub const OUT_OF_BOUNDS: Point = Point::new(-1, -1);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<x={}, y={}>", self.x, self.y)
    }
}

/// Width and height in pixels. Non-negative by convention only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Pixel count; negative extents count as zero.
    pub fn area(&self) -> usize {
        self.w.max(0) as usize * self.h.max(0) as usize
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<width={}, height={}>", self.w, self.h)
    }
}

/// Inclusive bounding box: `right` and `bottom` are the last covered pixel.
/// A rect with `right < left` or `bottom < top` is empty; it is a legal value
/// but covers no pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Origin + extent form.
    pub fn from_origin_size(p: Point, s: Size) -> Self {
        Self::new(p.x, p.y, p.x + s.w - 1, p.y + s.h - 1)
    }

    /// Top-left and bottom-right corners, both inclusive.
    pub fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    /// Zero-sized rect anchored at `p`.
    pub fn empty_at(p: Point) -> Self {
        Self::new(p.x, p.y, p.x - 1, p.y - 1)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        extent(self.left, self.right)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        extent(self.top, self.bottom)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width().max(0), self.height().max(0))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right, self.top)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// Push every edge outward by `g`.
    pub fn grow(&mut self, g: i32) {
        self.left -= g;
        self.top -= g;
        self.right += g;
        self.bottom += g;
    }

    /// Pull every edge inward by `s`.
    pub fn shrink(&mut self, s: i32) {
        self.grow(-s);
    }

    /// Translate so the top-left corner sits at the origin.
    pub fn normalize(&mut self) {
        let origin = self.top_left();
        *self -= origin;
    }

    pub fn normal(&self) -> Rect {
        let mut n = *self;
        n.normalize();
        n
    }

    /// Split into the first `y` rows and the rest.
    pub fn split_horizontally(&self, y: i32) -> (Rect, Rect) {
        let mut upper = *self;
        let mut lower = *self;
        upper.bottom = self.top + y - 1;
        lower.top = self.top + y;
        (upper, lower)
    }

    /// Split into the first `x` columns and the rest.
    pub fn split_vertically(&self, x: i32) -> (Rect, Rect) {
        let mut left = *self;
        let mut right = *self;
        left.right = self.left + x - 1;
        right.left = self.left + x;
        (left, right)
    }
}

// Inclusive span length, saturated to i32 so extreme corners cannot overflow.
#[inline]
fn extent(first: i32, last: i32) -> i32 {
    (last as i64 - first as i64 + 1).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl Add<Point> for Rect {
    type Output = Rect;
    fn add(mut self, p: Point) -> Rect {
        self += p;
        self
    }
}

impl AddAssign<Point> for Rect {
    fn add_assign(&mut self, p: Point) {
        self.left += p.x;
        self.right += p.x;
        self.top += p.y;
        self.bottom += p.y;
    }
}

impl SubAssign<Point> for Rect {
    fn sub_assign(&mut self, p: Point) {
        *self += Point::new(-p.x, -p.y);
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<left={}, top={}, right={}, bottom={}>",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_size_is_inclusive() {
        let r = Rect::from_origin_size(Point::new(3, 3), Size::new(4, 4));
        assert_eq!(r, Rect::new(3, 3, 6, 6));
        assert_eq!((r.width(), r.height()), (4, 4));
        assert_eq!(r.bottom_right(), Point::new(6, 6));
    }

    #[test]
    fn grow_and_shrink_cancel() {
        let mut r = Rect::new(2, 2, 5, 5);
        r.grow(2);
        assert_eq!(r, Rect::new(0, 0, 7, 7));
        r.shrink(2);
        assert_eq!(r, Rect::new(2, 2, 5, 5));
    }

    #[test]
    fn normal_moves_to_origin() {
        assert_eq!(Rect::new(4, 7, 9, 8).normal(), Rect::new(0, 0, 5, 1));
    }

    #[test]
    fn splits_do_not_overlap() {
        let r = Rect::new(0, 0, 9, 9);
        let (a, b) = r.split_horizontally(4);
        assert_eq!(a, Rect::new(0, 0, 9, 3));
        assert_eq!(b, Rect::new(0, 4, 9, 9));
        let (l, rr) = r.split_vertically(3);
        assert_eq!(l.width() + rr.width(), r.width());
        assert_eq!(rr.left, 3);
    }

    #[test]
    fn empty_rects() {
        assert!(Rect::empty_at(Point::new(5, 5)).is_empty());
        assert_eq!(Rect::empty_at(Point::new(5, 5)).size(), Size::new(0, 0));
        assert!(Rect::new(3, 0, 2, 4).is_empty());
        assert!(!Rect::new(3, 3, 3, 3).is_empty());
    }

    #[test]
    fn translate_and_points() {
        let r = Rect::new(0, 0, 1, 1) + Point::new(2, 3);
        assert_eq!(r, Rect::new(2, 3, 3, 4));
        assert!(r.contains(Point::new(3, 4)));
        assert!(!r.contains(Point::new(4, 4)));
        assert_eq!(Point::new(1, 2) - Point::new(1, 1), Point::new(0, 1));
        assert_eq!(Size::new(-3, 4).area(), 0);
    }

    #[test]
    fn extents_of_extreme_rects_saturate() {
        let r = Rect::new(i32::MIN, i32::MAX, i32::MAX, i32::MIN);
        assert_eq!(r.width(), i32::MAX);
        assert_eq!(r.height(), i32::MIN);
        assert!(r.is_empty());
        assert_eq!(r.size(), Size::new(i32::MAX, 0));
    }
}
