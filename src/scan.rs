// Border scanning and content isolation (auto-crop).
//
// `scan` walks one axis of the grid comparing pixels against a target color.
// `isolate_rect` uses it to pull each edge of a rect inward while that edge is
// nothing but background.

use log::debug;

use crate::buffer::Buffer;
use crate::color::Color;
use crate::types::{Point, Rect, Size};

/// Axis walked by `Buffer::scan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    Horizontal,
    Vertical,
}

/// When a scan stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Succeed at the first pixel matching the target.
    MustFind,
    /// Fail at the first pixel not matching the target.
    MustOnlyFind,
}

/// How a pixel is compared to the target color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchRule {
    /// Component-wise equality.
    #[default]
    Exact,
    /// Equality, or both colors have zero alpha (RGB ignored).
    TransparentMatchesAny,
}

impl MatchRule {
    #[inline]
    pub fn matches(self, pixel: Color, target: Color) -> bool {
        match self {
            MatchRule::Exact => pixel == target,
            MatchRule::TransparentMatchesAny => {
                pixel == target || (pixel.is_transparent() && target.is_transparent())
            }
        }
    }
}

/// Result of a scan: whether it succeeded, and where the cursor stopped.
/// A scan that ran to completion stops at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanHit {
    pub matched: bool,
    pub point: Point,
}

impl Buffer {
    /// Walk from `start` toward `end` along `dir`, one pixel per step; `end`
    /// itself is not examined. Only the coordinate on `dir`'s axis moves, the
    /// other one stays at `start`'s value. Off-grid pixels read as
    /// `Color::NO_ALPHA`.
    pub fn scan(
        &self,
        start: Point,
        end: Point,
        dir: ScanDirection,
        mode: ScanMode,
        target: Color,
        rule: MatchRule,
    ) -> ScanHit {
        let (step, stop) = match dir {
            ScanDirection::Horizontal => (
                Point::new(if start.x <= end.x { 1 } else { -1 }, 0),
                Point::new(end.x, start.y),
            ),
            ScanDirection::Vertical => (
                Point::new(0, if start.y <= end.y { 1 } else { -1 }),
                Point::new(start.x, end.y),
            ),
        };

        let mut cursor = start;
        while cursor != stop {
            let hit = rule.matches(self.get(cursor), target);
            match mode {
                ScanMode::MustFind if hit => return ScanHit { matched: true, point: cursor },
                ScanMode::MustOnlyFind if !hit => {
                    return ScanHit { matched: false, point: cursor };
                }
                _ => {}
            }
            cursor = self.next_scan_point(cursor, step, stop, dir);
        }

        ScanHit {
            matched: mode == ScanMode::MustOnlyFind,
            point: cursor,
        }
    }

    // Off-grid pixels all read NO_ALPHA and give the same answer, so a walk
    // jumps across them to the grid edge or to `stop`.
    fn next_scan_point(&self, cursor: Point, step: Point, stop: Point, dir: ScanDirection) -> Point {
        let Size { w, h } = self.size;
        match dir {
            ScanDirection::Horizontal if (0..h).contains(&cursor.y) => {
                Point::new(next_on_axis(cursor.x, step.x, stop.x, w), cursor.y)
            }
            ScanDirection::Vertical if (0..w).contains(&cursor.x) => {
                Point::new(cursor.x, next_on_axis(cursor.y, step.y, stop.y, h))
            }
            // The fixed coordinate is off the grid: the rest of the walk is too.
            _ => stop,
        }
    }

    // ---------- isolation ----------

    // Whole inclusive row `y` from `left` to `right` is background.
    fn row_is_background(&self, y: i32, left: i32, right: i32, bg: Color, rule: MatchRule) -> bool {
        self.scan(
            Point::new(left, y),
            Point::new(right + 1, y),
            ScanDirection::Horizontal,
            ScanMode::MustOnlyFind,
            bg,
            rule,
        )
        .matched
    }

    // Whole inclusive column `x` from `top` to `bottom` is background.
    fn column_is_background(&self, x: i32, top: i32, bottom: i32, bg: Color, rule: MatchRule) -> bool {
        self.scan(
            Point::new(x, top),
            Point::new(x, bottom + 1),
            ScanDirection::Vertical,
            ScanMode::MustOnlyFind,
            bg,
            rule,
        )
        .matched
    }

    /// Shrink `rect` until every edge touches a non-background pixel.
    ///
    /// The rect is clamped to the grid first, then the top, left, bottom and
    /// right edges move inward in that order, each phase using the edges left
    /// by the previous ones. Edges never cross: if the clamped rect holds only
    /// background (or is already empty) the result is an empty rect anchored at
    /// the clamped top-left corner.
    pub fn isolate_rect(&self, rect: Rect, background: Color, rule: MatchRule) -> Rect {
        let mut r = self.clamp_rect(rect);
        let empty = Rect::empty_at(r.top_left());
        if r.is_empty() {
            return empty;
        }

        while r.top <= r.bottom && self.row_is_background(r.top, r.left, r.right, background, rule) {
            r.top += 1;
        }
        if r.top > r.bottom {
            debug!("isolate_rect: {rect} holds only background");
            return empty;
        }

        // A non-background pixel now sits on the top row, so the remaining
        // phases always stop before their edges meet.
        while r.left < r.right && self.column_is_background(r.left, r.top, r.bottom, background, rule) {
            r.left += 1;
        }
        while r.bottom > r.top && self.row_is_background(r.bottom, r.left, r.right, background, rule) {
            r.bottom -= 1;
        }
        while r.right > r.left && self.column_is_background(r.right, r.top, r.bottom, background, rule) {
            r.right -= 1;
        }

        debug!("isolate_rect: {rect} -> {r}");
        r
    }

    /// True if every on-grid pixel of `rect` is `background`. Parts of `rect`
    /// outside the grid are ignored; an empty rect is trivially empty.
    pub fn is_rect_empty(&self, rect: Rect, background: Color, rule: MatchRule) -> bool {
        let r = self.clamp_rect(rect);
        if r.is_empty() {
            return true;
        }
        (r.top..=r.bottom).all(|y| self.row_is_background(y, r.left, r.right, background, rule))
    }
}

// Next position along one axis. `pos` never equals `stop` here.
fn next_on_axis(pos: i32, step: i32, stop: i32, len: i32) -> i32 {
    if (0..len).contains(&pos) {
        pos + step
    } else if pos < 0 && step > 0 {
        stop.min(0)
    } else if pos >= len && step < 0 {
        (len - 1).max(stop)
    } else {
        // Heading away from the grid.
        stop
    }
}
