// The pixel grid: a row-major Vec<Color> of exactly width * height entries.
// Out-of-range access never fails: reads return `Color::NO_ALPHA`, writes are
// dropped, and geometry is clamped before any raw index is computed.

use log::debug;

use crate::color::Color;
use crate::types::{Point, Rect, Size};

/// Byte order of one pixel when exporting or importing raw channel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    Rgb,
    Rgba,
    Bgr,
    Bgra,
}

impl PixelLayout {
    /// Bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Rgb | PixelLayout::Bgr => 3,
            PixelLayout::Rgba | PixelLayout::Bgra => 4,
        }
    }

    pub fn has_alpha(self) -> bool {
        self.channels() == 4
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Buffer {
    pub(crate) size: Size,       // negative extents are stored as zero
    pub(crate) colors: Vec<Color>, // length = size.area(), row-major
}

// One contiguous run copied by the rect copy routines.
struct Span {
    src: usize,
    dst: usize,
    len: usize,
}

impl Buffer {
    /// A `size` grid filled with `color`.
    pub fn new(size: Size, color: Color) -> Self {
        let mut buffer = Self::default();
        buffer.reset(size, color);
        buffer
    }

    /// Replace the whole grid: new dimensions, every pixel set to `color`.
    pub fn reset(&mut self, size: Size, color: Color) {
        self.size = Size::new(size.w.max(0), size.h.max(0));
        self.reset_fill(color);
    }

    /// Refill the grid with `color`, keeping the current size.
    pub fn reset_fill(&mut self, color: Color) {
        self.colors.clear();
        self.colors.resize(self.size.area(), color);
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The whole grid as an inclusive rect (empty for a 0x0 buffer).
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size)
    }

    /// Row-major pixel storage.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.size.w && p.y >= 0 && p.y < self.size.h
    }

    // Only valid for in-bounds points.
    #[inline]
    pub(crate) fn index(&self, p: Point) -> usize {
        (p.y * self.size.w + p.x) as usize
    }

    /// Color at `p`, or `Color::NO_ALPHA` when `p` is off the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Color {
        if self.in_bounds(p) {
            self.colors[self.index(p)]
        } else {
            Color::NO_ALPHA
        }
    }

    /// Write `color` at `p`; ignored when `p` is off the grid.
    #[inline]
    pub fn set(&mut self, p: Point, color: Color) {
        if self.in_bounds(p) {
            let idx = self.index(p);
            self.colors[idx] = color;
        }
    }

    /// Move `p` to the nearest pixel of the grid, one axis at a time.
    pub fn clamp_point(&self, p: Point) -> Point {
        Point::new(
            p.x.max(0).min(self.size.w - 1),
            p.y.max(0).min(self.size.h - 1),
        )
    }

    /// Clamp each edge on its own: `left`/`top` into `0..=w`/`0..=h`,
    /// `right`/`bottom` into `-1..=w-1`/`-1..=h-1`. A rect lying entirely off
    /// one side comes back empty rather than squashed onto the border, and the
    /// result always has small extents whatever the input corners were.
    pub fn clamp_rect(&self, r: Rect) -> Rect {
        let Size { w, h } = self.size;
        Rect::new(
            r.left.clamp(0, w),
            r.top.clamp(0, h),
            r.right.clamp(-1, w - 1),
            r.bottom.clamp(-1, h - 1),
        )
    }

    /* ---------- raw channel export / import ---------- */

    /// Every pixel packed as bytes in `layout` order, row-major.
    pub fn to_bytes(&self, layout: PixelLayout) -> Vec<u8> {
        let n = layout.channels();
        let mut out = Vec::with_capacity(self.colors.len() * n);
        for c in &self.colors {
            let px = match layout {
                PixelLayout::Rgb | PixelLayout::Rgba => c.to_rgba8(),
                PixelLayout::Bgr | PixelLayout::Bgra => c.to_bgra8(),
            };
            out.extend_from_slice(&px[..n]);
        }
        out
    }

    /// Build a buffer from packed bytes. Returns `None` if `data` does not hold
    /// exactly `size.area()` pixels. Three-channel layouts decode opaque.
    pub fn from_bytes(size: Size, layout: PixelLayout, data: &[u8]) -> Option<Self> {
        let n = layout.channels();
        if size.w < 0 || size.h < 0 || data.len() != size.area() * n {
            return None;
        }
        let colors = data
            .chunks_exact(n)
            .map(|px| match layout {
                PixelLayout::Rgb | PixelLayout::Rgba => Color::from_rgba8(px),
                PixelLayout::Bgr | PixelLayout::Bgra => Color::from_bgra8(px),
            })
            .collect();
        Some(Self { size, colors })
    }

    /* ---------- rect copies ---------- */

    /// Copy `src` of `from` into `dst` of this buffer, row by row.
    /// The rects should have the same extent; the common overlap is copied.
    /// Pixels that would fall outside either grid are skipped.
    pub fn copy_rect_from_buffer(&mut self, dst: Rect, src: Rect, from: &Buffer) {
        let spans = copy_spans(dst, self.size, src, from.size);
        for s in &spans {
            self.colors[s.dst..s.dst + s.len].copy_from_slice(&from.colors[s.src..s.src + s.len]);
        }
        debug!("copied {} rows from {src} into {dst}", spans.len());
    }

    /// Copy `src` to `dst` inside this buffer. Rows are visited bottom-up when
    /// moving content down so overlapping rects copy correctly.
    pub fn copy_rect_within(&mut self, dst: Rect, src: Rect) {
        let spans = copy_spans(dst, self.size, src, self.size);
        let forward = dst.top <= src.top;
        let mut copy = |s: &Span| self.colors.copy_within(s.src..s.src + s.len, s.dst);
        if forward {
            spans.iter().for_each(&mut copy);
        } else {
            spans.iter().rev().for_each(&mut copy);
        }
    }

    /// A new buffer holding the clamped `rect` of this one.
    /// Visual: the image cut down to that window, its top-left moved to the origin.
    pub fn crop(&self, rect: Rect) -> Buffer {
        let r = self.clamp_rect(rect);
        let mut out = Buffer::new(r.size(), Color::NO_ALPHA);
        if !r.is_empty() {
            out.copy_rect_from_buffer(r.normal(), r, self);
        }
        out
    }
}

// Row runs for copying `src` (in a grid of `src_size`) onto `dst` (in a grid
// of `dst_size`), clipped so both ends stay on their grids.
// Offsets are worked out in i64: rect corners may be anywhere in i32.
fn copy_spans(dst: Rect, dst_size: Size, src: Rect, src_size: Size) -> Vec<Span> {
    let (sl, st, dl, dt) = (src.left as i64, src.top as i64, dst.left as i64, dst.top as i64);
    let (sw, sh) = (src_size.w as i64, src_size.h as i64);
    let (dw, dh) = (dst_size.w as i64, dst_size.h as i64);

    let w = (dst.right as i64 - dl + 1).min(src.right as i64 - sl + 1);
    let h = (dst.bottom as i64 - dt + 1).min(src.bottom as i64 - st + 1);

    let x0 = 0.max(-sl).max(-dl);
    let x1 = w.min(sw - sl).min(dw - dl);
    let y0 = 0.max(-st).max(-dt);
    let y1 = h.min(sh - st).min(dh - dt);

    if x1 <= x0 || y1 <= y0 {
        return Vec::new();
    }

    (y0..y1)
        .map(|dy| Span {
            src: ((st + dy) * sw + sl + x0) as usize,
            dst: ((dt + dy) * dw + dl + x0) as usize,
            len: (x1 - x0) as usize,
        })
        .collect()
}
