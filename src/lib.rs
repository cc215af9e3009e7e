//! In-memory raster buffers of float RGBA colors.
//!
//! A [`Buffer`] is a row-major grid with bounds-safe pixel access, clamped
//! line/rect drawing, border scanning and content isolation (auto-crop),
//! rect copies between buffers, whole-grid color passes, and TGA/PNG files.
//!
//! Geometry is never an error: off-grid reads return [`Color::NO_ALPHA`],
//! off-grid writes are dropped and rects are clamped. Only file and codec work
//! returns [`Result`].

pub mod buffer;
pub mod codec;
pub mod color;
mod draw;
pub mod error;
pub mod io;
pub mod scan;
pub mod tga;
mod tone;
pub mod types;

pub use buffer::{Buffer, PixelLayout};
pub use codec::{Codec, PngCodec, RawImage};
pub use color::Color;
pub use error::{Error, Result};
pub use io::{ImageFormat, SaveOptions};
pub use scan::{MatchRule, ScanDirection, ScanHit, ScanMode};
pub use types::{Point, Rect, Size};
