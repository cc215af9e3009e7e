// Narrow adapter between the raster engine and an external image codec.
// The engine only ever sees row-major byte rows (RGB or RGBA); everything
// codec-specific lives behind `Codec`, so tests can swap in a fake.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};

use crate::buffer::{Buffer, PixelLayout};
use crate::error::{Error, Result};
use crate::types::Size;

/// Decoded pixels as packed rows, `layout.channels()` bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    pub data: Vec<u8>,
}

impl RawImage {
    /// Pack a buffer as RGBA rows, or RGB rows when `with_alpha` is false.
    pub fn from_buffer(buffer: &Buffer, with_alpha: bool) -> Self {
        let layout = if with_alpha { PixelLayout::Rgba } else { PixelLayout::Rgb };
        let size = buffer.size();
        Self {
            width: size.w as u32,
            height: size.h as u32,
            layout,
            data: buffer.to_bytes(layout),
        }
    }

    /// Unpack into a float buffer; three-channel data decodes opaque.
    pub fn into_buffer(self) -> Result<Buffer> {
        let (w, h) = match (i32::try_from(self.width), i32::try_from(self.height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(png_error(format!("image too large: {}x{}", self.width, self.height))),
        };
        Buffer::from_bytes(Size::new(w, h), self.layout, &self.data).ok_or_else(|| {
            png_error(format!(
                "{} bytes of pixel data do not fill {w}x{h} {:?}",
                self.data.len(),
                self.layout
            ))
        })
    }
}

/// Byte-level image codec.
pub trait Codec {
    fn decode(&self, bytes: &[u8]) -> Result<RawImage>;
    fn encode(&self, image: &RawImage) -> Result<Vec<u8>>;
}

/// PNG through the `image` crate. Decodes 8-bit RGB or RGBA (other color types
/// are converted), encodes RGB8 or RGBA8.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl Codec for PngCodec {
    fn decode(&self, bytes: &[u8]) -> Result<RawImage> {
        let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|e| png_error(e.to_string()))?;

        let raw = if img.color().has_alpha() {
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            RawImage { width, height, layout: PixelLayout::Rgba, data: rgba.into_raw() }
        } else {
            let rgb = img.into_rgb8();
            let (width, height) = rgb.dimensions();
            RawImage { width, height, layout: PixelLayout::Rgb, data: rgb.into_raw() }
        };
        Ok(raw)
    }

    fn encode(&self, image: &RawImage) -> Result<Vec<u8>> {
        let color = match image.layout {
            PixelLayout::Rgb => ExtendedColorType::Rgb8,
            PixelLayout::Rgba => ExtendedColorType::Rgba8,
            other => return Err(png_error(format!("cannot encode {other:?} rows"))),
        };

        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(&image.data, image.width, image.height, color)
            .map_err(|e| png_error(e.to_string()))?;
        Ok(out)
    }
}

// Filename is filled in by the file layer.
fn png_error(message: String) -> Error {
    Error::Png { filename: String::new(), message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::types::{Point, Rect};

    #[test]
    fn png_round_trip_with_alpha() {
        let mut b = Buffer::new(Size::new(3, 2), Color::NO_ALPHA);
        b.fill_rect(Rect::new(1, 0, 2, 1), Color::new(1.0, 0.0, 0.0, 0.6));

        let bytes = PngCodec.encode(&RawImage::from_buffer(&b, true)).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        let back = PngCodec.decode(&bytes).unwrap();
        assert_eq!(back.layout, PixelLayout::Rgba);
        let back = back.into_buffer().unwrap();
        assert_eq!(back.size(), b.size());
        assert_eq!(back.get(Point::new(2, 1)).to_rgba8(), [255, 0, 0, 153]);
        assert_eq!(back.get(Point::ORIGIN), Color::NO_ALPHA);
    }

    #[test]
    fn rgb_png_decodes_opaque() {
        let b = Buffer::new(Size::new(2, 2), Color::new(0.0, 0.0, 1.0, 0.0));
        let bytes = PngCodec.encode(&RawImage::from_buffer(&b, false)).unwrap();
        let back = PngCodec.decode(&bytes).unwrap();
        assert_eq!(back.layout, PixelLayout::Rgb);
        assert_eq!(back.into_buffer().unwrap().get(Point::new(1, 1)), Color::BLUE);
    }

    #[test]
    fn garbage_is_a_png_error() {
        let err = PngCodec.decode(b"definitely not a png").unwrap_err();
        assert!(matches!(err, Error::Png { .. }));
    }

    #[test]
    fn short_raw_data_is_rejected() {
        let raw = RawImage { width: 2, height: 2, layout: PixelLayout::Rgba, data: vec![0; 15] };
        assert!(matches!(raw.into_buffer(), Err(Error::Png { .. })));
    }
}
