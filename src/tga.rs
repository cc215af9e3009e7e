// Uncompressed true-color TGA (image type 2).
//
// Layout written:
//   bytes 0..3   = 0, 0, 2        (no id field, no color map, true-color)
//   bytes 3..12  = 0
//   bytes 12..14 = width, little-endian
//   bytes 14..16 = height, little-endian
//   byte  16     = 24 or 32 bits per pixel
//   byte  17     = 0x20           (rows stored top-down)
// followed by B,G,R[,A] pixels row by row. No footer.

use std::io::{self, Read, Write};

use log::warn;

use crate::buffer::{Buffer, PixelLayout};
use crate::error::{Error, Result};
use crate::types::Size;

pub const HEADER_LEN: usize = 18;

const TRUE_COLOR: u8 = 2;
const TOP_DOWN: u8 = 0x20;

/// Write `buffer` as a 32-bit (`with_alpha`) or 24-bit TGA.
pub fn write<W: Write>(mut out: W, buffer: &Buffer, with_alpha: bool) -> Result<()> {
    let size = buffer.size();
    let (w, h) = match (u16::try_from(size.w), u16::try_from(size.h)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(Error::Tga(format!("{size} exceeds the 65535 pixel limit"))),
    };
    let layout = if with_alpha { PixelLayout::Bgra } else { PixelLayout::Bgr };

    let mut header = [0u8; HEADER_LEN];
    header[2] = TRUE_COLOR;
    header[12..14].copy_from_slice(&w.to_le_bytes());
    header[14..16].copy_from_slice(&h.to_le_bytes());
    header[16] = (layout.channels() * 8) as u8;
    header[17] = TOP_DOWN;

    out.write_all(&header)?;
    out.write_all(&buffer.to_bytes(layout))?;
    out.flush()?;
    Ok(())
}

/// Read a 24- or 32-bit uncompressed TGA. 24-bit pixels load opaque.
/// Bottom-up files are flipped so row 0 is always the top row.
pub fn read<R: Read>(mut input: R) -> Result<Buffer> {
    let mut header = [0u8; HEADER_LEN];
    input.read_exact(&mut header).map_err(|e| truncated(e, "header"))?;

    if header[1] != 0 || header[2] != TRUE_COLOR {
        return Err(Error::Tga(format!(
            "only uncompressed true-color images are supported (color map {}, image type {})",
            header[1], header[2]
        )));
    }

    // Optional image id field sits between the header and the pixels.
    let id_len = header[0] as u64;
    if id_len > 0 {
        io::copy(&mut input.by_ref().take(id_len), &mut io::sink())?;
    }

    let w = u16::from_le_bytes([header[12], header[13]]) as i32;
    let h = u16::from_le_bytes([header[14], header[15]]) as i32;
    let layout = match header[16] {
        24 => PixelLayout::Bgr,
        32 => PixelLayout::Bgra,
        bpp => return Err(Error::Tga(format!("unsupported pixel depth: {bpp} bits"))),
    };
    let size = Size::new(w, h);

    // Grow with what the stream actually holds; the header alone may claim 16 GiB.
    let expected = size.area() * layout.channels();
    let mut data = Vec::new();
    input.by_ref().take(expected as u64).read_to_end(&mut data)?;
    if data.len() != expected {
        return Err(Error::Tga(format!(
            "truncated pixel data: {} of {expected} bytes",
            data.len()
        )));
    }

    if header[17] & TOP_DOWN == 0 {
        warn!("bottom-up TGA ({size}), flipping rows");
        data = flip_rows(&data, w as usize * layout.channels());
    }

    Buffer::from_bytes(size, layout, &data)
        .ok_or_else(|| Error::Tga(format!("pixel data does not match {size}")))
}

fn truncated(e: io::Error, what: &str) -> Error {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        Error::Tga(format!("truncated {what}"))
    } else {
        Error::Io(e)
    }
}

fn flip_rows(data: &[u8], row_len: usize) -> Vec<u8> {
    if row_len == 0 {
        return data.to_vec();
    }
    data.chunks_exact(row_len).rev().flatten().copied().collect()
}
