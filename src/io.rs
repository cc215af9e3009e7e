// Save/load entry points. The file extension picks the handler: `.tga` goes
// through the built-in TGA reader/writer, `.png` through a `Codec`.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::info;

use crate::buffer::Buffer;
use crate::codec::{Codec, PngCodec, RawImage};
use crate::error::{Error, Result};
use crate::tga;

/// File formats known to `Buffer::save` / `Buffer::load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Tga,
    Png,
}

impl ImageFormat {
    /// Format from the extension of `path`, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "tga" => Some(ImageFormat::Tga),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ImageFormat::Tga => "TGA",
            ImageFormat::Png => "PNG",
        })
    }
}

/// Options for `Buffer::save`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Write the alpha channel (32-bit TGA / RGBA PNG).
    pub with_alpha: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { with_alpha: true }
    }
}

fn format_of(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))
}

fn open_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Open { path: path.to_path_buf(), source }
}

impl Buffer {
    /// Write to `path`, choosing the format from its extension.
    pub fn save(&self, path: impl AsRef<Path>, options: SaveOptions) -> Result<()> {
        self.save_with(path, options, &PngCodec)
    }

    /// Like `save`, with an explicit codec for PNG files.
    pub fn save_with(&self, path: impl AsRef<Path>, options: SaveOptions, png: &dyn Codec) -> Result<()> {
        let path = path.as_ref();
        let format = format_of(path)?;

        match format {
            ImageFormat::Tga => {
                let file = File::create(path).map_err(open_error(path))?;
                tga::write(BufWriter::new(file), self, options.with_alpha)?;
            }
            ImageFormat::Png => {
                let bytes = png
                    .encode(&RawImage::from_buffer(self, options.with_alpha))
                    .map_err(|e| e.with_filename(&path.display().to_string()))?;
                fs::write(path, bytes).map_err(open_error(path))?;
            }
        }

        info!("saved {} {format} to {}", self.size(), path.display());
        Ok(())
    }

    /// Read a buffer from `path`, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Buffer> {
        Self::load_with(path, &PngCodec)
    }

    /// Like `load`, with an explicit codec for PNG files.
    pub fn load_with(path: impl AsRef<Path>, png: &dyn Codec) -> Result<Buffer> {
        let path = path.as_ref();
        let format = format_of(path)?;

        let buffer = match format {
            ImageFormat::Tga => {
                let file = File::open(path).map_err(open_error(path))?;
                tga::read(BufReader::new(file))?
            }
            ImageFormat::Png => {
                let bytes = fs::read(path).map_err(open_error(path))?;
                png.decode(&bytes)
                    .and_then(RawImage::into_buffer)
                    .map_err(|e| e.with_filename(&path.display().to_string()))?
            }
        };

        info!("loaded {} {format} from {}", buffer.size(), path.display());
        Ok(buffer)
    }
}
