// Crate error type. Drawing, scanning and copying never fail (bad geometry is
// clamped or ignored), so every variant here comes from file or codec work.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Opening or creating a file failed.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing an already open stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or truncated TGA data.
    #[error("TGA error: {0}")]
    Tga(String),

    /// The PNG codec refused the data; `filename` is empty for in-memory work.
    #[error("PNG error in {filename}: {message}")]
    Png { filename: String, message: String },

    /// No handler for this file extension.
    #[error("unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    // Attach a filename to a codec failure that was raised without one.
    pub(crate) fn with_filename(self, name: &str) -> Self {
        match self {
            Error::Png { filename, message } if filename.is_empty() => Error::Png {
                filename: name.to_string(),
                message,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_error_names_the_file() {
        let err = Error::Png {
            filename: String::new(),
            message: "bad signature".into(),
        }
        .with_filename("logo.png");
        assert_eq!(err.to_string(), "PNG error in logo.png: bad signature");
    }

    #[test]
    fn with_filename_keeps_other_variants() {
        let err = Error::Tga("truncated pixel data".into()).with_filename("x.tga");
        assert!(matches!(err, Error::Tga(_)));
    }
}
