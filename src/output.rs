//! PNG input and output

use image::{ImageFormat, RgbaImage};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for reading and writing asset files
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Image decoding or encoding error
    #[error("{path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl OutputError {
    fn io(path: &Path, source: io::Error) -> Self {
        OutputError::Io { path: path.to_path_buf(), source }
    }

    fn image(path: &Path, source: image::ImageError) -> Self {
        // Surface plain IO failures (missing file, permissions) as such
        match source {
            image::ImageError::IoError(e) => OutputError::io(path, e),
            other => OutputError::Image { path: path.to_path_buf(), source: other },
        }
    }
}

/// Load an image from disk and convert it to 8-bit RGBA.
///
/// Palette, grey and RGB sources come back fully opaque.
pub fn load_png(path: &Path) -> Result<RgbaImage, OutputError> {
    let image = image::open(path).map_err(|e| OutputError::image(path, e))?;
    Ok(image.into_rgba8())
}

/// Save an RGBA image to a PNG file, creating missing parent directories.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| OutputError::io(parent, e))?;
        }
    }

    image.save_with_format(path, ImageFormat::Png).map_err(|e| OutputError::image(path, e))
}
