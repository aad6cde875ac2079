//! Image decode/encode helpers.

use std::path::Path;

use image::{ImageFormat, ImageReader, RgbaImage};

use crate::error::KnockoutError;

/// Decode the image at `path` into an RGBA8 buffer.
///
/// Sources without an alpha channel come back fully opaque.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, KnockoutError> {
    let reader = ImageReader::open(path).map_err(|source| KnockoutError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let img = reader.decode().map_err(|source| KnockoutError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

/// Encode `img` as PNG at `path`, replacing any existing file.
pub fn save_png(path: &Path, img: &RgbaImage) -> Result<(), KnockoutError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| KnockoutError::Write {
            path: path.to_path_buf(),
            source,
        })
}
