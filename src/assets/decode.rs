use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Decoded raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major premultiplied RGBA8 bytes.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Natural size as floating point, for layout.
    pub fn size(&self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }
}

/// Sniff `bytes` and return their image format, rejecting anything that is not an image.
pub fn sniff_image(bytes: &[u8]) -> ReelResult<image::ImageFormat> {
    image::guess_format(bytes)
        .map_err(|_| ReelError::asset("file content is not a recognized image format"))
}

pub fn decode_image(bytes: &[u8]) -> ReelResult<PreparedImage> {
    let format = sniff_image(bytes)?;
    let dyn_img = image::load_from_memory_with_format(bytes, format)
        .with_context(|| format!("decode {format:?} image from memory"))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ReelError::asset("image has zero width or height"));
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Wrap straight-alpha RGBA8 pixels (e.g. a decoded video frame) as a prepared image.
pub fn image_from_straight_rgba8(
    width: u32,
    height: u32,
    mut rgba: Vec<u8>,
) -> ReelResult<PreparedImage> {
    let expected = width as usize * height as usize * 4;
    if expected == 0 || rgba.len() != expected {
        return Err(ReelError::asset(format!(
            "rgba buffer has {} bytes, expected {expected}",
            rgba.len()
        )));
    }
    premultiply_rgba8_in_place(&mut rgba);
    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
