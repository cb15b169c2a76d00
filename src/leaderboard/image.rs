//! Re-encoding of native artwork into a portable raster format.

use crate::common::error::{BridgeError, BridgeResult};
use crate::native::RasterImage;

/// Encode `image` as an 8-bit RGBA PNG.
pub fn encode_png(image: &RasterImage) -> BridgeResult<Vec<u8>> {
    let expected = (image.width as usize)
        .checked_mul(image.height as usize)
        .and_then(|px| px.checked_mul(4))
        .ok_or_else(|| BridgeError::ImageEncoding("image dimensions overflow".into()))?;
    if image.width == 0 || image.height == 0 || image.rgba.len() != expected {
        return Err(BridgeError::ImageEncoding(format!(
            "{}x{} image with {} bytes of pixel data",
            image.width,
            image.height,
            image.rgba.len()
        )));
    }

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, image.width, image.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|err| BridgeError::ImageEncoding(err.to_string()))?;
        writer
            .write_image_data(&image.rgba)
            .map_err(|err| BridgeError::ImageEncoding(err.to_string()))?;
        writer
            .finish()
            .map_err(|err| BridgeError::ImageEncoding(err.to_string()))?;
    }
    Ok(out)
}
