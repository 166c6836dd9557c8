use crate::{
    foundation::core::Canvas,
    foundation::error::{DeskError, DeskResult},
    foundation::palette::Color,
    surface::bitmap::Bitmap,
};

/// Decode encoded image bytes and quantize them to the 8-bit palette.
///
/// Alpha is dropped; wallpapers are opaque.
pub fn decode_bitmap(bytes: &[u8]) -> DeskResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| DeskError::decode(format!("decode image from memory: {e}")))?;
    Ok(quantize(&dyn_img.to_rgb8()))
}

/// Decode and pre-scale to exactly `target` with nearest-neighbour sampling.
pub fn decode_bitmap_scaled(bytes: &[u8], target: Canvas) -> DeskResult<Bitmap> {
    if target.width == 0 || target.height == 0 {
        return Err(DeskError::decode("scale target must be non-empty"));
    }
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| DeskError::decode(format!("decode image from memory: {e}")))?;
    let scaled = image::imageops::resize(
        &dyn_img.to_rgb8(),
        target.width,
        target.height,
        image::imageops::FilterType::Nearest,
    );
    Ok(quantize(&scaled))
}

fn quantize(rgb: &image::RgbImage) -> Bitmap {
    let (width, height) = rgb.dimensions();
    let pixels = rgb
        .pixels()
        .map(|p| Color::from_rgb(p.0[0], p.0[1], p.0[2]).0)
        .collect();
    Bitmap {
        width,
        height,
        pixels,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
