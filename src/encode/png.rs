use image::ImageEncoder as _;

use crate::{
    compose::canvas::CanvasBuffer,
    encode::FrameEncoder,
    foundation::error::{GifSplitError, GifSplitResult},
};

/// Encodes each composited canvas as a standalone RGBA PNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngEncoder;

impl FrameEncoder for PngEncoder {
    type Output = Vec<u8>;

    fn encode(&mut self, raster: &CanvasBuffer) -> GifSplitResult<Vec<u8>> {
        let mut out = Vec::with_capacity(raster.as_bytes().len() / 4);
        image::codecs::png::PngEncoder::new(&mut out)
            .write_image(
                raster.as_bytes(),
                raster.width(),
                raster.height(),
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| GifSplitError::encode(format!("png: {e}")))?;
        Ok(out)
    }
}

/// File name for an emitted frame: `{base}_frame_{n:04}.png` with a 1-based `n`.
pub fn frame_file_name(base: &str, original_index: usize) -> String {
    format!("{base}_frame_{:04}.png", original_index + 1)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
