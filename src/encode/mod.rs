pub(crate) mod manifest;
pub(crate) mod png;

use crate::{compose::canvas::CanvasBuffer, foundation::error::GifSplitResult};

/// Sink that turns a composited canvas into the job's output format.
///
/// Called once per selected frame, in ascending frame order.
pub trait FrameEncoder {
    /// Encoded representation of one frame.
    type Output;

    /// Encode one full-screen raster.
    fn encode(&mut self, raster: &CanvasBuffer) -> GifSplitResult<Self::Output>;
}

/// Encoder that hands back a copy of the raw canvas.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawEncoder;

impl FrameEncoder for RawEncoder {
    type Output = CanvasBuffer;

    fn encode(&mut self, raster: &CanvasBuffer) -> GifSplitResult<CanvasBuffer> {
        Ok(raster.clone())
    }
}
