use crate::foundation::{
    core::FrameRect,
    error::{GifSplitError, GifSplitResult},
};

/// What happens to a frame's pixels before the next frame is drawn.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DisposalMethod {
    /// No disposal specified (code 0). Behaves like [`DisposalMethod::Keep`].
    #[default]
    Unspecified,
    /// Leave the frame in place (code 1).
    Keep,
    /// Clear the frame's rectangle to transparent (code 2).
    RestoreBackground,
    /// Restore the frame's rectangle to what it held before the frame (code 3).
    RestorePrevious,
}

impl DisposalMethod {
    /// Map a raw graphic-control disposal code. Reserved codes (4..=7) are
    /// treated as unspecified.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Keep,
            2 => Self::RestoreBackground,
            3 => Self::RestorePrevious,
            _ => Self::Unspecified,
        }
    }

    /// Raw disposal code.
    pub fn code(self) -> u8 {
        match self {
            Self::Unspecified => 0,
            Self::Keep => 1,
            Self::RestoreBackground => 2,
            Self::RestorePrevious => 3,
        }
    }
}

/// One decoded animation frame.
///
/// Produced once by the decoder and read-only afterwards. `patch` holds packed
/// straight-alpha RGBA8 pixels for `rect` only, not for the full canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRecord {
    /// 0-based position in decode order.
    pub original_index: usize,
    /// Pixels of the frame's sub-rectangle, `rect.width * rect.height * 4` bytes.
    pub patch: Vec<u8>,
    /// Where `patch` sits on the canvas.
    pub rect: FrameRect,
    /// Disposal applied before the next frame is drawn.
    pub disposal: DisposalMethod,
    /// Display duration in hundredths of a second.
    pub delay: u16,
}

impl FrameRecord {
    /// Build a frame record, checking that `patch` matches `rect`.
    pub fn new(
        original_index: usize,
        rect: FrameRect,
        patch: Vec<u8>,
        disposal: DisposalMethod,
        delay: u16,
    ) -> GifSplitResult<Self> {
        let expected = rect.area() * 4;
        if patch.len() != expected {
            return Err(GifSplitError::validation(format!(
                "frame {original_index}: patch has {} bytes, expected {expected} for {}x{}",
                patch.len(),
                rect.width,
                rect.height
            )));
        }
        Ok(Self {
            original_index,
            patch,
            rect,
            disposal,
            delay,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/frame.rs"]
mod tests;
