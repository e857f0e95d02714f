use crate::foundation::error::{GifSplitError, GifSplitResult};

/// Logical screen size shared by every frame of an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero-sized screens.
    pub fn new(width: u32, height: u32) -> GifSplitResult<Self> {
        if width == 0 || height == 0 {
            return Err(GifSplitError::validation(format!(
                "logical screen must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered by the canvas.
    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Size in bytes of a packed RGBA8 buffer covering the canvas.
    pub fn byte_len(self) -> usize {
        self.pixel_count() * 4
    }

    /// Rectangle covering the whole canvas.
    pub fn full_rect(self) -> FrameRect {
        FrameRect::new(0, 0, self.width, self.height)
    }
}

/// Offset and size of a frame patch inside the logical screen.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameRect {
    /// Left edge in canvas pixels.
    pub left: u32,
    /// Top edge in canvas pixels.
    pub top: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameRect {
    /// Build a rectangle from its offset and size.
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(self) -> u32 {
        self.left.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> u32 {
        self.top.saturating_add(self.height)
    }

    /// Whether the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered.
    pub fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `(x, y)` lies inside the rectangle.
    pub fn contains(self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }

    /// Whether the rectangle lies entirely inside `canvas`.
    pub fn fits_within(self, canvas: Canvas) -> bool {
        self.right() <= canvas.width && self.bottom() <= canvas.height
    }

    /// The part of the rectangle that lies inside `canvas` (possibly empty).
    pub fn clip_to(self, canvas: Canvas) -> FrameRect {
        let left = self.left.min(canvas.width);
        let top = self.top.min(canvas.height);
        let right = self.right().min(canvas.width);
        let bottom = self.bottom().min(canvas.height);
        FrameRect {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
