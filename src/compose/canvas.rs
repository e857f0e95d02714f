use crate::foundation::{
    core::{Canvas, FrameRect},
    error::{GifSplitError, GifSplitResult},
};

/// Straight-alpha RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Full-screen straight-alpha RGBA8 pixel buffer.
///
/// Owned by one compositing job at a time; every drawing call clips to the
/// logical screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasBuffer {
    canvas: Canvas,
    data: Vec<u8>,
}

impl CanvasBuffer {
    /// A fully transparent buffer covering `canvas`.
    pub fn transparent(canvas: Canvas) -> Self {
        Self {
            canvas,
            data: vec![0; canvas.byte_len()],
        }
    }

    /// Screen size of the buffer.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// Packed RGBA8 rows, top to bottom.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let i = self.offset(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Reset the pixels inside `rect` to transparent.
    pub fn clear_rect(&mut self, rect: FrameRect) {
        let clip = rect.clip_to(self.canvas);
        if clip.is_empty() {
            return;
        }
        let row_bytes = clip.width as usize * 4;
        for y in clip.top..clip.bottom() {
            let start = self.offset(clip.left, y);
            self.data[start..start + row_bytes].fill(0);
        }
    }

    /// Draw a `rect`-sized RGBA8 patch at `rect`'s offset using source-over.
    ///
    /// Opaque source pixels replace the destination and fully transparent ones
    /// leave it untouched. Parts of the patch outside the canvas are dropped.
    pub fn draw_patch(&mut self, rect: FrameRect, patch: &[u8]) -> GifSplitResult<()> {
        if patch.len() != rect.area() * 4 {
            return Err(GifSplitError::validation(format!(
                "draw_patch expects {} bytes for {}x{}, got {}",
                rect.area() * 4,
                rect.width,
                rect.height,
                patch.len()
            )));
        }
        let clip = rect.clip_to(self.canvas);
        if clip.is_empty() {
            return Ok(());
        }

        let src_stride = rect.width as usize * 4;
        let row_bytes = clip.width as usize * 4;
        let src_col = (clip.left - rect.left) as usize * 4;
        for y in clip.top..clip.bottom() {
            let src_start = (y - rect.top) as usize * src_stride + src_col;
            let src_row = &patch[src_start..src_start + row_bytes];
            let dst_start = self.offset(clip.left, y);
            let dst_row = &mut self.data[dst_start..dst_start + row_bytes];
            for (d, s) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
                let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
                d.copy_from_slice(&out);
            }
        }
        Ok(())
    }

    /// Copy the pixels inside `rect` (clipped) into a packed buffer.
    pub fn read_region(&self, rect: FrameRect) -> Vec<u8> {
        let clip = rect.clip_to(self.canvas);
        let row_bytes = clip.width as usize * 4;
        let mut out = Vec::with_capacity(clip.area() * 4);
        for y in clip.top..clip.bottom() {
            let start = self.offset(clip.left, y);
            out.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        out
    }

    /// Overwrite the pixels inside `rect` (clipped) with a buffer previously
    /// returned by [`CanvasBuffer::read_region`] for the same rectangle.
    pub fn write_region(&mut self, rect: FrameRect, pixels: &[u8]) -> GifSplitResult<()> {
        let clip = rect.clip_to(self.canvas);
        if pixels.len() != clip.area() * 4 {
            return Err(GifSplitError::validation(format!(
                "write_region expects {} bytes, got {}",
                clip.area() * 4,
                pixels.len()
            )));
        }
        let row_bytes = clip.width as usize * 4;
        for (row, y) in (clip.top..clip.bottom()).enumerate() {
            let start = self.offset(clip.left, y);
            let src = &pixels[row * row_bytes..(row + 1) * row_bytes];
            self.data[start..start + row_bytes].copy_from_slice(src);
        }
        Ok(())
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4
    }
}

/// Straight-alpha source-over.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let sa = u16::from(sa);
            let inv = 255 - sa;
            let da = u16::from(mul_div255(u16::from(dst[3]), inv));
            let out_a = sa + da;
            let mut out = [0u8; 4];
            for i in 0..3 {
                let num = u32::from(src[i]) * u32::from(sa) + u32::from(dst[i]) * u32::from(da);
                out[i] = ((num + u32::from(out_a) / 2) / u32::from(out_a)) as u8;
            }
            out[3] = out_a.min(255) as u8;
            out
        }
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/compose/canvas.rs"]
mod tests;
