use std::{
    fs::File,
    io::{BufReader, Cursor, Read},
    path::Path,
};

use anyhow::Context as _;

use crate::foundation::{
    core::{Canvas, FrameRect},
    error::{GifSplitError, GifSplitResult},
    frame::{DisposalMethod, FrameRecord},
};

/// Frames and logical screen of one decoded GIF.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedGif {
    /// Logical screen size.
    pub screen: Canvas,
    /// Frames in decode order; `frames[i].original_index == i`.
    pub frames: Vec<FrameRecord>,
}

/// Decode an in-memory GIF into RGBA frame patches.
pub fn decode_gif(bytes: &[u8]) -> GifSplitResult<DecodedGif> {
    decode_gif_reader(Cursor::new(bytes))
}

/// Decode a GIF file from disk.
pub fn decode_gif_file(path: &Path) -> GifSplitResult<DecodedGif> {
    let f = File::open(path).with_context(|| format!("open gif '{}'", path.display()))?;
    decode_gif_reader(BufReader::new(f))
}

/// Decode a GIF from any reader.
///
/// A malformed or truncated stream aborts the whole decode; no partial frame
/// list is returned.
#[tracing::instrument(skip(reader))]
pub fn decode_gif_reader<R: Read>(reader: R) -> GifSplitResult<DecodedGif> {
    let mut opts = gif::DecodeOptions::new();
    opts.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = opts.read_info(reader).map_err(decode_error)?;

    let screen = Canvas::new(u32::from(decoder.width()), u32::from(decoder.height()))?;

    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame().map_err(decode_error)? {
        let index = frames.len();
        let rect = FrameRect::new(
            u32::from(frame.left),
            u32::from(frame.top),
            u32::from(frame.width),
            u32::from(frame.height),
        );
        if !rect.fits_within(screen) {
            tracing::warn!(
                index,
                ?rect,
                ?screen,
                "frame extends past the logical screen and will be clipped"
            );
        }
        frames.push(FrameRecord::new(
            index,
            rect,
            frame.buffer.to_vec(),
            disposal_from_gif(frame.dispose),
            frame.delay,
        )?);
    }

    if frames.is_empty() {
        return Err(GifSplitError::empty_input("no frames found in GIF file"));
    }

    tracing::debug!(
        frames = frames.len(),
        width = screen.width,
        height = screen.height,
        "decoded gif"
    );
    Ok(DecodedGif { screen, frames })
}

fn disposal_from_gif(method: gif::DisposalMethod) -> DisposalMethod {
    match method {
        gif::DisposalMethod::Any => DisposalMethod::Unspecified,
        gif::DisposalMethod::Keep => DisposalMethod::Keep,
        gif::DisposalMethod::Background => DisposalMethod::RestoreBackground,
        gif::DisposalMethod::Previous => DisposalMethod::RestorePrevious,
    }
}

fn decode_error(err: gif::DecodingError) -> GifSplitError {
    GifSplitError::decode(err.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/decode/gif_stream.rs"]
mod tests;
