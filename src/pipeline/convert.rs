use crate::{
    compose::{compositor::CompositeWalk, disposal::RestorePrevious},
    decode::gif_stream::{DecodedGif, decode_gif},
    encode::FrameEncoder,
    foundation::{
        core::Canvas,
        error::{GifSplitError, GifSplitResult},
    },
    pipeline::progress::{
        PROGRESS_CANVAS_READY, PROGRESS_COMPLETE, PROGRESS_DECODED, PROGRESS_FRAMES_DONE,
        PROGRESS_PARSE, PROGRESS_SELECTED, ProgressReporter, frame_progress,
    },
    select::range::{SelectionSpec, select},
};

/// Options for one conversion job.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConvertOpts {
    /// Which frames to emit.
    pub selection: SelectionSpec,
    /// How restore-previous disposal is applied.
    pub restore_previous: RestorePrevious,
}

/// One emitted frame: encoder output tagged with its source frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedFrame<T> {
    /// 0-based index of the frame in decode order.
    pub original_index: usize,
    /// Display duration in hundredths of a second.
    pub delay: u16,
    /// Encoder output for the fully composited canvas.
    pub data: T,
}

/// Result of a successful conversion job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion<T> {
    /// Logical screen size every frame was rendered at.
    pub screen: Canvas,
    /// Emitted frames, strictly ascending by `original_index`.
    pub frames: Vec<EncodedFrame<T>>,
}

/// Decode a GIF and convert the selected frames.
///
/// Any decode, compositing or encoding failure aborts the job; no partial
/// output is returned.
pub fn convert_gif<E: FrameEncoder>(
    bytes: &[u8],
    opts: &ConvertOpts,
    encoder: &mut E,
    progress: &mut dyn FnMut(f32),
) -> GifSplitResult<Conversion<E::Output>> {
    let mut progress = ProgressReporter::new(progress);
    progress.report(PROGRESS_PARSE);
    let decoded = decode_gif(bytes)?;
    progress.report(PROGRESS_DECODED);
    convert_with_reporter(&decoded, opts, encoder, &mut progress)
}

/// Convert the selected frames of an already decoded GIF.
pub fn convert_frames<E: FrameEncoder>(
    decoded: &DecodedGif,
    opts: &ConvertOpts,
    encoder: &mut E,
    progress: &mut dyn FnMut(f32),
) -> GifSplitResult<Conversion<E::Output>> {
    let mut progress = ProgressReporter::new(progress);
    convert_with_reporter(decoded, opts, encoder, &mut progress)
}

#[tracing::instrument(skip_all, fields(frames = decoded.frames.len(), selection = ?opts.selection))]
fn convert_with_reporter<E: FrameEncoder>(
    decoded: &DecodedGif,
    opts: &ConvertOpts,
    encoder: &mut E,
    progress: &mut ProgressReporter<'_>,
) -> GifSplitResult<Conversion<E::Output>> {
    let frames = &decoded.frames;
    if frames.is_empty() {
        return Err(GifSplitError::empty_input("no frames to convert"));
    }
    if let Some((pos, f)) = frames
        .iter()
        .enumerate()
        .find(|(pos, f)| f.original_index != *pos)
    {
        return Err(GifSplitError::validation(format!(
            "frame at position {pos} carries original_index {}",
            f.original_index
        )));
    }

    let selected = select(frames, &opts.selection)?;
    progress.report(PROGRESS_SELECTED);

    let mut walk = CompositeWalk::new(frames, decoded.screen, opts.restore_previous)?;
    progress.report(PROGRESS_CANVAS_READY);

    let total = selected.len();
    let mut out = Vec::with_capacity(total);
    for (done, frame) in selected.iter().enumerate() {
        let canvas = walk.advance_to(frame.original_index)?;
        let data = encoder.encode(canvas)?;
        tracing::debug!(
            index = frame.original_index,
            delay = frame.delay,
            "composited frame"
        );
        out.push(EncodedFrame {
            original_index: frame.original_index,
            delay: frame.delay,
            data,
        });
        progress.report(frame_progress(done + 1, total));
    }

    progress.report(PROGRESS_FRAMES_DONE);
    progress.report(PROGRESS_COMPLETE);
    Ok(Conversion {
        screen: decoded.screen,
        frames: out,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/convert.rs"]
mod tests;
