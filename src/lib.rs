//! gifsplit turns animated GIFs into standalone, fully composited frames.
//!
//! A GIF frame only stores the pixels that changed, and each frame carries a
//! disposal method saying what happens to its pixels before the next frame
//! is drawn. Reconstructing what a viewer sees at frame `k` therefore means
//! replaying frames `0..=k` in order on a shared canvas.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: GIF bytes -> [`DecodedGif`] (logical screen + [`FrameRecord`]s)
//! 2. **Select**: [`SelectionSpec`] -> ascending, de-duplicated frames ([`select`])
//! 3. **Composite**: walk the frames forward on a [`CanvasBuffer`] ([`CompositeWalk`])
//! 4. **Encode**: hand each canvas to a [`FrameEncoder`] (PNG by default)
//!
//! [`convert_gif`] runs all four steps for one input and [`convert_batch`]
//! runs several inputs sequentially. Every step either succeeds for the whole
//! job or fails it; there is no per-frame partial output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod decode;
mod encode;
mod foundation;
mod pipeline;
mod select;

pub use compose::canvas::{CanvasBuffer, Rgba8, over};
pub use compose::compositor::{CompositeWalk, Snapshots, composite, composite_with};
pub use compose::disposal::{
    DisposalAction, RestorePrevious, disposal_action, disposal_action_with,
};
pub use decode::gif_stream::{DecodedGif, decode_gif, decode_gif_file, decode_gif_reader};
pub use encode::manifest::{FrameManifest, ManifestEntry, manifest_file_name};
pub use encode::png::{PngEncoder, frame_file_name};
pub use encode::{FrameEncoder, RawEncoder};
pub use foundation::core::{Canvas, FrameRect};
pub use foundation::error::{GifSplitError, GifSplitResult};
pub use foundation::frame::{DisposalMethod, FrameRecord};
pub use pipeline::batch::{
    BATCH_COLLECTED, BATCH_CONVERT_SPAN, BatchFailure, BatchItem, BatchJob, BatchReport,
    convert_batch,
};
pub use pipeline::convert::{ConvertOpts, Conversion, EncodedFrame, convert_frames, convert_gif};
pub use pipeline::progress::{
    PROGRESS_CANVAS_READY, PROGRESS_COMPLETE, PROGRESS_DECODED, PROGRESS_FRAMES_DONE,
    PROGRESS_PARSE, PROGRESS_SELECTED, frame_progress,
};
pub use select::range::{RangeParse, SelectionSpec, parse_range, select};
