//! Canvas reconstruction across disposal history.
//!
//! The canvas for frame `k` depends on every frame `0..k` in order, so frames
//! are always walked forward. [`CompositeWalk`] keeps the canvas between steps
//! and costs O(n) for any ascending set of targets; [`composite`] rebuilds one
//! target from a transparent canvas.

use crate::{
    compose::{
        canvas::CanvasBuffer,
        disposal::{DisposalAction, RestorePrevious, disposal_action_with},
    },
    foundation::{
        core::Canvas,
        error::{GifSplitError, GifSplitResult},
        frame::FrameRecord,
    },
};

/// Rebuild the canvas as it looks once frame `target` has been drawn.
///
/// Restore-previous frames are treated as clears; see [`composite_with`].
pub fn composite(
    frames: &[FrameRecord],
    screen: Canvas,
    target: usize,
) -> GifSplitResult<CanvasBuffer> {
    composite_with(frames, screen, target, RestorePrevious::default())
}

/// [`composite`] with an explicit restore-previous policy.
pub fn composite_with(
    frames: &[FrameRecord],
    screen: Canvas,
    target: usize,
    policy: RestorePrevious,
) -> GifSplitResult<CanvasBuffer> {
    let mut walk = CompositeWalk::new(frames, screen, policy)?;
    walk.advance_to(target)?;
    Ok(walk.into_canvas())
}

/// Forward-only compositor that owns the canvas for one job.
///
/// Each [`step`](Self::step) applies the previous frame's disposal and draws
/// the next frame's patch.
#[derive(Debug)]
pub struct CompositeWalk<'a> {
    frames: &'a [FrameRecord],
    canvas: CanvasBuffer,
    policy: RestorePrevious,
    drawn: Option<usize>,
    // Pixels under the last drawn frame, kept only for snapshot restores.
    saved: Option<Vec<u8>>,
}

impl<'a> CompositeWalk<'a> {
    /// Start a walk on a transparent canvas. Fails on an empty frame list.
    pub fn new(
        frames: &'a [FrameRecord],
        screen: Canvas,
        policy: RestorePrevious,
    ) -> GifSplitResult<Self> {
        if frames.is_empty() {
            return Err(GifSplitError::empty_input("no frames to composite"));
        }
        Ok(Self {
            frames,
            canvas: CanvasBuffer::transparent(screen),
            policy,
            drawn: None,
            saved: None,
        })
    }

    /// Number of frames in the walk.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; a walk cannot be built over zero frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the most recently drawn frame.
    pub fn current(&self) -> Option<usize> {
        self.drawn
    }

    /// Current canvas contents.
    pub fn canvas(&self) -> &CanvasBuffer {
        &self.canvas
    }

    /// Give up the walk and keep its canvas.
    pub fn into_canvas(self) -> CanvasBuffer {
        self.canvas
    }

    /// Draw the next frame. Returns its index, or `None` once every frame
    /// has been drawn.
    pub fn step(&mut self) -> GifSplitResult<Option<usize>> {
        let next = self.drawn.map_or(0, |i| i + 1);
        if next >= self.frames.len() {
            return Ok(None);
        }
        if let Some(prev) = self.drawn {
            self.dispose(prev)?;
        }

        let frames = self.frames;
        let frame = &frames[next];
        self.saved = disposal_action_with(frame, self.policy)
            .needs_snapshot()
            .then(|| self.canvas.read_region(frame.rect));
        self.canvas.draw_patch(frame.rect, &frame.patch)?;
        self.drawn = Some(next);
        Ok(Some(next))
    }

    /// Walk forward until frame `target` has been drawn.
    ///
    /// Fails with [`GifSplitError::IndexOutOfRange`] past the last frame and
    /// refuses to go backwards.
    pub fn advance_to(&mut self, target: usize) -> GifSplitResult<&CanvasBuffer> {
        if target >= self.frames.len() {
            return Err(GifSplitError::index_out_of_range(target, self.frames.len()));
        }
        if let Some(drawn) = self.drawn {
            if target < drawn {
                return Err(GifSplitError::validation(format!(
                    "composite walk is forward-only: at frame {drawn}, asked for {target}"
                )));
            }
        }
        while self.drawn != Some(target) {
            self.step()?;
        }
        Ok(&self.canvas)
    }

    /// Turn the walk into an iterator of owned canvas snapshots, one per frame.
    pub fn snapshots(self) -> Snapshots<'a> {
        Snapshots {
            walk: self,
            failed: false,
        }
    }

    fn dispose(&mut self, prev: usize) -> GifSplitResult<()> {
        match disposal_action_with(&self.frames[prev], self.policy) {
            DisposalAction::NoOp => {}
            DisposalAction::ClearRect(rect) => self.canvas.clear_rect(rect),
            DisposalAction::RestoreSnapshot(rect) => {
                if let Some(saved) = self.saved.take() {
                    self.canvas.write_region(rect, &saved)?;
                }
            }
        }
        Ok(())
    }
}

/// Iterator returned by [`CompositeWalk::snapshots`].
///
/// Yields `(index, canvas)` for every frame in order and stops after the
/// first error.
#[derive(Debug)]
pub struct Snapshots<'a> {
    walk: CompositeWalk<'a>,
    failed: bool,
}

impl Iterator for Snapshots<'_> {
    type Item = GifSplitResult<(usize, CanvasBuffer)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.walk.step() {
            Ok(Some(idx)) => Some(Ok((idx, self.walk.canvas.clone()))),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
