/// Reported once conversion of a job starts (container parse).
pub const PROGRESS_PARSE: f32 = 10.0;
/// Reported once every frame has been decoded.
pub const PROGRESS_DECODED: f32 = 20.0;
/// Reported once the frame selection is known.
pub const PROGRESS_SELECTED: f32 = 25.0;
/// Reported once the canvas is allocated; per-frame progress starts here.
pub const PROGRESS_CANVAS_READY: f32 = 30.0;
/// Reported once the last selected frame is encoded.
pub const PROGRESS_FRAMES_DONE: f32 = 90.0;
/// Reported when a job finishes.
pub const PROGRESS_COMPLETE: f32 = 100.0;

/// Progress after `done` of `total` selected frames have been encoded.
///
/// The span between [`PROGRESS_CANVAS_READY`] and [`PROGRESS_FRAMES_DONE`] is
/// split linearly across the selected frames.
pub fn frame_progress(done: usize, total: usize) -> f32 {
    if total == 0 {
        return PROGRESS_FRAMES_DONE;
    }
    let frac = done.min(total) as f32 / total as f32;
    PROGRESS_CANVAS_READY + frac * (PROGRESS_FRAMES_DONE - PROGRESS_CANVAS_READY)
}

/// Forwards progress to a callback, clamped to `[0, 100]` and never lower
/// than the previous report.
pub(crate) struct ProgressReporter<'p> {
    sink: &'p mut dyn FnMut(f32),
    last: f32,
}

impl<'p> ProgressReporter<'p> {
    pub(crate) fn new(sink: &'p mut dyn FnMut(f32)) -> Self {
        Self { sink, last: 0.0 }
    }

    pub(crate) fn report(&mut self, value: f32) {
        let value = value.clamp(0.0, PROGRESS_COMPLETE).max(self.last);
        self.last = value;
        (self.sink)(value);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/progress.rs"]
mod tests;
