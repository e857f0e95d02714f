use crate::{
    encode::FrameEncoder,
    foundation::error::{GifSplitError, GifSplitResult},
    pipeline::{
        convert::{ConvertOpts, Conversion, convert_gif},
        progress::ProgressReporter,
    },
};

/// Share of overall progress spent converting inputs; split evenly per input.
pub const BATCH_CONVERT_SPAN: f32 = 75.0;
/// Reported once every input has been attempted.
pub const BATCH_COLLECTED: f32 = 80.0;

/// One named input of a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchItem {
    /// Display name, typically the input file name.
    pub name: String,
    /// Raw GIF bytes.
    pub bytes: Vec<u8>,
}

/// A successfully converted batch input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchJob<T> {
    /// Name of the input.
    pub name: String,
    /// Frames produced for it.
    pub conversion: Conversion<T>,
}

/// A batch input that failed; the rest of the batch still ran.
#[derive(Debug)]
pub struct BatchFailure {
    /// Name of the input.
    pub name: String,
    /// Why the job failed.
    pub error: GifSplitError,
}

/// Outcome of [`convert_batch`].
#[derive(Debug)]
pub struct BatchReport<T> {
    /// Inputs that converted, in input order.
    pub jobs: Vec<BatchJob<T>>,
    /// Inputs that failed, in input order.
    pub failures: Vec<BatchFailure>,
}

impl<T> BatchReport<T> {
    /// Total number of frames emitted across all jobs.
    pub fn frame_count(&self) -> usize {
        self.jobs.iter().map(|j| j.conversion.frames.len()).sum()
    }
}

/// Convert several GIFs one after another with a shared encoder.
///
/// Jobs run strictly in order. A failing input is recorded and skipped; the
/// batch itself fails only when no input produced any frame.
#[tracing::instrument(skip_all, fields(inputs = items.len()))]
pub fn convert_batch<E: FrameEncoder>(
    items: &[BatchItem],
    opts: &ConvertOpts,
    encoder: &mut E,
    progress: &mut dyn FnMut(f32),
) -> GifSplitResult<BatchReport<E::Output>> {
    if items.is_empty() {
        return Err(GifSplitError::empty_input("no input files"));
    }

    let mut progress = ProgressReporter::new(progress);
    let share = BATCH_CONVERT_SPAN / items.len() as f32;
    let mut report = BatchReport {
        jobs: Vec::new(),
        failures: Vec::new(),
    };

    for (i, item) in items.iter().enumerate() {
        let base = i as f32 * share;
        progress.report(base);

        let mut job_progress = |p: f32| progress.report(base + p / 100.0 * share);
        match convert_gif(&item.bytes, opts, encoder, &mut job_progress) {
            Ok(conversion) => {
                tracing::info!(
                    name = %item.name,
                    frames = conversion.frames.len(),
                    "converted"
                );
                report.jobs.push(BatchJob {
                    name: item.name.clone(),
                    conversion,
                });
            }
            Err(error) => {
                tracing::warn!(name = %item.name, %error, "conversion failed");
                report.failures.push(BatchFailure {
                    name: item.name.clone(),
                    error,
                });
            }
        }
    }

    progress.report(BATCH_COLLECTED);

    if report.frame_count() == 0 {
        let detail = report
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.name, f.error))
            .collect::<Vec<_>>()
            .join("; ");
        if report.jobs.is_empty() {
            return Err(GifSplitError::empty_input(format!(
                "all files failed to process ({detail})"
            )));
        }
        let msg = if detail.is_empty() {
            "no frames selected in any input".to_owned()
        } else {
            format!("no frames selected in any input; failed: {detail}")
        };
        return Err(GifSplitError::empty_input(msg));
    }
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
