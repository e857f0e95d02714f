/// Convenience result type used across gifsplit.
pub type GifSplitResult<T> = Result<T, GifSplitError>;

/// Top-level error taxonomy used by the conversion APIs.
///
/// Every variant is terminal for the job that raised it: a conversion either
/// returns the complete frame sequence or one of these errors.
#[derive(thiserror::Error, Debug)]
pub enum GifSplitError {
    /// Nothing to work on (no decoded frames, or every batch input failed).
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// A frame index outside `[0, len)` was requested.
    #[error("index out of range: frame {index} requested but only {len} frame(s) exist")]
    IndexOutOfRange {
        /// Requested 0-based index.
        index: usize,
        /// Number of frames available.
        len: usize,
    },

    /// Structurally invalid frame records or canvas parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// The GIF bitstream could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// A composited raster could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GifSplitError {
    /// Build a [`GifSplitError::EmptyInput`] value.
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Build a [`GifSplitError::IndexOutOfRange`] value.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Build a [`GifSplitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GifSplitError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`GifSplitError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
