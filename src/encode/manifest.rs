use crate::foundation::{
    core::Canvas,
    error::{GifSplitError, GifSplitResult},
};

/// JSON sidecar describing the frames written for one input.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameManifest {
    /// Input name the frames came from.
    pub source: String,
    /// Logical screen size every frame was rendered at.
    pub screen: Canvas,
    /// One entry per emitted frame, ascending by `frame_index`.
    pub frames: Vec<ManifestEntry>,
}

/// One emitted frame in a [`FrameManifest`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ManifestEntry {
    /// File the frame was written to.
    pub file: String,
    /// 0-based index of the frame in decode order.
    pub frame_index: usize,
    /// Display duration in hundredths of a second.
    pub delay_cs: u16,
}

impl FrameManifest {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> GifSplitResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GifSplitError::encode(format!("manifest json: {e}")))
    }
}

/// Sidecar file name for `base`: `{base}_frames.json`.
pub fn manifest_file_name(base: &str) -> String {
    format!("{base}_frames.json")
}

#[cfg(test)]
#[path = "../../tests/unit/encode/manifest.rs"]
mod tests;
