use crate::foundation::{
    core::FrameRect,
    frame::{DisposalMethod, FrameRecord},
};

/// How "restore to previous" disposal is carried out.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RestorePrevious {
    /// Clear the frame's rectangle, exactly like restore-background.
    #[default]
    ClearRect,
    /// Put back the pixels the rectangle held before the frame was drawn.
    Snapshot,
}

/// Canvas mutation to apply after a frame has been shown and before the
/// next frame is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisposalAction {
    /// Leave the canvas as it is.
    NoOp,
    /// Make every pixel inside the rectangle transparent.
    ClearRect(FrameRect),
    /// Restore the rectangle from the snapshot taken before the frame was drawn.
    RestoreSnapshot(FrameRect),
}

impl DisposalAction {
    /// Whether the compositor must snapshot the region before drawing.
    pub fn needs_snapshot(self) -> bool {
        matches!(self, Self::RestoreSnapshot(_))
    }
}

/// Disposal action for `frame` with restore-previous treated as a clear.
pub fn disposal_action(frame: &FrameRecord) -> DisposalAction {
    disposal_action_with(frame, RestorePrevious::default())
}

/// Disposal action for `frame` under the given restore-previous policy.
pub fn disposal_action_with(frame: &FrameRecord, policy: RestorePrevious) -> DisposalAction {
    match frame.disposal {
        DisposalMethod::Unspecified | DisposalMethod::Keep => DisposalAction::NoOp,
        DisposalMethod::RestoreBackground => DisposalAction::ClearRect(frame.rect),
        DisposalMethod::RestorePrevious => match policy {
            RestorePrevious::ClearRect => DisposalAction::ClearRect(frame.rect),
            RestorePrevious::Snapshot => DisposalAction::RestoreSnapshot(frame.rect),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/disposal.rs"]
mod tests;
