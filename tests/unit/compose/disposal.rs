use super::*;

fn frame(disposal: DisposalMethod) -> FrameRecord {
    FrameRecord::new(0, FrameRect::new(2, 3, 1, 1), vec![0; 4], disposal, 0).unwrap()
}

#[test]
fn keep_and_unspecified_are_noops() {
    assert_eq!(disposal_action(&frame(DisposalMethod::Keep)), DisposalAction::NoOp);
    assert_eq!(
        disposal_action(&frame(DisposalMethod::Unspecified)),
        DisposalAction::NoOp
    );
}

#[test]
fn restore_background_clears_frame_rect() {
    assert_eq!(
        disposal_action(&frame(DisposalMethod::RestoreBackground)),
        DisposalAction::ClearRect(FrameRect::new(2, 3, 1, 1))
    );
}

#[test]
fn restore_previous_defaults_to_clear() {
    let f = frame(DisposalMethod::RestorePrevious);
    assert_eq!(
        disposal_action(&f),
        DisposalAction::ClearRect(FrameRect::new(2, 3, 1, 1))
    );
    assert!(!disposal_action(&f).needs_snapshot());
}

#[test]
fn restore_previous_snapshot_policy_requests_snapshot() {
    let f = frame(DisposalMethod::RestorePrevious);
    let action = disposal_action_with(&f, RestorePrevious::Snapshot);
    assert_eq!(action, DisposalAction::RestoreSnapshot(FrameRect::new(2, 3, 1, 1)));
    assert!(action.needs_snapshot());

    // The policy only affects restore-previous frames.
    assert_eq!(
        disposal_action_with(&frame(DisposalMethod::RestoreBackground), RestorePrevious::Snapshot),
        DisposalAction::ClearRect(FrameRect::new(2, 3, 1, 1))
    );
}
