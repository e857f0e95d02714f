use super::*;
use crate::foundation::{
    core::FrameRect,
    frame::{DisposalMethod, FrameRecord},
};

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

fn screen() -> Canvas {
    Canvas::new(20, 20).unwrap()
}

fn solid(index: usize, rect: FrameRect, px: [u8; 4], disposal: DisposalMethod) -> FrameRecord {
    FrameRecord::new(index, rect, px.repeat(rect.area()), disposal, 10).unwrap()
}

fn sub_rect() -> FrameRect {
    FrameRect::new(5, 5, 10, 10)
}

/// Full-canvas keep frame, a disposing sub-rect frame, then the same sub-rect again.
fn three_frames(middle: DisposalMethod) -> Vec<FrameRecord> {
    vec![
        solid(0, screen().full_rect(), RED, DisposalMethod::Keep),
        solid(1, sub_rect(), GREEN, middle),
        solid(2, sub_rect(), BLUE, DisposalMethod::Keep),
    ]
}

fn assert_regions(buf: &CanvasBuffer, rect: FrameRect, inside: [u8; 4], outside: [u8; 4]) {
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let want = if rect.contains(x, y) { inside } else { outside };
            assert_eq!(buf.pixel(x, y), Some(want), "pixel ({x},{y})");
        }
    }
}

#[test]
fn restore_background_frame_is_erased_before_next_draw() {
    let frames = three_frames(DisposalMethod::RestoreBackground);
    let out = composite(&frames, screen(), 2).unwrap();
    assert_regions(&out, sub_rect(), BLUE, RED);
}

#[test]
fn restore_background_leaves_transparent_hole() {
    let mut frames = three_frames(DisposalMethod::RestoreBackground);
    // Frame 2 draws nothing visible, exposing what disposal left behind.
    frames[2] = solid(2, sub_rect(), CLEAR, DisposalMethod::Keep);
    let out = composite(&frames, screen(), 2).unwrap();
    assert_regions(&out, sub_rect(), CLEAR, RED);
}

#[test]
fn keep_frame_shows_through_transparent_successor() {
    let mut frames = three_frames(DisposalMethod::Keep);
    frames[2] = solid(2, sub_rect(), CLEAR, DisposalMethod::Keep);
    let out = composite(&frames, screen(), 2).unwrap();
    assert_regions(&out, sub_rect(), GREEN, RED);
}

#[test]
fn composite_of_first_frame_is_just_that_frame() {
    let frames = three_frames(DisposalMethod::RestoreBackground);
    let out = composite(&frames, screen(), 0).unwrap();
    assert!(out.as_bytes().chunks_exact(4).all(|p| p == RED));
}

#[test]
fn composite_is_idempotent() {
    let frames = three_frames(DisposalMethod::RestoreBackground);
    let a = composite(&frames, screen(), 1).unwrap();
    let b = composite(&frames, screen(), 1).unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
    assert_regions(&a, sub_rect(), GREEN, RED);
}

#[test]
fn restore_previous_clears_by_default() {
    let mut frames = three_frames(DisposalMethod::RestorePrevious);
    frames[2] = solid(2, sub_rect(), CLEAR, DisposalMethod::Keep);
    let out = composite(&frames, screen(), 2).unwrap();
    assert_regions(&out, sub_rect(), CLEAR, RED);
}

#[test]
fn restore_previous_snapshot_policy_restores_prior_pixels() {
    let mut frames = three_frames(DisposalMethod::RestorePrevious);
    frames[2] = solid(2, sub_rect(), CLEAR, DisposalMethod::Keep);
    let out = composite_with(&frames, screen(), 2, RestorePrevious::Snapshot).unwrap();
    assert!(out.as_bytes().chunks_exact(4).all(|p| p == RED));
}

#[test]
fn empty_input_and_out_of_range_fail() {
    assert!(matches!(composite(&[], screen(), 0), Err(GifSplitError::EmptyInput(_))));
    let frames = three_frames(DisposalMethod::Keep);
    assert!(matches!(
        composite(&frames, screen(), 99),
        Err(GifSplitError::IndexOutOfRange { index: 99, len: 3 })
    ));
}

#[test]
fn walk_matches_rebuild_for_every_target() {
    let frames = three_frames(DisposalMethod::RestoreBackground);
    let mut walk = CompositeWalk::new(&frames, screen(), RestorePrevious::ClearRect).unwrap();
    for target in 0..frames.len() {
        let rebuilt = composite(&frames, screen(), target).unwrap();
        assert_eq!(walk.advance_to(target).unwrap(), &rebuilt);
    }
    assert_eq!(walk.current(), Some(2));
    assert_eq!(walk.step().unwrap(), None);
}

#[test]
fn walk_skips_ahead_and_refuses_to_rewind() {
    let frames = three_frames(DisposalMethod::RestoreBackground);
    let mut walk = CompositeWalk::new(&frames, screen(), RestorePrevious::ClearRect).unwrap();
    walk.advance_to(2).unwrap();
    // Re-requesting the current frame is fine.
    walk.advance_to(2).unwrap();
    assert!(matches!(walk.advance_to(1), Err(GifSplitError::Validation(_))));
}

#[test]
fn snapshots_yield_every_frame_in_order() {
    let frames = three_frames(DisposalMethod::RestoreBackground);
    let walk = CompositeWalk::new(&frames, screen(), RestorePrevious::ClearRect).unwrap();
    let snaps: Vec<_> = walk.snapshots().collect::<Result<_, _>>().unwrap();
    assert_eq!(snaps.len(), 3);
    for (i, (idx, canvas)) in snaps.iter().enumerate() {
        assert_eq!(*idx, i);
        assert_eq!(canvas, &composite(&frames, screen(), i).unwrap());
    }
}

#[test]
fn out_of_screen_frame_is_clipped_not_rejected() {
    let frames = vec![
        solid(0, screen().full_rect(), RED, DisposalMethod::RestoreBackground),
        solid(1, FrameRect::new(15, 15, 10, 10), BLUE, DisposalMethod::Keep),
    ];
    let out = composite(&frames, screen(), 1).unwrap();
    assert_regions(&out, FrameRect::new(15, 15, 5, 5), BLUE, CLEAR);
}
