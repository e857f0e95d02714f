use super::*;
use crate::foundation::{core::FrameRect, frame::DisposalMethod};

fn frames(n: usize) -> Vec<FrameRecord> {
    (0..n)
        .map(|i| {
            FrameRecord::new(
                i,
                FrameRect::new(0, 0, 1, 1),
                vec![i as u8, 0, 0, 255],
                DisposalMethod::Keep,
                10,
            )
            .unwrap()
        })
        .collect()
}

fn indices(picked: &[&FrameRecord]) -> Vec<usize> {
    picked.iter().map(|f| f.original_index).collect()
}

#[test]
fn all_returns_every_frame_in_order() {
    let fs = frames(4);
    let picked = select(&fs, &SelectionSpec::All).unwrap();
    assert_eq!(picked.len(), fs.len());
    for (a, b) in picked.iter().zip(fs.iter()) {
        assert!(std::ptr::eq(*a, b));
    }
}

#[test]
fn first_and_last_pick_single_frames() {
    let fs = frames(5);
    assert_eq!(indices(&select(&fs, &SelectionSpec::First).unwrap()), vec![0]);
    assert_eq!(indices(&select(&fs, &SelectionSpec::Last).unwrap()), vec![4]);
}

#[test]
fn first_and_last_fail_on_empty_input() {
    let fs = frames(0);
    assert!(matches!(select(&fs, &SelectionSpec::First), Err(GifSplitError::EmptyInput(_))));
    assert!(matches!(select(&fs, &SelectionSpec::Last), Err(GifSplitError::EmptyInput(_))));
    assert!(select(&fs, &SelectionSpec::All).unwrap().is_empty());
}

#[test]
fn custom_ranges_and_singles_are_sorted_and_unique() {
    let fs = frames(6);
    let picked = select(&fs, &SelectionSpec::custom("2-3,5")).unwrap();
    assert_eq!(indices(&picked), vec![1, 2, 4]);

    let picked = select(&fs, &SelectionSpec::custom("5, 1-3 ,2,3,1")).unwrap();
    assert_eq!(indices(&picked), vec![0, 1, 2, 4]);
}

#[test]
fn blank_or_unparseable_expressions_fall_back_to_all() {
    let fs = frames(3);
    let all = indices(&select(&fs, &SelectionSpec::All).unwrap());
    for expr in ["", "   ", "xx", "a-b, ,??", "-3"] {
        assert_eq!(
            indices(&select(&fs, &SelectionSpec::custom(expr)).unwrap()),
            all,
            "expr {expr:?}"
        );
    }
    assert_eq!(parse_range("xx", 3), RangeParse::Fallback);
}

#[test]
fn range_upper_bound_is_clamped() {
    let fs = frames(5);
    let picked = select(&fs, &SelectionSpec::custom("1-100")).unwrap();
    assert_eq!(indices(&picked), vec![0, 1, 2, 3, 4]);
    assert_eq!(parse_range("0-2", 5), RangeParse::Parsed(vec![0, 1]));
}

#[test]
fn out_of_bounds_singles_are_dropped_not_clamped() {
    assert_eq!(parse_range("0,9", 5), RangeParse::Parsed(vec![]));
    assert_eq!(parse_range("9,2", 5), RangeParse::Parsed(vec![1]));
}

#[test]
fn reversed_range_contributes_nothing() {
    assert_eq!(parse_range("4-2", 5), RangeParse::Parsed(vec![]));
    assert_eq!(parse_range("4-2,1", 5), RangeParse::Parsed(vec![0]));
}

#[test]
fn malformed_tokens_are_skipped_alongside_valid_ones() {
    assert_eq!(parse_range("x,2,3-y, 4 - 5 ", 6), RangeParse::Parsed(vec![1, 3, 4]));
    assert_eq!(parse_range("1-2-3", 6), RangeParse::Parsed(vec![0, 1]));
}

#[test]
fn selection_spec_parses_keywords() {
    assert_eq!("all".parse::<SelectionSpec>().unwrap(), SelectionSpec::All);
    assert_eq!(" First ".parse::<SelectionSpec>().unwrap(), SelectionSpec::First);
    assert_eq!("LAST".parse::<SelectionSpec>().unwrap(), SelectionSpec::Last);
    assert_eq!(
        "1-3,7".parse::<SelectionSpec>().unwrap(),
        SelectionSpec::custom("1-3,7")
    );
}
