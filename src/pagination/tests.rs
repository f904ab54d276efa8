//! Tests for pagination module

use super::*;
use test_case::test_case;

// ============================================================================
// PageNumber Tests
// ============================================================================

#[test_case(None, 1 ; "absent defaults to first page")]
#[test_case(Some(0), 1 ; "zero clamps to first page")]
#[test_case(Some(-3), 1 ; "negative clamps to first page")]
#[test_case(Some(1), 1 ; "first page kept")]
#[test_case(Some(7), 7 ; "positive page kept")]
#[test_case(Some(i64::from(u32::MAX) + 1), 1 ; "out of range clamps to first page")]
fn test_page_number_resolve(requested: Option<i64>, expected: u32) {
    assert_eq!(PageNumber::resolve(requested).get(), expected);
}

#[test_case(1, 0)]
#[test_case(2, 10)]
#[test_case(5, 40)]
fn test_page_number_offset(page: u32, offset: u64) {
    assert_eq!(PageNumber::new(page).unwrap().offset(), offset);
}

#[test]
fn test_page_number_new_rejects_zero() {
    assert!(PageNumber::new(0).is_none());
    assert_eq!(PageNumber::default(), PageNumber::FIRST);
}

#[test]
fn test_page_number_neighbours() {
    let first = PageNumber::FIRST;
    assert!(first.previous().is_none());
    assert_eq!(first.next().map(PageNumber::get), Some(2));

    let third = PageNumber::new(3).unwrap();
    assert_eq!(third.previous().map(PageNumber::get), Some(2));

    let last = PageNumber::new(u32::MAX).unwrap();
    assert!(last.next().is_none());
}

#[test]
fn test_page_number_serializes_as_integer() {
    let page = PageNumber::new(4).unwrap();
    assert_eq!(serde_json::to_string(&page).unwrap(), "4");
    assert_eq!(page.to_string(), "4");
}

#[test_case(0, false)]
#[test_case(9, false)]
#[test_case(10, true)]
#[test_case(11, false)]
fn test_needs_lookahead(records: usize, expected: bool) {
    assert_eq!(PageNumber::needs_lookahead(records), expected);
}

// ============================================================================
// Lookahead / Cursor Tests
// ============================================================================

#[test]
fn test_lookahead_from_count() {
    assert_eq!(Lookahead::from_count(0), Lookahead::Exhausted);
    assert_eq!(Lookahead::from_count(3), Lookahead::Found);
    assert!(!Lookahead::Skipped.was_attempted());
    assert!(Lookahead::Exhausted.was_attempted());
}

#[test]
fn test_cursors_first_page_with_successor() {
    let cursors = PageCursors::resolve(PageNumber::FIRST, &Lookahead::Found);
    assert!(cursors.previous.is_none());
    assert_eq!(cursors.next.map(PageNumber::get), Some(2));
}

#[test]
fn test_cursors_without_successor() {
    let page = PageNumber::new(4).unwrap();
    let failed = Lookahead::Failed {
        reason: "timeout".to_string(),
    };

    for lookahead in [Lookahead::Skipped, Lookahead::Exhausted, failed] {
        let cursors = PageCursors::resolve(page, &lookahead);
        assert_eq!(cursors.previous.map(PageNumber::get), Some(3));
        assert!(cursors.next.is_none());
    }
}
