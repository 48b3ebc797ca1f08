#![cfg(feature = "dev")]
//! Tests for mask run segmentation.
//!
//! These tests verify `scan_runs` and the `Run` helpers: maximal run
//! construction, ordering, and the absent/all-false/all-true mask cases.

use bandfill::internals::math::runs::{scan_runs, Run};

// ============================================================================
// Run Helpers
// ============================================================================

#[test]
fn test_run_len_and_edges() {
    let run = Run { start: 2, end: 5 };
    assert_eq!(run.len(), 4);
    assert!(!run.touches_start());
    assert!(run.touches_end(6));
    assert!(!run.touches_end(7));

    let single = Run { start: 0, end: 0 };
    assert_eq!(single.len(), 1);
    assert!(!single.is_empty());
    assert!(single.touches_start());
    assert!(single.touches_end(1));
}

// ============================================================================
// Scanning
// ============================================================================

#[test]
fn test_absent_mask_selects_whole_domain() {
    let runs = scan_runs(None, 5);
    assert_eq!(runs, vec![Run { start: 0, end: 4 }]);
}

#[test]
fn test_all_true_mask_matches_absent_mask() {
    let mask = [true; 5];
    assert_eq!(scan_runs(Some(&mask), 5), scan_runs(None, 5));
}

#[test]
fn test_all_false_mask_yields_no_runs() {
    let mask = [false; 4];
    assert!(scan_runs(Some(&mask), 4).is_empty());
}

#[test]
fn test_multiple_runs_in_order() {
    let mask = [true, false, true, true, false, false, true];
    let runs = scan_runs(Some(&mask), 7);
    assert_eq!(
        runs,
        vec![
            Run { start: 0, end: 0 },
            Run { start: 2, end: 3 },
            Run { start: 6, end: 6 },
        ]
    );
}

#[test]
fn test_trailing_run_is_closed() {
    let mask = [false, true, true];
    let runs = scan_runs(Some(&mask), 3);
    assert_eq!(runs, vec![Run { start: 1, end: 2 }]);
}

#[test]
fn test_zero_length_domain() {
    assert!(scan_runs(None, 0).is_empty());
}

#[test]
fn test_alternating_mask() {
    let mask = [true, false, true, false, true];
    let runs = scan_runs(Some(&mask), 5);
    assert_eq!(runs.len(), 3);
    for run in &runs {
        assert_eq!(run.len(), 1);
    }
}
