//! Mask segmentation into maximal contiguous runs.
//!
//! ## Purpose
//!
//! This module turns an optional boolean inclusion mask into the list of
//! maximal contiguous index runs where the mask holds. Excluded indices are
//! dropped entirely; an absent mask selects the whole domain as one run.
//!
//! ## Design notes
//!
//! * **Single pass**: The mask is scanned once, left to right.
//! * **Inclusive bounds**: Runs store inclusive `start..=end` index bounds,
//!   matching how transition edges are reasoned about downstream.
//! * **Opaque mask**: The mask is ground truth. No predicate is evaluated
//!   or re-derived here.
//!
//! ## Key concepts
//!
//! * **Run**: maximal block of consecutive indices where the mask is true.
//! * **Ordering**: Runs are emitted in left-to-right order of occurrence.
//!
//! ## Invariants
//!
//! * Runs never overlap and never touch (adjacent runs are separated by at
//!   least one excluded index).
//! * `start <= end` for every emitted run.
//! * An all-false mask yields zero runs; an all-true or absent mask yields
//!   exactly one run spanning `[0, n-1]`.
//!
//! ## Non-goals
//!
//! * This module does not validate mask length against the series length
//!   (handled by the engine validator).
//! * This module does not interpolate transition positions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Run
// ============================================================================

/// A maximal contiguous block of included indices, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// First included index.
    pub start: usize,
    /// Last included index.
    pub end: usize,
}

impl Run {
    /// Number of samples the run covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false: inclusive bounds mean a run covers at least one
    /// sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the run begins at the first sample of the series.
    #[inline]
    pub fn touches_start(&self) -> bool {
        self.start == 0
    }

    /// Whether the run ends at the last sample of a series of length `n`.
    #[inline]
    pub fn touches_end(&self, n: usize) -> bool {
        self.end + 1 == n
    }
}

// ============================================================================
// Run Scanning
// ============================================================================

/// Segment a mask of length `n` into maximal contiguous true runs.
///
/// An absent mask is treated as all-true, producing the single run
/// `[0, n-1]`. `n` of zero produces no runs.
pub fn scan_runs(mask: Option<&[bool]>, n: usize) -> Vec<Run> {
    let mut runs = Vec::new();
    if n == 0 {
        return runs;
    }

    let mask = match mask {
        Some(m) => m,
        None => {
            runs.push(Run {
                start: 0,
                end: n - 1,
            });
            return runs;
        }
    };

    let mut current: Option<usize> = None;
    for (i, &included) in mask.iter().enumerate() {
        match (included, current) {
            (true, None) => current = Some(i),
            (false, Some(start)) => {
                runs.push(Run { start, end: i - 1 });
                current = None;
            }
            _ => {}
        }
    }
    if let Some(start) = current {
        runs.push(Run {
            start,
            end: mask.len() - 1,
        });
    }

    runs
}
