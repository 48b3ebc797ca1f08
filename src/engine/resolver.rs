//! Core fill-region resolution.
//!
//! ## Purpose
//!
//! This module implements the Region-Fill Resolver: it validates the input
//! series, segments the inclusion mask into maximal contiguous runs, and
//! assembles one closed fill polygon per run, tracing the upper boundary
//! forward and the lower boundary backward.
//!
//! ## Design notes
//!
//! * **Pure**: Inputs are never mutated; every call allocates fresh output.
//! * **Orchestration**: Run scanning and transition interpolation live in
//!   the math layer; this module only sequences them.
//! * **Transition edges**: A run that does not touch a series end gains an
//!   interpolated lead/trail vertex on the upper trace, so the shaded edge
//!   lands at the mask transition instead of snapping to a sample.
//! * **Opaque mask**: The mask is ground truth; no predicate is
//!   re-evaluated when interpolating.
//!
//! ## Key concepts
//!
//! * **Run assembly**: upper values for `i0..=i1` increasing (plus lead and
//!   trail crossings), then lower values decreasing. An interior run of
//!   length L yields `2 * L + 2` vertices.
//! * **Invalid masking**: Optionally, samples with non-finite x/lower/upper
//!   values are excluded as if the mask were false there. A transition
//!   adjacent to such a sample cannot be interpolated (the crossing would
//!   be non-finite), so that edge snaps to the run-end sample.
//!
//! ## Invariants
//!
//! * Polygons are emitted in left-to-right order of their runs.
//! * The only failure mode is `FillError::ShapeMismatch`, raised before any
//!   output is produced.
//! * Resolution is deterministic: identical inputs yield deep-equal output.
//!
//! ## Non-goals
//!
//! * This module does not render, clip, or style polygons.
//! * This module does not sort the x series or enforce monotonicity.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::interpolation::crossing;
use crate::math::runs::{scan_runs, Run};
use crate::primitives::errors::FillError;
use crate::primitives::polygon::{FillPolygon, Vertex};

// ============================================================================
// Configuration
// ============================================================================

/// Resolution options, produced by the API builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Emit interpolated lead/trail vertices at mask transitions.
    pub interpolate: bool,

    /// Exclude samples with non-finite x/lower/upper values.
    pub mask_invalid: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            interpolate: true,
            mask_invalid: false,
        }
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the fill polygons between two boundary curves.
///
/// Validates that `x`, `lower`, `upper` (and `mask`, when supplied) share a
/// common length N >= 1, segments the included domain into maximal runs,
/// and returns one polygon per run in left-to-right order. An all-false
/// mask yields an empty vector.
pub fn resolve_regions<T: Float>(
    x: &[T],
    lower: &[T],
    upper: &[T],
    mask: Option<&[bool]>,
    config: &ResolverConfig,
) -> Result<Vec<FillPolygon<T>>, FillError> {
    Validator::validate_inputs(x, lower, upper, mask)?;
    let n = x.len();

    // Fold non-finite samples into the mask when requested. The combined
    // mask already honors the caller's mask, so it takes precedence below.
    let combined: Option<Vec<bool>> = if config.mask_invalid {
        let mut m: Vec<bool> = (0..n)
            .map(|i| x[i].is_finite() && lower[i].is_finite() && upper[i].is_finite())
            .collect();
        if let Some(user) = mask {
            for (mi, &ui) in m.iter_mut().zip(user) {
                *mi = *mi && ui;
            }
        }
        Some(m)
    } else {
        None
    };
    let effective = combined.as_deref().or(mask);

    let runs = scan_runs(effective, n);
    let mut polygons = Vec::with_capacity(runs.len());
    for run in &runs {
        polygons.push(build_polygon(x, lower, upper, run, n, config.interpolate));
    }
    Ok(polygons)
}

/// Assemble the closed vertex loop for one included run.
fn build_polygon<T: Float>(
    x: &[T],
    lower: &[T],
    upper: &[T],
    run: &Run,
    n: usize,
    interpolate: bool,
) -> FillPolygon<T> {
    let mut vertices = Vec::with_capacity(2 * run.len() + 2);

    // Upper trace, increasing x. Runs are maximal, so a run starting past
    // index 0 is always preceded by an excluded sample.
    if interpolate && !run.touches_start() {
        let i = run.start;
        let c = crossing(x[i - 1], lower[i - 1], upper[i - 1], x[i], lower[i], upper[i]);
        // A neighbor excluded for being non-finite cannot anchor an edge;
        // the edge snaps to the run-end sample instead.
        if c.x.is_finite() && c.upper.is_finite() {
            vertices.push(Vertex::new(c.x, c.upper));
        }
    }
    for i in run.start..=run.end {
        vertices.push(Vertex::new(x[i], upper[i]));
    }
    if interpolate && !run.touches_end(n) {
        let i = run.end;
        let c = crossing(x[i], lower[i], upper[i], x[i + 1], lower[i + 1], upper[i + 1]);
        if c.x.is_finite() && c.upper.is_finite() {
            vertices.push(Vertex::new(c.x, c.upper));
        }
    }

    // Lower trace, decreasing x. The loop closes implicitly back to the
    // first vertex.
    for i in (run.start..=run.end).rev() {
        vertices.push(Vertex::new(x[i], lower[i]));
    }

    FillPolygon::new(vertices, run.start, run.end)
}
