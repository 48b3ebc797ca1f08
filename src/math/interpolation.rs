//! Linear interpolation at mask transition edges.
//!
//! ## Purpose
//!
//! This module computes the interpolated boundary point between two
//! adjacent samples where an inclusion mask flips. Because the mask is an
//! opaque boolean sequence (no predicate is available to re-evaluate), the
//! logical transition is placed at the parametric midpoint between the two
//! samples, and x, lower, and upper are interpolated there.
//!
//! ## Design notes
//!
//! * **Formula**: Standard linear interpolation, `v = v0 + t * (v1 - v0)`.
//! * **Midpoint**: The transition fraction is fixed at `t = 1/2`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * For finite inputs, the interpolated x lies between the two sample x
//!   positions (inclusive).
//! * Interpolation reads only x/lower/upper values; the mask itself never
//!   enters the computation.
//!
//! ## Non-goals
//!
//! * This module does not locate curve intersections (`upper == lower`);
//!   the mask is taken as ground truth.
//! * This module does not provide higher-order interpolation.

// External dependencies
use num_traits::Float;

// ============================================================================
// Crossing
// ============================================================================

/// Interpolated transition point between two adjacent samples.
///
/// Carries the interpolated x position together with the lower and upper
/// boundary values at that position. The resolver places the crossing on
/// the upper trace; the lower value is exposed for collaborators that
/// anchor the closing edge on the lower boundary instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing<T> {
    /// Interpolated x position of the transition.
    pub x: T,
    /// Lower boundary value at the transition.
    pub lower: T,
    /// Upper boundary value at the transition.
    pub upper: T,
}

// ============================================================================
// Interpolation
// ============================================================================

/// Linear interpolation between `a` and `b` at fraction `t`.
#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + t * (b - a)
}

/// Interpolate the transition point between samples `i` and `i + 1`.
///
/// `(x0, lower0, upper0)` belong to the excluded-side sample and
/// `(x1, lower1, upper1)` to the included-side sample (or vice versa; the
/// midpoint is symmetric). All three series are interpolated at `t = 1/2`.
#[inline]
pub fn crossing<T: Float>(
    x0: T,
    lower0: T,
    upper0: T,
    x1: T,
    lower1: T,
    upper1: T,
) -> Crossing<T> {
    let half = T::from(0.5).unwrap();
    Crossing {
        x: lerp(x0, x1, half),
        lower: lerp(lower0, lower1, half),
        upper: lerp(upper0, upper1, half),
    }
}
