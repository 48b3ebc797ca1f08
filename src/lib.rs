//! # bandfill — Shaded-Region Resolution for Fill-Between Plots
//!
//! A small, pure library implementing the geometry behind a plotting
//! library's "fill between" feature: given an ordered x series, two aligned
//! boundary series, and an optional boolean inclusion mask, it computes the
//! maximal contiguous included intervals and emits, for each, the closed
//! polygon that shades the area between the two boundary curves.
//!
//! ## What it does
//!
//! A fill-between call shades the region between an upper and a lower curve.
//! With a `where`-style mask, only the samples where the mask holds are
//! shaded, and each maximal run of included samples becomes its own polygon.
//! At a mask transition that falls strictly between two samples, the shaded
//! edge is linearly interpolated so it lands exactly at the transition point
//! rather than snapping to the nearest sample.
//!
//! **Key properties:**
//! - Pure functions over immutable inputs; no shared state, no I/O
//! - One polygon per maximal mask-true run, in left-to-right order
//! - Interpolated lead/trail vertices at interior transitions (opt-out)
//! - Optional exclusion of non-finite samples, matching plotting-library
//!   behavior for invalid data
//! - Generic over float precision via `num_traits::Float`
//! - `no_std` compatible (with `alloc`)
//!
//! **What it does not do:** rendering. Axes, legends, colors, transparency,
//! and export formats belong to the plotting collaborator consuming the
//! polygons.
//!
//! ## Quick Start
//!
//! ```rust
//! use bandfill::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let lower = vec![0.0, 0.0, 0.0, 0.0, 0.0];
//! let upper = vec![1.0, 1.0, 1.0, 1.0, 1.0];
//! let mask = vec![false, true, true, false, false];
//!
//! let resolver = FillBetween::new().build()?;
//! let polygons = resolver.resolve(&x, &lower, &upper, Some(&mask))?;
//!
//! // One included run ([1, 2]), one polygon. The run has two samples and
//! // sits strictly inside the domain, so both transition edges gain an
//! // interpolated vertex: 2 * 2 + 2 vertices in total.
//! assert_eq!(polygons.len(), 1);
//! assert_eq!(polygons[0].vertex_count(), 6);
//! assert_eq!(polygons[0].vertices()[0].x, 0.5);
//! # Result::<(), FillError>::Ok(())
//! ```
//!
//! ### Whole-domain fill
//!
//! ```rust
//! use bandfill::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0];
//! let lower = vec![-1.0, -0.5, -1.0];
//! let upper = vec![1.0, 0.5, 1.0];
//!
//! // No mask: the whole domain is a single run, no interpolated edges.
//! let polygons = RegionResolver::default().resolve(&x, &lower, &upper, None)?;
//! assert_eq!(polygons.len(), 1);
//! assert_eq!(polygons[0].vertex_count(), 6);
//! assert_eq!(polygons[0].span(), (0, 2));
//! # Result::<(), FillError>::Ok(())
//! ```
//!
//! ### Configuration
//!
//! ```rust
//! use bandfill::prelude::*;
//!
//! // Snap edges to samples and drop NaN samples from the fill.
//! let resolver = FillBetween::new()
//!     .interpolate(false)
//!     .mask_invalid(true)
//!     .build()?;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0];
//! let lower = vec![0.0, 0.0, f64::NAN, 0.0];
//! let upper = vec![1.0, 2.0, 2.0, 1.0];
//!
//! let polygons = resolver.resolve(&x, &lower, &upper, None)?;
//! assert_eq!(polygons.len(), 2); // the NaN sample splits the domain
//! # Result::<(), FillError>::Ok(())
//! ```
//!
//! ## Semantics
//!
//! The mask is opaque ground truth: this crate never re-evaluates the
//! predicate that produced it. A transition between an excluded and an
//! included sample is therefore placed at the parametric midpoint of the
//! two samples, with x, lower, and upper linearly interpolated there.
//!
//! Degenerate inputs are valid, not errors: an all-false mask yields zero
//! polygons, a length-1 run yields a two-vertex loop, and a single-sample
//! series yields a single degenerate polygon. The only failure mode on the
//! resolve path is a shape mismatch between the input sequences.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type (`FillError`) and the output types
// (`Vertex`, `FillPolygon`).
mod primitives;

// Layer 2: Math - pure functions.
//
// Contains mask run segmentation and linear interpolation at mask
// transition edges.
mod math;

// Layer 3: Engine - orchestration.
//
// Contains input validation and the core resolution pass that assembles
// fill polygons from runs and crossings.
mod engine;

// High-level fluent API for fill-region resolution.
//
// Provides the `FillBetween` builder and the `RegionResolver` handle.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard bandfill prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use bandfill::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        FillBetweenBuilder as FillBetween, FillError, FillPolygon, RegionResolver,
        ResolverConfig, Vertex,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
