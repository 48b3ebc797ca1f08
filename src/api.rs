//! High-level API for fill-region resolution.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring resolution options, and the `RegionResolver`
//! handle that performs resolution over caller-supplied series.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all options.
//! * **Validated**: Options are validated when `.build()` is called;
//!   setting the same option twice is rejected.
//! * **Type-Safe**: Resolution is generic over `Float` types; the
//!   configuration itself is type-independent.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `FillBetween::new()` → chain setters →
//!   `.build()` → `RegionResolver::resolve(...)`.
//! * **Defaults**: Transition interpolation on, invalid masking off.

// Internal dependencies
use crate::engine::resolver::resolve_regions;

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use crate::engine::resolver::ResolverConfig;
pub use crate::primitives::errors::FillError;
pub use crate::primitives::polygon::{FillPolygon, Vertex};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring fill-region resolution.
#[derive(Debug, Clone, Default)]
pub struct FillBetweenBuilder {
    /// Emit interpolated lead/trail vertices at mask transitions
    /// (default: true).
    pub interpolate: Option<bool>,

    /// Treat samples with non-finite x/lower/upper values as excluded
    /// (default: false).
    pub mask_invalid: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl FillBetweenBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable interpolated transition edges.
    ///
    /// When disabled, polygon edges snap to the run's end samples instead
    /// of the mask transition point.
    pub fn interpolate(mut self, enabled: bool) -> Self {
        if self.interpolate.is_some() {
            self.duplicate_param = Some("interpolate");
        }
        self.interpolate = Some(enabled);
        self
    }

    /// Enable or disable exclusion of non-finite samples.
    ///
    /// When enabled, indices where `x`, `lower`, or `upper` is NaN or
    /// infinite are treated as mask-false before run scanning, on top of
    /// any caller-supplied mask.
    pub fn mask_invalid(mut self, enabled: bool) -> Self {
        if self.mask_invalid.is_some() {
            self.duplicate_param = Some("mask_invalid");
        }
        self.mask_invalid = Some(enabled);
        self
    }

    /// Validate the configuration and produce a resolver.
    pub fn build(self) -> Result<RegionResolver, FillError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(FillError::DuplicateParameter { parameter });
        }

        let defaults = ResolverConfig::default();
        Ok(RegionResolver {
            config: ResolverConfig {
                interpolate: self.interpolate.unwrap_or(defaults.interpolate),
                mask_invalid: self.mask_invalid.unwrap_or(defaults.mask_invalid),
            },
        })
    }
}

// ============================================================================
// Resolver Handle
// ============================================================================

/// Configured resolver for shaded regions between two boundary curves.
///
/// Cheap to copy and free of interior mutability; a single instance can be
/// shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionResolver {
    config: ResolverConfig,
}

impl RegionResolver {
    /// Resolve the fill polygons for the given aligned series.
    ///
    /// `x`, `lower`, `upper` (and `mask`, when supplied) must share a
    /// common length N >= 1; otherwise `FillError::ShapeMismatch` is
    /// returned and no output is produced. An absent mask selects the
    /// whole domain; an all-false mask yields an empty vector.
    pub fn resolve<T: Float>(
        &self,
        x: &[T],
        lower: &[T],
        upper: &[T],
        mask: Option<&[bool]>,
    ) -> Result<Vec<FillPolygon<T>>, FillError> {
        resolve_regions(x, lower, upper, mask, &self.config)
    }

    /// The active configuration.
    pub fn config(&self) -> ResolverConfig {
        self.config
    }
}
