//! Input validation for fill-region resolution.
//!
//! ## Purpose
//!
//! This module checks that the input series handed to the resolver agree in
//! shape: `x`, `lower`, `upper`, and the mask (when present) must share a
//! common length of at least 1.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Shape agreement**: All sequences are aligned index-for-index; any
//!   disagreement is a `ShapeMismatch`.
//! * **Minimum length**: A single sample (N = 1) is the smallest valid
//!   input.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * Inputs that pass validation can be resolved without further failure.
//!
//! ## Non-goals
//!
//! * This module does not check x monotonicity (a caller convention, not an
//!   enforced invariant).
//! * This module does not check finiteness; non-finite samples are valid
//!   input and handled by the resolver's invalid-masking option.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FillError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for resolver input series.
///
/// Provides static methods returning `Result<(), FillError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the aligned input series for fill-region resolution.
    pub fn validate_inputs<T: Float>(
        x: &[T],
        lower: &[T],
        upper: &[T],
        mask: Option<&[bool]>,
    ) -> Result<(), FillError> {
        let n = x.len();

        // Check 1: Non-empty x series
        if n == 0 {
            return Err(Self::mismatch(x, lower, upper, mask));
        }

        // Check 2: Boundary series aligned with x
        if lower.len() != n || upper.len() != n {
            return Err(Self::mismatch(x, lower, upper, mask));
        }

        // Check 3: Mask aligned with x, when present
        if let Some(m) = mask {
            if m.len() != n {
                return Err(Self::mismatch(x, lower, upper, mask));
            }
        }

        Ok(())
    }

    #[inline]
    fn mismatch<T: Float>(
        x: &[T],
        lower: &[T],
        upper: &[T],
        mask: Option<&[bool]>,
    ) -> FillError {
        FillError::ShapeMismatch {
            x_len: x.len(),
            lower_len: lower.len(),
            upper_len: upper.len(),
            mask_len: mask.map(<[bool]>::len),
        }
    }
}
