//! Error types for fill-region resolution.
//!
//! ## Purpose
//!
//! This module defines `FillError`, the single error enum used across the
//! crate. Resolution itself can only fail one way (misaligned input
//! shapes); the builder adds one configuration-time failure of its own.
//!
//! ## Design notes
//!
//! * **Atomic failure**: Errors are raised before any output is produced;
//!   there are no partial results.
//! * **`no_std` compatible**: `Display` is implemented via `core::fmt`;
//!   `std::error::Error` is gated on the `std` feature.
//! * **Structured**: Variants carry the offending lengths/names so callers
//!   can report precisely what disagreed.
//!
//! ## Invariants
//!
//! * `ShapeMismatch` is the only error the resolve path can produce.
//! * `DuplicateParameter` is produced exclusively at builder time.
//!
//! ## Non-goals
//!
//! * This module does not classify degenerate-but-valid inputs (all-false
//!   masks, length-1 runs) as errors.

// External dependencies
use core::fmt;

// ============================================================================
// FillError
// ============================================================================

/// Errors produced by fill-region resolution and configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillError {
    /// Input sequences are empty or disagree in length.
    ///
    /// `x`, `lower`, `upper` (and the mask, when supplied) must share a
    /// common length of at least 1.
    ShapeMismatch {
        /// Length of the x series.
        x_len: usize,
        /// Length of the lower boundary series.
        lower_len: usize,
        /// Length of the upper boundary series.
        upper_len: usize,
        /// Length of the mask, if one was supplied.
        mask_len: Option<usize>,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillError::ShapeMismatch {
                x_len,
                lower_len,
                upper_len,
                mask_len,
            } => {
                write!(
                    f,
                    "Shape mismatch: x has {} points, lower has {}, upper has {}",
                    x_len, lower_len, upper_len
                )?;
                if let Some(m) = mask_len {
                    write!(f, ", mask has {}", m)?;
                }
                write!(f, " (sequences must be non-empty and equal length)")
            }
            FillError::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FillError {}
