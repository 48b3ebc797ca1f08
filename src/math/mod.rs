//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure functions the resolver is built from:
//! - Mask segmentation into maximal contiguous runs
//! - Linear interpolation at mask transition edges
//!
//! These are reusable building blocks with no engine-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mask segmentation into maximal contiguous runs.
pub mod runs;

/// Linear interpolation at mask transition edges.
pub mod interpolation;
