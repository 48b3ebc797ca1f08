//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data types shared by the rest of the
//! crate:
//! - Error types (`FillError`)
//! - Output types (`Vertex`, `FillPolygon`)
//!
//! These carry no algorithmic logic of their own.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for resolution and configuration.
pub mod errors;

/// Vertex and fill polygon output types.
pub mod polygon;
