//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates resolution:
//! - Input shape validation
//! - Run scanning, transition interpolation, and polygon assembly
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input shape validation.
pub mod validator;

/// Fill-region resolution.
pub mod resolver;
