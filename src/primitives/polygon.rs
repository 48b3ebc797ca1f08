//! Output types for resolved fill regions.
//!
//! ## Purpose
//!
//! This module defines the vertex and polygon types emitted by the
//! resolver. A `FillPolygon` is an ordered, implicitly closed vertex loop
//! tracing the upper boundary forward across an included interval and the
//! lower boundary backward, ready to hand to a rendering collaborator.
//!
//! ## Design notes
//!
//! * **Implicit closure**: The last vertex connects back to the first; the
//!   first vertex is not repeated at the end.
//! * **Span retained**: Each polygon records the inclusive sample-index
//!   span it covers, so callers can relate polygons back to input indices.
//! * **Plain data**: All types derive `Debug`, `Clone`, `PartialEq`; deep
//!   equality is what makes resolution idempotence observable.
//!
//! ## Invariants
//!
//! * A polygon always holds at least two vertices (a length-1 run yields a
//!   degenerate two-vertex loop).
//! * Vertices appear in trace order: upper forward, then lower backward.
//!
//! ## Non-goals
//!
//! * This module does not rasterize, simplify, or clip polygons.
//! * This module does not enforce `upper >= lower`; fill direction is
//!   per-pair and implementation-defined.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Vertex
// ============================================================================

/// A single `(x, y)` polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<T> {
    /// Horizontal position.
    pub x: T,
    /// Vertical position.
    pub y: T,
}

impl<T> Vertex<T> {
    /// Create a vertex from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// FillPolygon
// ============================================================================

/// A closed fill polygon covering one included run of the input series.
///
/// Vertices trace the upper boundary in increasing x order (including any
/// interpolated lead/trail transition points), then the lower boundary in
/// decreasing x order. The loop closes implicitly from the last vertex back
/// to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPolygon<T> {
    vertices: Vec<Vertex<T>>,
    start: usize,
    end: usize,
}

impl<T> FillPolygon<T> {
    /// Assemble a polygon from its vertex loop and inclusive sample span.
    #[inline]
    pub(crate) fn new(vertices: Vec<Vertex<T>>, start: usize, end: usize) -> Self {
        Self {
            vertices,
            start,
            end,
        }
    }

    /// The ordered vertex loop.
    #[inline]
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// Number of vertices in the loop.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Inclusive sample-index span `(start, end)` this polygon covers.
    #[inline]
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Iterate over vertices in trace order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Vertex<T>> {
        self.vertices.iter()
    }

    /// Consume the polygon and return the underlying vertex vector.
    #[inline]
    pub fn into_vertices(self) -> Vec<Vertex<T>> {
        self.vertices
    }
}

impl<'a, T> IntoIterator for &'a FillPolygon<T> {
    type Item = &'a Vertex<T>;
    type IntoIter = core::slice::Iter<'a, Vertex<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
