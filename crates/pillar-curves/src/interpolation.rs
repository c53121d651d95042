//! Segment location and linear interpolation over curve pillars.
//!
//! The segment search distinguishes an exact pillar hit from a bracketed
//! position between two pillars, as two named outcomes. The caller reads
//! a pillar rate directly on an exact hit and interpolates on a bracket,
//! so the distinction is part of the contract rather than something to be
//! decoded from a search routine's index encoding.

use crate::point::TenorPoint;

/// Outcome of locating a query on the pillar axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentHit {
    /// The query equals the pillar offset at this index.
    Exact(usize),
    /// The query falls strictly between this index and the next.
    Bracket(usize),
}

/// Locates `x` among pillar offsets.
///
/// Pillar offsets must be strictly ascending, and `x` must lie within
/// `[first offset, last offset)`. Queries outside that range belong to
/// the curve's domain guard and extrapolation branches, which run before
/// the search.
#[must_use]
pub fn locate(points: &[TenorPoint], x: f64) -> SegmentHit {
    let result = points.binary_search_by(|probe| {
        probe
            .offset()
            .partial_cmp(&x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    match result {
        Ok(i) => SegmentHit::Exact(i),
        Err(i) => SegmentHit::Bracket(i - 1),
    }
}

/// Linear interpolation between `(x0, y0)` and `(x1, y1)`.
#[must_use]
pub fn lerp(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}
