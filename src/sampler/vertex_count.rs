use std::ops::RangeInclusive;

/// Range the polygon loop bound is drawn from. Vertices are counted from 1 up to, but excluding, the bound.
pub const VERTEX_BOUNDS: RangeInclusive<usize> = 1..=5;

/// Number of vertices for a drawn bound: `(1..bound).count()`, so 0 to 4 for the default bounds.
pub fn vertex_count_for_bound(bound: usize) -> usize {
    bound.saturating_sub(1)
}
