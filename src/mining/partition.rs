use std::ops::Range;

/// The contiguous slice of a length's candidate index space owned by `rank`.
///
/// `per_rank = ceil(total / world_size)`; rank `r` owns
/// `r * per_rank .. min((r + 1) * per_rank, total)`. Every rank computes this
/// independently from the same three inputs, so no partition information ever
/// crosses the wire. Ranges are disjoint across ranks and their union is
/// exactly `0..total`.
///
/// The range is empty when `world_size` exceeds the remaining candidates;
/// that rank still participates in the gather with a no-op contribution.
pub fn plan(total: u64, world_size: usize, rank: usize) -> Range<u64> {
    debug_assert!(world_size > 0);
    debug_assert!(rank < world_size);

    let per_rank = total.div_ceil(world_size as u64);
    let start = (rank as u64).saturating_mul(per_rank).min(total);
    let end = (rank as u64 + 1).saturating_mul(per_rank).min(total);
    start..end
}
