use std::ops::Range;

/// Partitions the interior of a series (indices `1..n-1`, first and last
/// point excluded) into `bucket_count` contiguous `[start, end)` ranges of
/// equal fractional width `(n - 2) / bucket_count`.
///
/// Boundaries come from a running offset held as an exact numerator over
/// `bucket_count`, so no rounding error accumulates across buckets and the
/// last range always ends at `n - 1`. Both the LTTB line and the envelope
/// band are built from this one function.
pub fn interior_buckets(n: usize, bucket_count: usize) -> Vec<Range<usize>> {
    if n < 3 || bucket_count == 0 {
        return Vec::new();
    }

    let inner = n - 2;
    let mut buckets = Vec::with_capacity(bucket_count);
    let mut offset = 0usize;
    let mut start = 1;

    for _ in 0..bucket_count {
        offset += inner;
        let end = 1 + offset / bucket_count;
        buckets.push(start..end);
        start = end;
    }

    buckets
}

/// Buckets for a reduction of `n` points down to `target_points` (>= 3).
pub fn buckets_for_target(n: usize, target_points: usize) -> Vec<Range<usize>> {
    interior_buckets(n, target_points.saturating_sub(2))
}

/// Range the LTTB step for `bucket` averages over: the following bucket,
/// or an empty range past the last one.
#[inline]
pub fn lookahead_range(buckets: &[Range<usize>], bucket: usize) -> Range<usize> {
    match buckets.get(bucket + 1) {
        Some(next) => next.clone(),
        None => {
            let end = buckets.last().map_or(0, |r| r.end);
            end..end
        }
    }
}
