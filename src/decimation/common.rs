use std::ops::Range;

use crate::simd::triangle_area;

/// What a reduction call has to do for a given input length and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionPlan {
    /// Return the input unchanged (no limit, or target already satisfied).
    Verbatim,
    /// Target below 3: only the first and last raw point survive.
    Endpoints,
    /// Full bucketed reduction down to this many points.
    Reduce(usize),
}

/// Resolves `target_points` against a series of `n` points.
/// A non-positive target means "no limit".
pub fn plan_reduction(n: usize, target_points: i64) -> ReductionPlan {
    if n == 0 || target_points <= 0 {
        return ReductionPlan::Verbatim;
    }
    let target = usize::try_from(target_points).unwrap_or(usize::MAX);
    if target >= n {
        ReductionPlan::Verbatim
    } else if target < 3 {
        ReductionPlan::Endpoints
    } else {
        ReductionPlan::Reduce(target)
    }
}

/// Mean `(x, y)` of the points in `range`.
///
/// An empty range yields `(0, 0)`. That is what the last interior bucket
/// sees, and it is kept as-is: with few buckets it visibly pulls the last
/// selection towards the origin.
#[inline]
pub fn centroid(x: &[f64], y: &[f64], range: Range<usize>) -> (f64, f64) {
    if range.is_empty() {
        return (0.0, 0.0);
    }
    let count = range.len() as f64;
    let sum_x = crate::simd::sum_f64(&x[range.clone()]);
    let sum_y = crate::simd::sum_f64(&y[range]);
    (sum_x / count, sum_y / count)
}

/// Result of scanning one bucket: the LTTB pick and the bucket's raw extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketScan {
    /// Absolute index of the point with the largest triangle area.
    pub selected: usize,
    pub y_min: f64,
    pub y_max: f64,
}

/// Scans a non-empty `range` once, picking the point that maximizes the
/// triangle area against `a` and `c` while folding the min/max of every `y`.
///
/// Strict `>`: the first index reaching the maximum wins. Both the plain
/// LTTB line and the envelope select through here.
pub fn scan_bucket(
    x: &[f64],
    y: &[f64],
    range: Range<usize>,
    (a_x, a_y): (f64, f64),
    (c_x, c_y): (f64, f64),
) -> BucketScan {
    let mut max_area = -1.0;
    let mut scan = BucketScan {
        selected: range.start,
        y_min: y[range.start],
        y_max: y[range.start],
    };

    for j in range {
        let area = triangle_area(a_x, a_y, x[j], y[j], c_x, c_y);
        if area > max_area {
            max_area = area;
            scan.selected = j;
        }
        scan.y_min = scan.y_min.min(y[j]);
        scan.y_max = scan.y_max.max(y[j]);
    }

    scan
}
