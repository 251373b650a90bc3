use tracing::{debug, trace};

use super::bucketing::{buckets_for_target, lookahead_range};
use super::common::{centroid, plan_reduction, scan_bucket, ReductionPlan};
use crate::data_types::DownsampleResult;
use crate::error::{ensure_same_len, Result};

/// Largest-Triangle-Three-Buckets reduction of `x`/`y` to at most
/// `target_points` points.
///
/// - `target_points <= 0` or `>= x.len()`: input returned verbatim.
/// - `target_points` of 1 or 2: only the first and last raw point.
/// - otherwise the first and last point plus one selected point per
///   interior bucket.
pub fn decimate_lttb(x: &[f64], y: &[f64], target_points: i64) -> Result<DownsampleResult> {
    ensure_same_len(x.len(), y.len())?;
    let n = x.len();

    match plan_reduction(n, target_points) {
        ReductionPlan::Verbatim => Ok(DownsampleResult {
            x: x.to_vec(),
            y: y.to_vec(),
        }),
        ReductionPlan::Endpoints => {
            let mut output = DownsampleResult::with_capacity(2);
            output.push(x[0], y[0]);
            output.push(x[n - 1], y[n - 1]);
            Ok(output)
        }
        ReductionPlan::Reduce(target) => {
            debug!(points = n, target, "lttb reduction");
            let mut output = DownsampleResult::with_capacity(target);
            decimate_lttb_into(x, y, target, &mut output);
            Ok(output)
        }
    }
}

fn decimate_lttb_into(x: &[f64], y: &[f64], target: usize, output: &mut DownsampleResult) {
    let n = x.len();
    let buckets = buckets_for_target(n, target);
    trace!(buckets = buckets.len(), "lttb buckets");

    output.push(x[0], y[0]);

    let mut a_idx = 0;
    for (i, range) in buckets.iter().enumerate() {
        let (c_x, c_y) = centroid(x, y, lookahead_range(&buckets, i));
        let scan = scan_bucket(x, y, range.clone(), (x[a_idx], y[a_idx]), (c_x, c_y));
        a_idx = scan.selected;
        output.push(x[a_idx], y[a_idx]);
    }

    output.push(x[n - 1], y[n - 1]);
}
