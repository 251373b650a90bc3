use tracing::{debug, trace};

use super::bucketing::{buckets_for_target, lookahead_range};
use super::common::{centroid, plan_reduction, scan_bucket, ReductionPlan};
use crate::data_types::EnvelopeResult;
use crate::error::{ensure_same_len, Result};
use crate::simd::{max_f64, min_f64};

/// LTTB reduction that also carries, for each output point, the min and max
/// of every raw `y` in its bucket.
///
/// The line is point-for-point what [`super::decimate_lttb`] returns for the
/// same input; the band is what keeps spikes and dips visible after the line
/// has dropped them.
pub fn decimate_envelope(x: &[f64], y: &[f64], target_points: i64) -> Result<EnvelopeResult> {
    ensure_same_len(x.len(), y.len())?;
    let n = x.len();

    match plan_reduction(n, target_points) {
        ReductionPlan::Verbatim => Ok(EnvelopeResult {
            x: x.to_vec(),
            y: y.to_vec(),
            y_min: y.to_vec(),
            y_max: y.to_vec(),
        }),
        ReductionPlan::Endpoints => {
            // Only two points to carry information, so both get the global extent.
            let lo = min_f64(y);
            let hi = max_f64(y);
            let mut output = EnvelopeResult::with_capacity(2);
            output.push(x[0], y[0], lo, hi);
            output.push(x[n - 1], y[n - 1], lo, hi);
            Ok(output)
        }
        ReductionPlan::Reduce(target) => {
            debug!(points = n, target, "envelope reduction");
            let mut output = EnvelopeResult::with_capacity(target);
            decimate_envelope_into(x, y, target, &mut output);
            Ok(output)
        }
    }
}

fn decimate_envelope_into(x: &[f64], y: &[f64], target: usize, output: &mut EnvelopeResult) {
    let n = x.len();
    let buckets = buckets_for_target(n, target);
    trace!(buckets = buckets.len(), "envelope buckets");

    output.push(x[0], y[0], y[0], y[0]);

    let mut a_idx = 0;
    for (i, range) in buckets.iter().enumerate() {
        let (c_x, c_y) = centroid(x, y, lookahead_range(&buckets, i));
        let scan = scan_bucket(x, y, range.clone(), (x[a_idx], y[a_idx]), (c_x, c_y));
        a_idx = scan.selected;
        output.push(x[a_idx], y[a_idx], scan.y_min, scan.y_max);
    }

    output.push(x[n - 1], y[n - 1], y[n - 1], y[n - 1]);
}
