//! Slice kernels shared by the decimators.
//!
//! Lanes of eight are reduced independently and folded at the end, which
//! LLVM auto-vectorizes.

const LANES: usize = 8;

/// Smallest value in `data`, ignoring `NaN`. An empty slice yields `NaN`.
pub fn min_f64(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    fold_lanes(data, f64::INFINITY, f64::min)
}

/// Largest value in `data`, ignoring `NaN`. An empty slice yields `NaN`.
pub fn max_f64(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    fold_lanes(data, f64::NEG_INFINITY, f64::max)
}

/// Sum of `data`; `0.0` for an empty slice.
pub fn sum_f64(data: &[f64]) -> f64 {
    fold_lanes(data, 0.0, |acc, v| acc + v)
}

#[inline(always)]
fn fold_lanes(data: &[f64], init: f64, op: impl Fn(f64, f64) -> f64) -> f64 {
    let chunks = data.chunks_exact(LANES);
    let tail = chunks.remainder();

    let mut lanes = [init; LANES];
    for chunk in chunks {
        for (lane, &v) in lanes.iter_mut().zip(chunk) {
            *lane = op(*lane, v);
        }
    }

    let folded = lanes.into_iter().fold(init, &op);
    tail.iter().fold(folded, |acc, &v| op(acc, v))
}

/// Doubled area of the triangle A, B, C:
/// `|(Ax - Cx)(By - Ay) - (Ax - Bx)(Cy - Ay)|`.
#[inline(always)]
pub fn triangle_area(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> f64 {
    ((ax - cx) * (by - ay) - (ax - bx) * (cy - ay)).abs()
}
