//! Exponential moving averages, uniform and time-weighted.

use crate::error::{ensure_same_len, ReduceError, Result};

/// Exponential moving average seeded with `data[0]`.
///
/// `alpha == 0` returns the input unchanged. Any other `alpha` must lie in
/// `(0, 1]`.
pub fn ema(data: &[f64], alpha: f64) -> Result<Vec<f64>> {
    if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
        return Err(ReduceError::InvalidParameter {
            algorithm: "ema",
            name: "alpha",
            value: alpha,
            reason: "must be 0 (identity) or lie in (0, 1]",
        });
    }
    if alpha == 0.0 || data.is_empty() {
        return Ok(data.to_vec());
    }

    let mut result = Vec::with_capacity(data.len());
    let mut smoothed = data[0];
    result.push(smoothed);

    for &value in &data[1..] {
        smoothed = alpha * value + (1.0 - alpha) * smoothed;
        result.push(smoothed);
    }

    Ok(result)
}

/// Time-weighted EMA: each step decays by `1 - exp(-dx / tau)`, so irregular
/// spacing in `x` is honoured instead of assuming unit steps.
///
/// `tau == 0` is the identity. A zero or negative `dx` (duplicate timestamps)
/// gives zero decay and the previous smoothed value carries forward.
pub fn twema(x: &[f64], y: &[f64], tau: f64) -> Result<Vec<f64>> {
    ensure_same_len(x.len(), y.len())?;
    if !tau.is_finite() || tau < 0.0 {
        return Err(ReduceError::InvalidParameter {
            algorithm: "twema",
            name: "tau",
            value: tau,
            reason: "must be a finite, non-negative time constant",
        });
    }
    if tau == 0.0 || y.is_empty() {
        return Ok(y.to_vec());
    }

    let mut result = Vec::with_capacity(y.len());
    let mut smoothed = y[0];
    result.push(smoothed);

    for i in 1..y.len() {
        let dx = (x[i] - x[i - 1]).max(0.0);
        let alpha = 1.0 - (-dx / tau).exp();
        smoothed = alpha * y[i] + (1.0 - alpha) * smoothed;
        result.push(smoothed);
    }

    Ok(result)
}
