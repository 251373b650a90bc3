use crate::error::{ReduceError, Result};

/// Trailing running average over a window of `window` samples (rounded to
/// the nearest integer).
///
/// Early samples average over what is available, `min(i + 1, W)` values,
/// rather than being left undefined. A window of 1 or less is the identity.
pub fn running_average(data: &[f64], window: f64) -> Result<Vec<f64>> {
    if !window.is_finite() {
        return Err(ReduceError::InvalidParameter {
            algorithm: "running",
            name: "window",
            value: window,
            reason: "must be finite",
        });
    }
    let rounded = window.round();
    if rounded <= 1.0 || data.is_empty() {
        return Ok(data.to_vec());
    }
    let window = rounded as usize;

    let mut result = Vec::with_capacity(data.len());
    let mut sum = 0.0;

    for (i, &value) in data.iter().enumerate() {
        sum += value;
        if i >= window {
            sum -= data[i - window];
        }
        result.push(sum / (i + 1).min(window) as f64);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_average() {
        let result = running_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3.0).unwrap();

        assert_eq!(result.len(), 5);
        assert!((result[0] - 1.0).abs() < 1e-12); // First value is just itself
        assert!((result[1] - 1.5).abs() < 1e-12);
        assert!((result[2] - 2.0).abs() < 1e-12);
        assert!((result[3] - 3.0).abs() < 1e-12);
        assert!((result[4] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_window_rounds_to_nearest() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(
            running_average(&data, 2.6).unwrap(),
            running_average(&data, 3.0).unwrap()
        );
        assert_eq!(running_average(&data, 1.4).unwrap(), data.to_vec());
    }
}
