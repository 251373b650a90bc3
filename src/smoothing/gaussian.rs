use tracing::{trace, warn};

use crate::error::{ReduceError, Result};

/// Widest kernel half-width accepted, in samples.
pub const MAX_GAUSSIAN_RADIUS: usize = 1 << 20;

/// Normalized Gaussian weights for offsets `-radius..=radius`, with
/// `radius = ceil(3 * sigma)`.
///
/// A sigma so small that `2 * sigma^2` underflows collapses to the unit
/// kernel `[1.0]`. A radius above [`MAX_GAUSSIAN_RADIUS`] is rejected.
pub fn gaussian_kernel(sigma: f64) -> Result<Vec<f64>> {
    let reach = (3.0 * sigma).ceil();
    if !(reach <= MAX_GAUSSIAN_RADIUS as f64) {
        return Err(ReduceError::InvalidParameter {
            algorithm: "gaussian",
            name: "sigma",
            value: sigma,
            reason: "kernel radius ceil(3 * sigma) exceeds 1048576 samples",
        });
    }
    // Non-positive reach saturates to 0.
    let radius = reach as usize;
    let denom = 2.0 * sigma * sigma;
    if radius == 0 || denom == 0.0 {
        return Ok(vec![1.0]);
    }

    let size = radius
        .checked_mul(2)
        .and_then(|n| n.checked_add(1))
        .ok_or(ReduceError::InvalidParameter {
            algorithm: "gaussian",
            name: "sigma",
            value: sigma,
            reason: "kernel size overflows",
        })?;

    let mut kernel: Vec<f64> = (0..size)
        .map(|i| {
            let k = i as f64 - radius as f64;
            (-(k * k) / denom).exp()
        })
        .collect();

    let total: f64 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= total;
    }
    Ok(kernel)
}

/// Gaussian convolution with clamp-to-edge boundaries: samples past either
/// end replicate the nearest valid sample, so endpoints are not dimmed.
///
/// `sigma <= 0` is the identity, and so is a sigma too small to spread
/// weight onto any neighbour.
pub fn gaussian(data: &[f64], sigma: f64) -> Result<Vec<f64>> {
    if sigma.is_nan() || sigma == f64::INFINITY {
        return Err(ReduceError::InvalidParameter {
            algorithm: "gaussian",
            name: "sigma",
            value: sigma,
            reason: "must be finite",
        });
    }
    if sigma <= 0.0 {
        return Ok(data.to_vec());
    }

    let kernel = gaussian_kernel(sigma)?;
    if kernel.len() == 1 || data.is_empty() {
        return Ok(data.to_vec());
    }

    let radius = kernel.len() / 2;
    let last = data.len() - 1;
    trace!(sigma, radius, "gaussian kernel");
    if radius > data.len() {
        warn!(radius, points = data.len(), "gaussian kernel wider than series");
    }

    let result: Vec<f64> = (0..data.len())
        .map(|i| {
            kernel
                .iter()
                .enumerate()
                .map(|(k, w)| {
                    let idx = (i + k).saturating_sub(radius).min(last);
                    w * data[idx]
                })
                .sum::<f64>()
        })
        .collect();

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_shape() {
        let kernel = gaussian_kernel(1.0).unwrap();
        assert_eq!(kernel.len(), 7);
        assert!((kernel.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert_eq!(kernel[0], kernel[6]);
        assert!(kernel[3] > kernel[2]);
    }

    #[test]
    fn test_fractional_sigma_radius() {
        // ceil(3 * 0.5) = 2
        assert_eq!(gaussian_kernel(0.5).unwrap().len(), 5);
    }

    #[test]
    fn test_underflowing_sigma_gives_unit_kernel() {
        assert_eq!(gaussian_kernel(1e-200).unwrap(), vec![1.0]);
        assert_eq!(gaussian_kernel(0.0).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_radius_bound() {
        assert_eq!(gaussian_kernel(100_000.0).unwrap().len(), 600_001);
        assert!(gaussian_kernel(1e9).is_err());
        assert!(gaussian_kernel(1e300).is_err());
        assert!(gaussian_kernel(f64::MAX).is_err());
    }

    #[test]
    fn test_constant_series_is_unchanged() {
        let data = vec![3.0; 20];
        let result = gaussian(&data, 2.0).unwrap();
        for v in result {
            assert!((v - 3.0).abs() < 1e-12);
        }
    }
}
