//! Smoothing filters applied to a series before (or instead of) reduction.
//!
//! Every filter is O(n) except the Gaussian, which is O(n * radius). Output
//! length always equals input length.

pub mod ema;
pub mod gaussian;
pub mod running;

use std::fmt;
use std::str::FromStr;

use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_same_len, ReduceError, Result};

pub use ema::{ema, twema};
pub use gaussian::{gaussian, gaussian_kernel};
pub use running::running_average;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmoothingAlgorithm {
    /// Exponential moving average, parameter is the decay `alpha`.
    #[default]
    Ema,
    /// Time-weighted EMA, parameter is the time constant `tau`.
    Twema,
    /// Gaussian convolution, parameter is the kernel `sigma`.
    Gaussian,
    /// Trailing running average, parameter is the window size.
    Running,
}

impl SmoothingAlgorithm {
    pub const ALL: [SmoothingAlgorithm; 4] = [
        SmoothingAlgorithm::Ema,
        SmoothingAlgorithm::Twema,
        SmoothingAlgorithm::Gaussian,
        SmoothingAlgorithm::Running,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SmoothingAlgorithm::Ema => "ema",
            SmoothingAlgorithm::Twema => "twema",
            SmoothingAlgorithm::Gaussian => "gaussian",
            SmoothingAlgorithm::Running => "running",
        }
    }
}

impl fmt::Display for SmoothingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SmoothingAlgorithm {
    type Err = ReduceError;

    fn from_str(s: &str) -> Result<Self> {
        SmoothingAlgorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ReduceError::UnknownAlgorithm(s.to_string()))
    }
}

/// Algorithm plus its algorithm-specific parameter.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SmoothingConfig {
    pub algorithm: SmoothingAlgorithm,
    pub parameter: f64,
}

impl SmoothingConfig {
    pub fn new(algorithm: SmoothingAlgorithm, parameter: f64) -> Self {
        Self { algorithm, parameter }
    }

    /// Parses a config such as `{"algorithm": "gaussian", "parameter": 2.5}`
    /// and checks the parameter against the algorithm's range.
    pub fn from_json(json: &str) -> eyre::Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("failed to parse smoothing config")?;
        config
            .validate()
            .wrap_err_with(|| format!("invalid smoothing config for {}", config.algorithm))?;
        Ok(config)
    }

    /// Runs the filter over an empty input, which checks the parameter
    /// without touching any data.
    pub fn validate(&self) -> Result<()> {
        smooth(&[], &[], self.algorithm, self.parameter).map(|_| ())
    }

    pub fn apply(&self, x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
        smooth(x, y, self.algorithm, self.parameter)
    }
}

/// Smooths `y` (sampled at `x`) with the chosen algorithm.
///
/// Fails on mismatched lengths or an out-of-range parameter; each
/// algorithm's neutral parameter returns `y` unchanged.
pub fn smooth(
    x: &[f64],
    y: &[f64],
    algorithm: SmoothingAlgorithm,
    parameter: f64,
) -> Result<Vec<f64>> {
    ensure_same_len(x.len(), y.len())?;
    if !y.is_empty() {
        debug!(%algorithm, parameter, points = y.len(), "smoothing");
    }

    match algorithm {
        SmoothingAlgorithm::Ema => ema(y, parameter),
        SmoothingAlgorithm::Twema => twema(x, y, parameter),
        SmoothingAlgorithm::Gaussian => gaussian(y, parameter),
        SmoothingAlgorithm::Running => running_average(y, parameter),
    }
}
