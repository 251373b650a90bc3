//! Point lookups on sparse, axis-aligned series.
//!
//! Tooltip code calls [`interpolate`] once per hovered row; nothing here ever
//! fills a whole series eagerly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data_types::Sample;
use crate::error::{ensure_same_len, ReduceError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    /// Straight line between the nearest present neighbours on both sides.
    #[default]
    Linear,
    /// Forward fill: the nearest present value before the index.
    Last,
}

impl InterpolationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationMode::Linear => "linear",
            InterpolationMode::Last => "last",
        }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpolationMode {
    type Err = ReduceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(InterpolationMode::Linear),
            "last" => Ok(InterpolationMode::Last),
            other => Err(ReduceError::UnknownMode(other.to_string())),
        }
    }
}

/// Value of `y` at `index`, filling a gap according to `mode`.
///
/// A present `y[index]` is returned verbatim. `Ok(None)` means the value
/// cannot be filled: no earlier sample for `Last`, or a missing neighbour
/// on either side for `Linear` (no extrapolation past the series edges).
pub fn interpolate(
    x: &[f64],
    y: &[Sample],
    index: usize,
    mode: InterpolationMode,
) -> Result<Sample> {
    ensure_same_len(x.len(), y.len())?;
    if index >= y.len() {
        return Err(ReduceError::IndexOutOfBounds { index, len: y.len() });
    }
    if let Some(value) = y[index] {
        return Ok(Some(value));
    }

    let Some((left, y0)) = previous_present(y, index) else {
        return Ok(None);
    };

    match mode {
        InterpolationMode::Last => Ok(Some(y0)),
        InterpolationMode::Linear => {
            let Some((right, y1)) = next_present(y, index) else {
                return Ok(None);
            };
            let (x0, x1) = (x[left], x[right]);
            if x1 == x0 {
                return Ok(Some(y0));
            }
            Ok(Some(y0 + (y1 - y0) * (x[index] - x0) / (x1 - x0)))
        }
    }
}

fn previous_present(y: &[Sample], index: usize) -> Option<(usize, f64)> {
    y[..index]
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, v)| v.map(|v| (i, v)))
}

fn next_present(y: &[Sample], index: usize) -> Option<(usize, f64)> {
    y.iter()
        .enumerate()
        .skip(index + 1)
        .find_map(|(i, v)| v.map(|v| (i, v)))
}
