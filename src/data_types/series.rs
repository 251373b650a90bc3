use serde::{Deserialize, Serialize};

use crate::error::{ensure_same_len, Result};

/// Paired `x`/`y` arrays for one metric.
///
/// `x` is expected to be ascending (step or wall time). The engine never
/// sorts it; callers that feed unsorted coordinates get unspecified output.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        ensure_same_len(x.len(), y.len())?;
        Ok(Self { x, y })
    }

    /// Builds a series from `(x, y)` pairs.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (x, y) = points.into_iter().unzip();
        Self { x, y }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}

/// A sample that may be absent. `None` marks a coordinate where a run has no
/// observation; it is never encoded as `NaN`.
pub type Sample = Option<f64>;
