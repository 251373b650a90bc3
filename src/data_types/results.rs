use serde::{Deserialize, Serialize};

/// Output of LTTB reduction: a subset of the input points, first and last kept.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct DownsampleResult {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl DownsampleResult {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// LTTB reduction plus the true min/max of every raw sample folded into each
/// output point, for drawing a shaded band behind the line.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeResult {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub y_min: Vec<f64>,
    pub y_max: Vec<f64>,
}

impl EnvelopeResult {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            y_min: Vec::with_capacity(capacity),
            y_max: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, x: f64, y: f64, y_min: f64, y_max: f64) {
        self.x.push(x);
        self.y.push(y);
        self.y_min.push(y_min);
        self.y_max.push(y_max);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Drops the band, keeping only the line.
    pub fn into_line(self) -> DownsampleResult {
        DownsampleResult { x: self.x, y: self.y }
    }
}
