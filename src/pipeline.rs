//! Raw series -> optional smoothing -> reduction, as one call.

use eyre::WrapErr;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data_types::{DownsampleResult, EnvelopeResult, Series};
use crate::decimation::{decimate_envelope, decimate_lttb};
use crate::error::Result;
use crate::smoothing::SmoothingConfig;

pub const DEFAULT_TARGET_POINTS: i64 = 1000;

fn default_target_points() -> i64 {
    DEFAULT_TARGET_POINTS
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionConfig {
    /// Applied before reduction when set.
    #[serde(default)]
    pub smoothing: Option<SmoothingConfig>,
    /// Maximum output points; zero or negative disables reduction.
    #[serde(default = "default_target_points")]
    pub target_points: i64,
    /// Also emit the per-bucket min/max band.
    #[serde(default)]
    pub envelope: bool,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            smoothing: None,
            target_points: DEFAULT_TARGET_POINTS,
            envelope: false,
        }
    }
}

impl ReductionConfig {
    pub fn from_json(json: &str) -> eyre::Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("failed to parse reduction config")?;
        if let Some(smoothing) = &config.smoothing {
            smoothing
                .validate()
                .wrap_err("invalid smoothing in reduction config")?;
        }
        Ok(config)
    }

    pub fn with_smoothing(mut self, smoothing: SmoothingConfig) -> Self {
        self.smoothing = Some(smoothing);
        self
    }

    pub fn with_target_points(mut self, target_points: i64) -> Self {
        self.target_points = target_points;
        self
    }

    pub fn with_envelope(mut self, envelope: bool) -> Self {
        self.envelope = envelope;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Reduced {
    Line(DownsampleResult),
    Envelope(EnvelopeResult),
}

impl Reduced {
    pub fn x(&self) -> &[f64] {
        match self {
            Reduced::Line(r) => &r.x,
            Reduced::Envelope(r) => &r.x,
        }
    }

    pub fn y(&self) -> &[f64] {
        match self {
            Reduced::Line(r) => &r.y,
            Reduced::Envelope(r) => &r.y,
        }
    }

    pub fn len(&self) -> usize {
        self.x().len()
    }

    pub fn is_empty(&self) -> bool {
        self.x().is_empty()
    }
}

/// Smooths (if configured) then reduces one series.
///
/// With smoothing on, the envelope band is taken over the smoothed values,
/// i.e. the line that is actually drawn.
pub fn reduce(series: &Series, config: &ReductionConfig) -> Result<Reduced> {
    let x = series.x();
    let smoothed;
    let y = match &config.smoothing {
        Some(smoothing) => {
            smoothed = smoothing.apply(x, series.y())?;
            smoothed.as_slice()
        }
        None => series.y(),
    };

    if config.envelope {
        decimate_envelope(x, y, config.target_points).map(Reduced::Envelope)
    } else {
        decimate_lttb(x, y, config.target_points).map(Reduced::Line)
    }
}

/// Reduces independent series in parallel, results in input order.
pub fn reduce_many(series: &[Series], config: &ReductionConfig) -> Vec<Result<Reduced>> {
    debug!(series = series.len(), target = config.target_points, "batch reduction");
    series.par_iter().map(|s| reduce(s, config)).collect()
}
