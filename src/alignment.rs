//! Multiple runs of one metric resampled onto a shared `x` axis.
//!
//! Runs logged at different frequencies rarely share coordinates. Aligning
//! them puts every run on the union of all coordinates with `None` wherever
//! a run has no sample, and tooltip lookups fill those gaps on demand.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data_types::{Sample, Series};
use crate::error::{ReduceError, Result};
use crate::interpolation::{interpolate, InterpolationMode};

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct AlignedMultiSeries {
    /// Sorted union of every run's coordinates.
    pub x: Vec<f64>,
    /// One column per run, parallel to `x`.
    pub runs: Vec<Vec<Sample>>,
}

impl AlignedMultiSeries {
    /// Aligns `runs` onto the union of their coordinates.
    ///
    /// Equal coordinates from different runs share one row. If a single run
    /// repeats a coordinate, its last sample there wins. `NaN` coordinates
    /// cannot be placed on the axis and are dropped.
    pub fn align(runs: &[Series]) -> Self {
        let mut x: Vec<f64> = runs
            .iter()
            .flat_map(|run| run.x().iter().copied())
            .filter(|v| !v.is_nan())
            .collect();
        x.sort_by(f64::total_cmp);
        x.dedup();

        let columns = runs
            .iter()
            .map(|run| {
                let mut column = vec![None; x.len()];
                for (&vx, &vy) in run.x().iter().zip(run.y()) {
                    let row = x.partition_point(|p| *p < vx);
                    if row < x.len() && x[row] == vx {
                        column[row] = Some(vy);
                    }
                }
                column
            })
            .collect();

        debug!(runs = runs.len(), rows = x.len(), "aligned runs");
        Self { x, runs: columns }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Tooltip value of one run at `index`.
    pub fn lookup(&self, run: usize, index: usize, mode: InterpolationMode) -> Result<Sample> {
        let column = self.runs.get(run).ok_or(ReduceError::IndexOutOfBounds {
            index: run,
            len: self.runs.len(),
        })?;
        interpolate(&self.x, column, index, mode)
    }

    /// Tooltip values of every run at `index`, in run order.
    pub fn lookup_row(&self, index: usize, mode: InterpolationMode) -> Result<Vec<Sample>> {
        self.runs
            .iter()
            .map(|column| interpolate(&self.x, column, index, mode))
            .collect()
    }
}
