//! chart_reduce: client-side reduction of large metric series for charting.
//!
//! Pure, synchronous functions over in-memory arrays: LTTB downsampling, a
//! min/max envelope that never loses an extremum, four smoothing filters,
//! and gap filling for tooltip lookups on aligned runs.

pub mod alignment;
pub mod data_types;
pub mod decimation;
pub mod error;
pub mod interpolation;
pub mod pipeline;
pub mod simd;
pub mod smoothing;

pub use alignment::AlignedMultiSeries;
pub use data_types::{DownsampleResult, EnvelopeResult, Sample, Series};
pub use decimation::{decimate_envelope as downsample_with_envelope, decimate_lttb as downsample};
pub use error::{ReduceError, Result};
pub use interpolation::{interpolate, InterpolationMode};
pub use pipeline::{reduce, reduce_many, Reduced, ReductionConfig};
pub use smoothing::{smooth, SmoothingAlgorithm, SmoothingConfig};
