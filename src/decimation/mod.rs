pub mod bucketing;
pub mod common;
pub mod envelope;
pub mod lttb;

pub use bucketing::{buckets_for_target, interior_buckets, lookahead_range};
pub use common::{centroid, plan_reduction, scan_bucket, BucketScan, ReductionPlan};
pub use envelope::decimate_envelope;
pub use lttb::decimate_lttb;
