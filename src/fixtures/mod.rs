//! # Fixtures Module
//!
//! Loads the household fixtures that drive the journeys and splits them
//! between parallel load generator instances.
//!
//! The fixture file is a CSV with a header row. Instance `n` of `m` owns a
//! contiguous block of rows computed by [`compute_range`], so no two
//! instances ever submit the same access code at the same time and no
//! coordination is needed while the run is in progress.
//!
//! ```rust
//! use census_rh_perf::fixtures::{compute_range, PartitionRange};
//!
//! // 10 rows across 5 instances: the third owns rows 4 and 5.
//! assert_eq!(compute_range(3, 5, 10).unwrap(), PartitionRange { first: 4, last: 5 });
//! ```
//!
//! The loaded [`FixtureSet`] is immutable and shared by every goose user.

mod error;
mod partition;
mod record;
mod set;

#[cfg(test)]
mod tests;

pub use error::FixtureError;
pub use partition::{compute_range, count_records, coverage_gaps, load_range, PartitionRange};
pub use record::FixtureRecord;
pub use set::{FixtureSet, Selection};
