use super::error::FixtureError;
use super::partition::{compute_range, count_records, load_range, PartitionRange};
use super::record::FixtureRecord;
use crate::config::InstanceConfig;
use rand::Rng;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{info, warn};

/// How journeys pick the fixture for their next iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Uniformly at random, with replacement.
    #[default]
    Random,
    /// File order, wrapping around at the end of the partition.
    Sequential,
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Selection::Random),
            "sequential" => Ok(Selection::Sequential),
            other => Err(format!("unknown fixture selection '{}'", other)),
        }
    }
}

/// The rows this instance owns, read-only for the whole run.
///
/// Shared between goose users behind an `Arc`; the only mutable state is the
/// atomic cursor used by [`FixtureSet::pick_sequential`].
#[derive(Debug)]
pub struct FixtureSet {
    records: Vec<FixtureRecord>,
    range: PartitionRange,
    total_records: usize,
    cursor: AtomicUsize,
}

impl FixtureSet {
    /// Wrap already loaded rows. Fails if `records` is empty.
    pub fn new(
        records: Vec<FixtureRecord>,
        range: PartitionRange,
        total_records: usize,
    ) -> Result<Self, FixtureError> {
        if records.is_empty() {
            return Err(FixtureError::Empty { range });
        }
        Ok(Self {
            records,
            range,
            total_records,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Count the rows of `path`, work out this instance's range and load it.
    pub fn load(path: &Path, instance: InstanceConfig) -> Result<Self, FixtureError> {
        let open = || {
            File::open(path).map_err(|source| FixtureError::Open {
                path: path.to_path_buf(),
                source,
            })
        };

        let total_records = count_records(open()?)?;
        let range = compute_range(instance.instance_num, instance.max_instances, total_records)?;
        let records = load_range(open()?, range)?;

        info!(
            file = %path.display(),
            instance_num = instance.instance_num,
            max_instances = instance.max_instances,
            total_records,
            first = range.first,
            last = range.last,
            loaded = records.len(),
            "fixture partition loaded"
        );

        Self::new(records, range, total_records)
    }

    pub fn records(&self) -> &[FixtureRecord] {
        &self.records
    }

    pub fn range(&self) -> PartitionRange {
        self.range
    }

    /// Data rows in the whole file, not just this partition.
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn pick(&self, selection: Selection) -> &FixtureRecord {
        match selection {
            Selection::Random => self.pick_random(),
            Selection::Sequential => self.pick_sequential(),
        }
    }

    pub fn pick_random(&self) -> &FixtureRecord {
        let index = rand::rng().random_range(0..self.records.len());
        &self.records[index]
    }

    /// Next row in file order, shared across all users of this set.
    ///
    /// Wraps to the first row once the partition is used up and logs a
    /// warning each time it does.
    pub fn pick_sequential(&self) -> &FixtureRecord {
        let ticket = self.cursor.fetch_add(1, Ordering::Relaxed);
        let rows = self.records.len();
        let index = ticket % rows;
        if index == 0 && ticket > 0 {
            warn!(
                pass = ticket / rows + 1,
                rows,
                first = self.range.first,
                last = self.range.last,
                "sequential fixture selection exhausted its partition, wrapping around"
            );
        }
        &self.records[index]
    }
}
