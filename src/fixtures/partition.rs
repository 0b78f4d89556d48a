use super::error::FixtureError;
use super::record::FixtureRecord;
use crate::config::ConfigurationError;
use std::fmt;
use std::io::{BufRead, BufReader, Read};

/// Inclusive, zero-based range of data rows owned by one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionRange {
    pub first: usize,
    pub last: usize,
}

impl PartitionRange {
    pub fn contains(&self, index: usize) -> bool {
        (self.first..=self.last).contains(&index)
    }

    /// Number of rows in the range; never zero.
    pub fn row_count(&self) -> usize {
        self.last + 1 - self.first
    }
}

impl fmt::Display for PartitionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.first, self.last)
    }
}

/// Number of data rows: physical lines minus the header line.
pub fn count_records<R: Read>(source: R) -> Result<usize, FixtureError> {
    let mut lines = 0usize;
    for line in BufReader::new(source).split(b'\n') {
        line?;
        lines += 1;
    }
    Ok(lines.saturating_sub(1))
}

/// Rows owned by `instance_num` (1-based) out of `max_instances`.
///
/// Proportional split with truncation at both ends:
/// `first = floor(per * (n - 1))`, `last = floor(per * n) - 1` where
/// `per = total_records / max_instances` as a real number. The truncation can
/// leave trailing rows unowned for some inputs; [`coverage_gaps`] lists them.
pub fn compute_range(
    instance_num: usize,
    max_instances: usize,
    total_records: usize,
) -> Result<PartitionRange, ConfigurationError> {
    if instance_num == 0 || instance_num > max_instances {
        return Err(ConfigurationError::InstanceOutOfRange {
            instance_num,
            max_instances,
        });
    }
    if max_instances > total_records {
        return Err(ConfigurationError::TooManyInstances {
            max_instances,
            total_records,
        });
    }

    let per_instance = total_records as f64 / max_instances as f64;
    let first = (per_instance * (instance_num - 1) as f64).floor() as usize;
    let last = ((per_instance * instance_num as f64).floor() as usize).saturating_sub(1);

    Ok(PartitionRange { first, last })
}

/// Row indices no instance owns when `total_records` is split `max_instances` ways.
pub fn coverage_gaps(
    max_instances: usize,
    total_records: usize,
) -> Result<Vec<usize>, ConfigurationError> {
    if max_instances == 0 {
        return Err(ConfigurationError::Invalid {
            name: "MAX_INSTANCES",
            value: max_instances.to_string(),
            reason: "expected a positive integer",
        });
    }
    let mut owned = vec![false; total_records];
    for instance_num in 1..=max_instances {
        let range = compute_range(instance_num, max_instances, total_records)?;
        for index in range.first..=range.last.min(total_records.saturating_sub(1)) {
            owned[index] = true;
        }
    }
    Ok(owned
        .iter()
        .enumerate()
        .filter(|(_, owned)| !**owned)
        .map(|(index, _)| index)
        .collect())
}

/// Read the rows of `range` from a CSV source with a header line.
///
/// Rows before the range are skipped without being decoded and reading stops
/// after the last owned row.
pub fn load_range<R: Read>(
    source: R,
    range: PartitionRange,
) -> Result<Vec<FixtureRecord>, FixtureError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let headers = reader.headers()?.clone();

    let mut records = Vec::with_capacity(range.row_count());
    for (index, row) in reader.records().enumerate() {
        if index > range.last {
            break;
        }
        let row = row?;
        if range.contains(index) {
            records.push(row.deserialize(Some(&headers))?);
        }
    }
    Ok(records)
}
