use super::partition::PartitionRange;
use crate::config::ConfigurationError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to open fixture file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read fixture data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed fixture data: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Partition(#[from] ConfigurationError),

    #[error("fixture rows {range} could not be read, file ended early")]
    Empty { range: PartitionRange },
}
