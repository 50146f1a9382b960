//! Error handling for the catch statistics engine

use thiserror::Error;

/// Statistics engine error types
///
/// Aggregation itself never fails: a malformed timestamp is recovered
/// per record (the record is skipped and counted). This type exists for
/// callers that resolve stored timestamps themselves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Malformed timestamp: {raw}")]
    MalformedTimestamp { raw: String },
}

/// Result type alias for the statistics engine
pub type StatsResult<T> = Result<T, StatsError>;
