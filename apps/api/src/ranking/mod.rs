// Ranking Engine: importance scoring and feed ordering.
// Pure functions over in-memory snapshots; the evaluation instant is always passed in.

pub mod feed;
pub mod handlers;
pub mod importance;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("Invalid posting {record}: {reason}")]
    InvalidInput { record: String, reason: String },
}

impl RankingError {
    pub fn invalid(record: &str, reason: impl Into<String>) -> Self {
        RankingError::InvalidInput {
            record: record.to_string(),
            reason: reason.into(),
        }
    }
}
