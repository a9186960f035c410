use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::posting::JobPosting;
use crate::ranking::importance::importance_of;
use crate::ranking::RankingError;

/// A posting paired with the score it was ordered by. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPosting {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub importance_score: f64,
}

/// Scores every posting and returns copies ordered by score, highest first.
///
/// Ties keep their input order. Any invalid record fails the whole call.
pub fn rank_postings(
    postings: &[JobPosting],
    now: DateTime<Utc>,
) -> Result<Vec<RankedPosting>, RankingError> {
    let mut ranked = postings
        .iter()
        .map(|posting| {
            Ok(RankedPosting {
                importance_score: importance_of(posting, now)?,
                posting: posting.clone(),
            })
        })
        .collect::<Result<Vec<_>, RankingError>>()?;

    // `sort_by` is stable, which keeps equal scores (all premium, all zero) in input order.
    ranked.sort_by(|a, b| b.importance_score.total_cmp(&a.importance_score));
    Ok(ranked)
}

/// Same ordering as [`rank_postings`] without the scores.
pub fn sort_by_importance(
    postings: &[JobPosting],
    now: DateTime<Utc>,
) -> Result<Vec<JobPosting>, RankingError> {
    Ok(rank_postings(postings, now)?
        .into_iter()
        .map(|ranked| ranked.posting)
        .collect())
}

/// Splits records into those that pass ranking validation and the errors for
/// those that do not. Used by callers whose policy is to drop bad rows.
pub fn partition_valid(
    postings: Vec<JobPosting>,
    now: DateTime<Utc>,
) -> (Vec<JobPosting>, Vec<RankingError>) {
    let mut valid = Vec::with_capacity(postings.len());
    let mut rejected = Vec::new();
    for posting in postings {
        match importance_of(&posting, now) {
            Ok(_) => valid.push(posting),
            Err(e) => rejected.push(e),
        }
    }
    (valid, rejected)
}
