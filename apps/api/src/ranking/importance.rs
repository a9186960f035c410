//! Importance score: recency-decayed popularity with a premium override.
//!
//! score = likes / (hours + 2)^1.3 × freshness multiplier
//!
//! The decay is super-linear so fresh postings with a handful of likes can
//! outrank stale ones, while heavily liked older postings still hold up.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::models::posting::JobPosting;
use crate::ranking::RankingError;

const DECAY_EXPONENT: f64 = 1.3;
const AGE_OFFSET_HOURS: f64 = 2.0;

/// Score assigned to premium postings: the largest finite `f64`.
pub const PREMIUM_SCORE: f64 = f64::MAX;

/// (age upper bound in hours, multiplier). First match wins.
const FRESHNESS_TIERS: &[(f64, f64)] = &[(1.0, 3.0), (3.0, 2.0), (6.0, 1.5)];

/// Pure importance score for already-validated inputs.
pub fn compute_importance(
    likes_count: u64,
    created_at: DateTime<Utc>,
    is_premium: bool,
    now: DateTime<Utc>,
) -> f64 {
    if is_premium {
        return PREMIUM_SCORE;
    }
    let hours = hours_since_post(created_at, now);
    let base = likes_count as f64 / (hours + AGE_OFFSET_HOURS).powf(DECAY_EXPONENT);
    base * freshness_multiplier(hours)
}

/// Fractional hours between `created_at` and `now`, clamped at zero for
/// future-dated postings.
pub fn hours_since_post(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let millis = (now - created_at).num_milliseconds().max(0);
    millis as f64 / 3_600_000.0
}

fn freshness_multiplier(hours: f64) -> f64 {
    FRESHNESS_TIERS
        .iter()
        .find(|(max_hours, _)| hours < *max_hours)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0)
}

/// Validated ranking inputs extracted from a raw posting record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingInput {
    pub likes_count: u64,
    pub created_at: DateTime<Utc>,
    pub is_premium: bool,
}

impl TryFrom<&JobPosting> for RankingInput {
    type Error = RankingError;

    fn try_from(posting: &JobPosting) -> Result<Self, Self::Error> {
        let record = posting.id.to_string();

        let likes = posting
            .likes_count
            .ok_or_else(|| RankingError::invalid(&record, "likes_count is missing"))?;
        let likes_count = u64::try_from(likes).map_err(|_| {
            RankingError::invalid(&record, format!("likes_count is negative ({likes})"))
        })?;

        let raw = posting
            .created_at
            .as_deref()
            .ok_or_else(|| RankingError::invalid(&record, "created_at is missing"))?;
        let created_at = parse_timestamp(raw).ok_or_else(|| {
            RankingError::invalid(&record, format!("created_at '{raw}' is not a valid timestamp"))
        })?;

        Ok(RankingInput {
            likes_count,
            created_at,
            is_premium: posting.premium(),
        })
    }
}

/// Validates a posting and scores it at `now`.
pub fn importance_of(posting: &JobPosting, now: DateTime<Utc>) -> Result<f64, RankingError> {
    let input = RankingInput::try_from(posting)?;
    Ok(compute_importance(
        input.likes_count,
        input.created_at,
        input.is_premium,
        now,
    ))
}

/// Accepts RFC 3339 and the Postgres text rendering of `timestamptz`
/// (`2024-05-01 10:00:00.123+00`). Offset-less values are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}
