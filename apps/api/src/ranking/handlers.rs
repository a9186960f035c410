//! Axum route handlers for the ranked feed.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::posting::JobPosting;
use crate::ranking::feed::{partition_valid, sort_by_importance};
use crate::state::AppState;
use crate::store::FeedFilter;

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub limit: Option<usize>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub postings: Vec<JobPosting>,
    /// Rankable postings before `limit` was applied.
    pub total: usize,
    /// Records skipped because they failed ranking validation.
    pub dropped: usize,
}

/// GET /api/v1/feed
///
/// Ranks every open posting matching the filter, most important first.
/// Malformed records are logged and left out instead of failing the page.
pub async fn handle_feed(
    State(state): State<AppState>,
    Query(params): Query<FeedQuery>,
) -> Result<Json<FeedResponse>, AppError> {
    let limit = resolve_limit(params.limit, &state.config)?;
    let filter = FeedFilter {
        city: params.city,
        state: params.state,
    };

    let records = state.store.list_postings(&filter).await?;
    let now = state.clock.now();

    let (valid, rejected) = partition_valid(records, now);
    for err in &rejected {
        warn!("Dropping posting from feed: {err}");
    }

    let mut postings = sort_by_importance(&valid, now)?;
    let total = postings.len();
    postings.truncate(limit);

    info!(
        "Feed ranked {total} postings (dropped {}, returning {})",
        rejected.len(),
        postings.len()
    );

    Ok(Json(FeedResponse {
        postings,
        total,
        dropped: rejected.len(),
    }))
}

fn resolve_limit(requested: Option<usize>, config: &Config) -> Result<usize, AppError> {
    match requested {
        Some(0) => Err(AppError::Validation("limit must be at least 1".to_string())),
        Some(n) => Ok(n.min(config.feed_max_limit)),
        None => Ok(config.feed_default_limit),
    }
}
