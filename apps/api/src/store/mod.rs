//! Data store seam.
//!
//! Postings, profiles and accounts are owned by the backing store; this
//! service only reads snapshots. `AppState` holds an `Arc<dyn JobBoardStore>`
//! so handlers never see the concrete backend.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::cache::ReferenceKind;
use crate::errors::AppError;
use crate::models::posting::JobPosting;
use crate::models::profile::Profile;
use crate::models::user::UserAccount;

/// Optional location narrowing for the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedFilter {
    pub city: Option<String>,
    pub state: Option<String>,
}

#[async_trait]
pub trait JobBoardStore: Send + Sync {
    /// Open postings matching `filter`, in storage order.
    async fn list_postings(&self, filter: &FeedFilter) -> Result<Vec<JobPosting>, AppError>;

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AppError>;

    async fn get_account(&self, user_id: Uuid) -> Result<Option<UserAccount>, AppError>;

    async fn list_reference(&self, kind: ReferenceKind) -> Result<Vec<String>, AppError>;
}
