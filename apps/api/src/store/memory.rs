use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::cache::ReferenceKind;
use crate::errors::AppError;
use crate::models::posting::JobPosting;
use crate::models::profile::Profile;
use crate::models::user::UserAccount;
use crate::store::{FeedFilter, JobBoardStore};

/// In-memory store for handler and cache tests.
#[derive(Default)]
pub struct MemoryStore {
    pub postings: Vec<JobPosting>,
    pub profiles: HashMap<Uuid, Profile>,
    pub accounts: HashMap<Uuid, UserAccount>,
    pub reference: HashMap<ReferenceKind, Vec<String>>,
    pub reference_loads: AtomicUsize,
}

impl MemoryStore {
    pub fn reference_loads(&self) -> usize {
        self.reference_loads.load(Ordering::SeqCst)
    }
}

fn matches(posting: &JobPosting, key: &str, wanted: &Option<String>) -> bool {
    match wanted {
        None => true,
        Some(w) => posting.extra.get(key) == Some(&Value::String(w.clone())),
    }
}

#[async_trait]
impl JobBoardStore for MemoryStore {
    async fn list_postings(&self, filter: &FeedFilter) -> Result<Vec<JobPosting>, AppError> {
        Ok(self
            .postings
            .iter()
            .filter(|p| matches(p, "city", &filter.city) && matches(p, "state", &filter.state))
            .cloned()
            .collect())
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        Ok(self.profiles.get(&user_id).cloned())
    }

    async fn get_account(&self, user_id: Uuid) -> Result<Option<UserAccount>, AppError> {
        Ok(self.accounts.get(&user_id).cloned())
    }

    async fn list_reference(&self, kind: ReferenceKind) -> Result<Vec<String>, AppError> {
        self.reference_loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.reference.get(&kind).cloned().unwrap_or_default())
    }
}
