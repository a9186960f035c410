//! Read-through cache for reference lists (states, CNH categories, skills).
//!
//! Lives beside the pure ranking and completeness code rather than inside it;
//! entries stay until explicitly invalidated.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::store::JobBoardStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    States,
    CnhCategories,
    Skills,
}

impl ReferenceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceKind::States => "states",
            ReferenceKind::CnhCategories => "cnh_categories",
            ReferenceKind::Skills => "skills",
        }
    }
}

#[derive(Default)]
struct Slots {
    values: HashMap<ReferenceKind, Arc<Vec<String>>>,
    /// Bumped on every invalidation. A load only fills its slot if no
    /// invalidation happened while it was in flight.
    generation: u64,
}

#[derive(Default)]
pub struct ReferenceCache {
    slots: RwLock<Slots>,
}

impl ReferenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached list, loading it from `store` on a miss.
    pub async fn get_or_load(
        &self,
        kind: ReferenceKind,
        store: &dyn JobBoardStore,
    ) -> Result<Arc<Vec<String>>, AppError> {
        let started_at = {
            let slots = self.slots.read().await;
            if let Some(values) = slots.values.get(&kind) {
                return Ok(values.clone());
            }
            slots.generation
        };

        let loaded = Arc::new(store.list_reference(kind).await?);

        let mut slots = self.slots.write().await;
        if slots.generation != started_at {
            debug!("Not caching {} loaded across an invalidation", kind.as_str());
            return Ok(loaded);
        }
        info!("Loaded {} {} into reference cache", loaded.len(), kind.as_str());
        // A concurrent miss may have filled the slot first; keep whichever landed.
        Ok(slots.values.entry(kind).or_insert(loaded).clone())
    }

    /// Drops one entry. Returns whether anything was cached.
    pub async fn invalidate(&self, kind: ReferenceKind) -> bool {
        let mut slots = self.slots.write().await;
        slots.generation += 1;
        let removed = slots.values.remove(&kind).is_some();
        info!("Invalidated reference cache for {} (was cached: {removed})", kind.as_str());
        removed
    }

    pub async fn invalidate_all(&self) {
        let mut slots = self.slots.write().await;
        slots.generation += 1;
        slots.values.clear();
        info!("Invalidated all reference cache entries");
    }
}
