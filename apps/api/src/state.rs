use std::sync::Arc;

use crate::cache::ReferenceCache;
use crate::clock::Clock;
use crate::config::Config;
use crate::store::JobBoardStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Data store backend. Default: PgStore.
    pub store: Arc<dyn JobBoardStore>,
    pub reference_cache: Arc<ReferenceCache>,
    /// Evaluation instant for ranking. SystemClock outside tests.
    pub clock: Arc<dyn Clock>,
}
