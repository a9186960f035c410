pub mod health;
pub mod reference;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::onboarding::handlers as onboarding;
use crate::ranking::handlers as ranking;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Feed
        .route("/api/v1/feed", get(ranking::handle_feed))
        // Onboarding
        .route(
            "/api/v1/profiles/:user_id/completeness",
            get(onboarding::handle_profile_completeness),
        )
        .route("/api/v1/onboarding/:user_id", get(onboarding::handle_onboarding))
        // Reference data
        .route(
            "/api/v1/reference",
            delete(reference::handle_invalidate_all_references),
        )
        .route(
            "/api/v1/reference/:kind",
            get(reference::handle_get_reference).delete(reference::handle_invalidate_reference),
        )
        .with_state(state)
}
