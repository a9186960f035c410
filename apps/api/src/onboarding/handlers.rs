//! Axum route handlers for the onboarding gate and profile completeness.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserType;
use crate::onboarding::completeness::{
    completeness_report, is_complete, next_missing_field, CompletenessReport, ProfileField,
};
use crate::onboarding::gate::OnboardingState;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OnboardingResponse {
    pub state: OnboardingState,
    pub route: Option<&'static str>,
    /// Set for candidates who cleared the account gate but still have profile gaps.
    pub next_profile_field: Option<ProfileField>,
}

/// GET /api/v1/profiles/:user_id/completeness
///
/// A missing profile is reported as incomplete, not as 404.
pub async fn handle_profile_completeness(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<CompletenessReport>, AppError> {
    let profile = state.store.get_profile(user_id).await?;
    let report = completeness_report(profile.as_ref());
    if let Some(field) = report.next_field {
        debug!("Profile {user_id} incomplete, next field: {}", field.as_str());
    }
    Ok(Json(report))
}

/// GET /api/v1/onboarding/:user_id
///
/// Resolves the account gate; candidates past it are also pointed at their
/// first missing profile field, one step at a time.
pub async fn handle_onboarding(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<OnboardingResponse>, AppError> {
    let account = state.store.get_account(user_id).await?;
    let gate = OnboardingState::Checking.advance(account.as_ref());
    debug_assert!(gate.is_terminal());

    let is_candidate = account
        .as_ref()
        .and_then(|a| a.user_type)
        .is_some_and(|t| t == UserType::Candidate);

    let next_profile_field = if gate == OnboardingState::Complete && is_candidate {
        let profile = state.store.get_profile(user_id).await?;
        if is_complete(profile.as_ref()) {
            debug!("User {user_id} has a complete profile");
            None
        } else {
            next_missing_field(profile.as_ref())
        }
    } else {
        None
    };

    Ok(Json(OnboardingResponse {
        state: gate,
        route: gate.route(),
        next_profile_field,
    }))
}
