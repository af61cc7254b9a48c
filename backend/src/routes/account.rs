//! Routes for the authenticated account

use crate::auth::AuthAccount;
use crate::error::ApiResult;
use crate::services::AccountService;
use crate::state::AppState;
use axum::{extract::State, Json};
use freelancer_shared::AccountProfile;

/// GET /api/me
///
/// Requires a valid Bearer token in the Authorization header.
pub async fn me(
    State(state): State<AppState>,
    account: AuthAccount,
) -> ApiResult<Json<AccountProfile>> {
    let profile = AccountService::current_profile(state.db(), account).await?;
    Ok(Json(profile))
}
