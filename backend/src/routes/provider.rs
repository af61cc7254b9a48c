//! Provider account routes

use crate::error::ApiResult;
use crate::services::ProviderService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use freelancer_shared::{
    LoginRequest, LoginResponse, MessageResponse, ProviderProfile, RegisterProviderRequest,
};

/// Create provider routes
pub fn provider_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// POST /api/provider/register
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterProviderRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(req) = payload?;
    ProviderService::register(state.db(), state.passwords(), req).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registration successful")),
    ))
}

/// POST /api/provider/login
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse<ProviderProfile>>> {
    let Json(req) = payload?;
    let response = ProviderService::login(state.db(), state.jwt(), req).await?;
    Ok(Json(response))
}
