//! Seeker account, profile and search routes

use crate::error::{ApiError, ApiResult};
use crate::services::SeekerService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use freelancer_shared::{
    LoginRequest, LoginResponse, MessageResponse, RegisterSeekerRequest, SeekerProfile,
    SeekerSearchParams, SeekerSummary,
};

/// Create seeker routes, mounted under `/api/seeker`
pub fn seeker_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/:id", get(get_profile))
}

/// POST /api/seeker/register
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterSeekerRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(req) = payload?;
    SeekerService::register(state.db(), state.passwords(), req).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registration successful")),
    ))
}

/// POST /api/seeker/login
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse<SeekerProfile>>> {
    let Json(req) = payload?;
    let response = SeekerService::login(state.db(), state.jwt(), req).await?;
    Ok(Json(response))
}

/// GET /api/seeker/:id
///
/// An id that is not an integer cannot name a seeker, so it is a 404 too.
async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SeekerProfile>> {
    let id = id
        .parse::<i32>()
        .map_err(|_| ApiError::NotFound("Seeker not found".to_string()))?;

    let profile = SeekerService::get_profile(state.db(), id).await?;
    Ok(Json(profile))
}

/// GET /api/seekers?skill=&location=&time_period=&rating=
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SeekerSearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<SeekerSummary>>> {
    let Query(params) = query?;
    let seekers = SeekerService::search(state.db(), &params).await?;
    Ok(Json(seekers))
}
