//! Route definitions for the Freelancer API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod account;
mod provider;
mod seeker;
mod system;

#[cfg(test)]
mod auth_tests;

pub use provider::provider_routes;
pub use seeker::seeker_routes;
pub use system::ENDPOINTS;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(system::service_info))
        .nest("/api", api_routes())
        .fallback(system::not_found)
        // Apply middleware layers
        .layer(middleware::map_response(system::json_method_not_allowed))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Routes under `/api`
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/init-db", get(system::init_db))
        .route("/test-db-connection", get(system::test_db_connection))
        .route("/seekers", get(seeker::search))
        .route("/me", get(account::me))
        .nest("/provider", provider::provider_routes())
        .nest("/seeker", seeker::seeker_routes())
}
