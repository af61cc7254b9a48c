//! Service metadata and database management endpoints
//!
//! - `/` - Service metadata and endpoint listing
//! - `/api/init-db` - Create the schema (and the database if missing)
//! - `/api/test-db-connection` - Connectivity probe

use crate::db::{self, InitOutcome};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use freelancer_shared::{DbConnectionInfo, ErrorResponse, MessageResponse, ServiceInfo};
use tracing::{error, info};

/// Endpoints advertised by `GET /`
pub const ENDPOINTS: [&str; 9] = [
    "/api/init-db",
    "/api/test-db-connection",
    "/api/provider/register",
    "/api/provider/login",
    "/api/seeker/register",
    "/api/seeker/login",
    "/api/seeker/<seeker_id>",
    "/api/seekers",
    "/api/me",
];

type Failure = (StatusCode, Json<ErrorResponse>);

fn storage_failure(message: &str, err: &anyhow::Error) -> Failure {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
            code: "DATABASE_ERROR".to_string(),
            details: Some(format!("{:#}", err)),
        }),
    )
}

/// GET /
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Welcome to the Freelancer API".to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        available_endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

/// GET /api/init-db
pub async fn init_db(State(state): State<AppState>) -> Result<Json<MessageResponse>, Failure> {
    info!("Database initialization requested");

    let database = &state.config().database;
    match db::init_database(state.db(), &database.url, &database.maintenance_database).await {
        Ok(InitOutcome::Initialized) => Ok(Json(MessageResponse::new(
            "Database initialized successfully",
        ))),
        Ok(InitOutcome::CreatedAndInitialized) => Ok(Json(MessageResponse::new(
            "Database created and initialized successfully",
        ))),
        Err(e) => {
            error!("Database initialization failed: {:#}", e);
            Err(storage_failure("Database initialization failed", &e))
        }
    }
}

/// GET /api/test-db-connection
pub async fn test_db_connection(
    State(state): State<AppState>,
) -> Result<Json<DbConnectionInfo>, Failure> {
    match db::connection_info(state.db()).await {
        Ok(info) => Ok(Json(DbConnectionInfo {
            message: "Database connection successful".to_string(),
            server_info: info.server_info,
            database_name: info.database_name,
        })),
        Err(e) => {
            error!("Database connection probe failed: {:#}", e);
            Err(storage_failure("Database connection failed", &e))
        }
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".to_string())
}

/// Give 405 responses a JSON body, keeping their `Allow` header
pub async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut json = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        json.headers_mut().insert(header::ALLOW, allow);
    }
    json
}
