//! Application state management
//!
//! Shared, read-only resources handed to every request handler via Axum's
//! state extraction. Everything here is cheap to clone.

use crate::auth::{JwtService, PasswordService};
use crate::config::AppConfig;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// - `db`: PgPool is internally Arc'd; each request checks out a connection
///   and returns it when the handler finishes
/// - `config`: wrapped in Arc
/// - `jwt`: pre-computed keys wrapped in Arc
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
    /// Password hasher for new registrations
    pub passwords: PasswordService,
}

impl AppState {
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.token_expiry_secs);
        let passwords = PasswordService::new(config.auth.password_scheme);

        Self {
            db,
            config: Arc::new(config),
            jwt,
            passwords,
        }
    }

    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    #[inline]
    pub fn passwords(&self) -> &PasswordService {
        &self.passwords
    }
}
