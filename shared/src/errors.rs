//! Error types for the Freelancer Marketplace application

use thiserror::Error;

/// Authentication error types
///
/// Token verification keeps `TokenExpired` and `InvalidToken` apart so
/// callers can report them differently, even though both end up as 401.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Missing token")]
    MissingToken,
}
