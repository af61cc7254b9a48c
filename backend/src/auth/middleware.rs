//! Bearer token extraction
//!
//! Provides an Axum extractor that validates the session token of a request
//! using the pre-computed JWT keys held in `AppState`.

use crate::auth::Session;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use freelancer_shared::{AccountKind, AuthError};

/// Authenticated account extracted from the `Authorization: Bearer` header
#[derive(Debug, Clone, Copy)]
pub struct AuthAccount {
    pub account_id: i32,
    pub kind: AccountKind,
}

impl From<Session> for AuthAccount {
    fn from(session: Session) -> Self {
        Self {
            account_id: session.subject_id,
            kind: session.kind,
        }
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthAccount
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Auth(AuthError::MissingToken))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;

        let session = app_state.jwt().verify(token)?;

        Ok(session.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_account_from_session() {
        let account = AuthAccount::from(Session {
            subject_id: 9,
            kind: AccountKind::Provider,
        });
        assert_eq!(account.account_id, 9);
        assert_eq!(account.kind, AccountKind::Provider);
    }
}
