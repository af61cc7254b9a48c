//! Session token issuing and verification
//!
//! Tokens are HS256 JWTs carrying the account id (`sub`), the account kind
//! (`type`), `iat` and `exp`. Keys are derived once from the shared secret.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use freelancer_shared::{AccountKind, AuthError};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Account kind the subject ID refers to
    #[serde(rename = "type")]
    pub kind: AccountKind,
}

/// Identity asserted by a verified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub subject_id: i32,
    pub kind: AccountKind,
}

/// Pre-computed JWT keys, shared across clones of the service
#[derive(Clone)]
struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// JWT service for token operations
///
/// Create once at startup and keep in `AppState`; cloning only bumps
/// reference counts.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiry_secs: i64,
    validation: Arc<Validation>,
}

impl JwtService {
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Self {
            keys: JwtKeys::new(secret),
            expiry_secs,
            validation: Arc::new(validation),
        }
    }

    /// Issue a token for an account, valid from now
    #[inline]
    pub fn issue(&self, subject_id: i32, kind: AccountKind) -> Result<String> {
        self.issue_at(subject_id, kind, Utc::now())
    }

    /// Issue a token as if it had been issued at `issued_at`
    pub fn issue_at(
        &self,
        subject_id: i32,
        kind: AccountKind,
        issued_at: DateTime<Utc>,
    ) -> Result<String> {
        let exp = issued_at + Duration::seconds(self.expiry_secs);

        let claims = Claims {
            sub: subject_id.to_string(),
            exp: exp.timestamp(),
            iat: issued_at.timestamp(),
            kind,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to generate {} token: {}", kind, e))
    }

    /// Verify a token and return the identity it asserts
    ///
    /// An expired token yields `AuthError::TokenExpired`; anything else that
    /// fails (bad signature, malformed token, bad claims) yields
    /// `AuthError::InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<Session, AuthError> {
        let data = decode::<Claims>(token, &self.keys.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let subject_id = data
            .claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(Session {
            subject_id,
            kind: data.claims.kind,
        })
    }
}
