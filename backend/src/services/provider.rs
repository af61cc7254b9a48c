//! Provider registration, login and profile

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{CreateProvider, ProviderRecord, ProviderRepository};
use freelancer_shared::validation::require_fields;
use freelancer_shared::{
    AccountKind, AuthError, LoginRequest, LoginResponse, ProviderProfile, RegisterProviderRequest,
};
use sqlx::PgPool;
use tracing::{debug, info, warn};

/// Provider account operations
pub struct ProviderService;

impl ProviderService {
    /// Register a new provider
    pub async fn register(
        pool: &PgPool,
        passwords: &PasswordService,
        req: RegisterProviderRequest,
    ) -> Result<ProviderRecord, ApiError> {
        if let Err(missing) = require_fields(&req) {
            debug!(?missing, "Provider registration rejected");
            return Err(ApiError::Validation("All fields are required".to_string()));
        }

        let password_hash = passwords
            .hash_async(req.password.unwrap_or_default())
            .await?;

        let input = CreateProvider {
            name: req.name.unwrap_or_default(),
            phone_number: req.phone_number.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            password_hash,
        };

        let provider = ProviderRepository::create_if_email_free(pool, input)
            .await?
            .ok_or_else(|| ApiError::Conflict("Email already registered".to_string()))?;

        info!(provider_id = provider.id, "Provider registered");
        Ok(provider)
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtService,
        req: LoginRequest,
    ) -> Result<LoginResponse<ProviderProfile>, ApiError> {
        if require_fields(&req).is_err() {
            return Err(ApiError::Validation(
                "Email and password are required".to_string(),
            ));
        }
        let email = req.email.unwrap_or_default();
        let password = req.password.unwrap_or_default();

        let Some(provider) = ProviderRepository::find_by_email(pool, &email).await? else {
            warn!("Provider login failed: unknown email");
            return Err(AuthError::InvalidCredentials.into());
        };

        let valid = PasswordService::verify_async(password, provider.password.clone()).await?;
        if !valid {
            warn!(provider_id = provider.id, "Provider login failed: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = jwt.issue(provider.id, AccountKind::Provider)?;
        info!(provider_id = provider.id, "Provider logged in");

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
            user: Self::profile(&provider),
        })
    }

    /// Get a provider's public profile
    pub async fn get_profile(pool: &PgPool, id: i32) -> Result<ProviderProfile, ApiError> {
        let provider = ProviderRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Provider not found".to_string()))?;

        Ok(Self::profile(&provider))
    }

    fn profile(provider: &ProviderRecord) -> ProviderProfile {
        ProviderProfile {
            id: provider.id,
            name: provider.name.clone(),
            email: provider.email.clone(),
            user_type: AccountKind::Provider,
        }
    }
}
