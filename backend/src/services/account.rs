//! Profile of the account behind a session token

use crate::auth::AuthAccount;
use crate::error::ApiError;
use crate::services::{ProviderService, SeekerService};
use freelancer_shared::{AccountKind, AccountProfile};
use sqlx::PgPool;

/// Operations on whichever kind of account is authenticated
pub struct AccountService;

impl AccountService {
    /// Look up the authenticated account, dispatching on its kind
    pub async fn current_profile(
        pool: &PgPool,
        account: AuthAccount,
    ) -> Result<AccountProfile, ApiError> {
        match account.kind {
            AccountKind::Provider => {
                let profile = ProviderService::get_profile(pool, account.account_id).await?;
                Ok(AccountProfile::Provider(profile))
            }
            AccountKind::Seeker => {
                let mut profile = SeekerService::get_profile(pool, account.account_id).await?;
                profile.user_type = Some(AccountKind::Seeker);
                Ok(AccountProfile::Seeker(profile))
            }
        }
    }
}
