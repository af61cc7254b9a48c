//! Provider repository for database operations

use super::is_unique_violation;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};

/// Provider record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProviderRecord {
    pub id: i32,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    /// Stored password digest
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a provider
#[derive(Debug, Clone)]
pub struct CreateProvider {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub password_hash: String,
}

/// Provider repository for database operations
pub struct ProviderRepository;

impl ProviderRepository {
    /// Insert a provider unless the email is already registered
    ///
    /// The existence check and the insert share one transaction; a concurrent
    /// registration that slips past the check is caught by the unique
    /// constraint. Returns `None` when the email is taken.
    pub async fn create_if_email_free(
        pool: &PgPool,
        input: CreateProvider,
    ) -> Result<Option<ProviderRecord>> {
        let mut tx = pool.begin().await?;

        if Self::email_exists(&mut *tx, &input.email).await? {
            return Ok(None);
        }

        let inserted = sqlx::query_as::<_, ProviderRecord>(
            r#"
            INSERT INTO provider (name, phone_number, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, phone_number, email, password, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.phone_number)
        .bind(&input.email)
        .bind(&input.password_hash)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(record) => {
                tx.commit().await?;
                Ok(Some(record))
            }
            Err(e) if is_unique_violation(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Find provider by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<ProviderRecord>> {
        let provider = sqlx::query_as::<_, ProviderRecord>(
            r#"
            SELECT id, name, phone_number, email, password, created_at
            FROM provider
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(provider)
    }

    /// Find provider by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<ProviderRecord>> {
        let provider = sqlx::query_as::<_, ProviderRecord>(
            r#"
            SELECT id, name, phone_number, email, password, created_at
            FROM provider
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(provider)
    }

    /// Check if email exists
    pub async fn email_exists<'e, E>(executor: E, email: &str) -> Result<bool>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM provider WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(executor)
        .await?;

        Ok(result)
    }
}
