//! Seeker repository for database operations

use super::is_unique_violation;
use super::search::{SearchParam, SeekerFilter};
use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};

/// Seeker record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SeekerRecord {
    pub id: i32,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub skill: String,
    pub years_of_experience: i32,
    pub location: String,
    pub time_period: String,
    pub base_price: Decimal,
    pub rating: Decimal,
    pub reviews: i32,
    /// Stored password digest
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a seeker
#[derive(Debug, Clone)]
pub struct CreateSeeker {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub skill: String,
    pub years_of_experience: i32,
    pub location: String,
    pub time_period: String,
    pub base_price: Decimal,
    pub password_hash: String,
}

/// Column list shared by every seeker query
pub(crate) const SEEKER_COLUMNS: &str = "id, name, phone_number, email, skill, \
     years_of_experience, location, time_period, base_price, rating, reviews, \
     password, created_at";

/// Seeker repository for database operations
pub struct SeekerRepository;

impl SeekerRepository {
    /// Insert a seeker with no rating and no reviews, unless the email is
    /// already registered
    ///
    /// Returns `None` when the email is taken.
    pub async fn create_if_email_free(
        pool: &PgPool,
        input: CreateSeeker,
    ) -> Result<Option<SeekerRecord>> {
        let mut tx = pool.begin().await?;

        if Self::email_exists(&mut *tx, &input.email).await? {
            return Ok(None);
        }

        let sql = format!(
            r#"
            INSERT INTO seeker
                (name, phone_number, email, skill, years_of_experience, location,
                 time_period, base_price, password, rating, reviews)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 0, 0)
            RETURNING {}
            "#,
            SEEKER_COLUMNS
        );

        let inserted = sqlx::query_as::<_, SeekerRecord>(&sql)
            .bind(&input.name)
            .bind(&input.phone_number)
            .bind(&input.email)
            .bind(&input.skill)
            .bind(input.years_of_experience)
            .bind(&input.location)
            .bind(&input.time_period)
            .bind(input.base_price)
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

    /// Find seeker by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<SeekerRecord>> {
        let sql = format!("SELECT {} FROM seeker WHERE email = $1", SEEKER_COLUMNS);
        let seeker = sqlx::query_as::<_, SeekerRecord>(&sql)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(seeker)
    }

    /// Find seeker by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<SeekerRecord>> {
        let sql = format!("SELECT {} FROM seeker WHERE id = $1", SEEKER_COLUMNS);
        let seeker = sqlx::query_as::<_, SeekerRecord>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(seeker)
    }

    /// Seekers matching a filter, in insertion order
    pub async fn search(pool: &PgPool, filter: &SeekerFilter) -> Result<Vec<SeekerRecord>> {
        let query = filter.build();

        let mut db_query = sqlx::query_as::<_, SeekerRecord>(&query.sql);
        for param in query.params {
            db_query = match param {
                SearchParam::Pattern(pattern) => db_query.bind(pattern),
                SearchParam::MinRating(rating) => db_query.bind(rating),
            };
        }

        let seekers = db_query.fetch_all(pool).await?;
        Ok(seekers)
    }

    /// Check if email exists
    pub async fn email_exists<'e, E>(executor: E, email: &str) -> Result<bool>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM seeker WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(executor)
        .await?;

        Ok(result)
    }
}
