//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod provider;
pub mod search;
pub mod seeker;

pub use provider::{CreateProvider, ProviderRecord, ProviderRepository};
pub use search::{SearchParam, SearchQuery, SeekerFilter};
pub use seeker::{CreateSeeker, SeekerRecord, SeekerRepository};

/// Whether a database error is a unique-constraint violation
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
