//! Freelancer Marketplace Shared Library
//!
//! Wire types, account models and request validation shared between the
//! API server and its clients.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::AccountKind;
pub use types::*;
