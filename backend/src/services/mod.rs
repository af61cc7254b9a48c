//! Business logic services
//!
//! Services validate input, coordinate repositories and credential
//! handling, and shape the public views returned to clients.

pub mod account;
pub mod provider;
pub mod seeker;

pub use account::AccountService;
pub use provider::ProviderService;
pub use seeker::SeekerService;
