//! Authentication module
//!
//! Password hashing plus signed, time-limited session tokens.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService, Session};
pub use middleware::AuthAccount;
pub use password::{PasswordScheme, PasswordService};
