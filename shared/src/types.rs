//! API request and response types

use crate::models::AccountKind;
use crate::validation::non_empty;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
///
/// Every failing endpoint answers with this shape. `details` carries the
/// raw driver message for storage failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Plain confirmation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Registration and Login
// ============================================================================

/// Provider registration request
///
/// Every field is optional on the wire so that a missing field surfaces as
/// a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterProviderRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub phone_number: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// Seeker registration request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterSeekerRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub phone_number: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub skill: Option<String>,
    #[validate(required)]
    pub years_of_experience: Option<i32>,
    #[validate(required, length(min = 1))]
    pub location: Option<String>,
    #[validate(required, length(min = 1))]
    pub time_period: Option<String>,
    #[validate(required)]
    pub base_price: Option<Decimal>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// Login request, shared by both account kinds
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse<U> {
    pub message: String,
    pub token: String,
    pub user: U,
}

// ============================================================================
// Profiles
// ============================================================================

/// Public view of a provider account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub user_type: AccountKind,
}

/// Public view of a seeker account
///
/// `user_type` is only present when the profile is returned as the logged-in
/// user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeekerProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub skill: String,
    pub experience: i32,
    pub location: String,
    pub time_period: String,
    pub base_price: f64,
    pub rating: f64,
    pub reviews: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<AccountKind>,
}

/// Seeker entry in search results (no contact details)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeekerSummary {
    pub id: i32,
    pub name: String,
    pub skill: String,
    pub experience: i32,
    pub location: String,
    pub time_period: String,
    pub base_price: f64,
    pub rating: f64,
    pub reviews: i32,
}

/// Profile of whichever account a session token belongs to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AccountProfile {
    Seeker(SeekerProfile),
    Provider(ProviderProfile),
}

// ============================================================================
// Search
// ============================================================================

/// Query string of `GET /api/seekers`
///
/// All criteria arrive as raw text; the rating is parsed server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeekerSearchParams {
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub time_period: Option<String>,
    /// camelCase spelling of `time_period`
    #[serde(default, rename = "timePeriod")]
    pub time_period_camel: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

impl SeekerSearchParams {
    /// Availability criterion; `time_period` wins over `timePeriod` unless empty
    pub fn time_period(&self) -> Option<&str> {
        non_empty(self.time_period.as_deref())
            .or_else(|| non_empty(self.time_period_camel.as_deref()))
    }
}

// ============================================================================
// System
// ============================================================================

/// Response of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
    pub version: String,
    pub available_endpoints: Vec<String>,
}

/// Response of `GET /api/test-db-connection`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConnectionInfo {
    pub message: String,
    pub server_info: String,
    pub database_name: String,
}
