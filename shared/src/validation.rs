//! Input validation functions
//!
//! Only presence is checked: a field must be supplied and, for text, must
//! not be empty. Formats (email, phone) are accepted as given.

use validator::Validate;

/// Check that every required field of a request is present
///
/// Returns the names of the missing fields, sorted, on failure.
pub fn require_fields<T: Validate>(request: &T) -> Result<(), Vec<String>> {
    match request.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect();
            fields.sort();
            Err(fields)
        }
    }
}

/// Treat an empty criterion the same as an absent one
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LoginRequest, RegisterProviderRequest, RegisterSeekerRequest};
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn complete_seeker() -> RegisterSeekerRequest {
        RegisterSeekerRequest {
            name: Some("A".to_string()),
            phone_number: Some("1".to_string()),
            email: Some("a@x.com".to_string()),
            skill: Some("Plumbing".to_string()),
            years_of_experience: Some(2),
            location: Some("NYC".to_string()),
            time_period: Some("full-time".to_string()),
            base_price: Some(Decimal::from(50)),
            password: Some("pw".to_string()),
        }
    }

    #[test]
    fn test_complete_seeker_passes() {
        assert!(require_fields(&complete_seeker()).is_ok());
    }

    #[test]
    fn test_zero_experience_counts_as_present() {
        let mut req = complete_seeker();
        req.years_of_experience = Some(0);
        req.base_price = Some(Decimal::ZERO);
        assert!(require_fields(&req).is_ok());
    }

    #[rstest]
    #[case("name")]
    #[case("skill")]
    #[case("years_of_experience")]
    #[case("base_price")]
    #[case("password")]
    fn test_missing_seeker_field_is_reported(#[case] field: &str) {
        let mut req = complete_seeker();
        match field {
            "name" => req.name = None,
            "skill" => req.skill = Some(String::new()),
            "years_of_experience" => req.years_of_experience = None,
            "base_price" => req.base_price = None,
            "password" => req.password = Some(String::new()),
            _ => unreachable!(),
        }

        let missing = require_fields(&req).unwrap_err();
        assert_eq!(missing, vec![field.to_string()]);
    }

    #[test]
    fn test_empty_provider_reports_every_field() {
        let missing = require_fields(&RegisterProviderRequest::default()).unwrap_err();
        assert_eq!(missing, vec!["email", "name", "password", "phone_number"]);
    }

    #[test]
    fn test_login_requires_both_fields() {
        let req = LoginRequest {
            email: Some("a@x.com".to_string()),
            password: None,
        };
        assert_eq!(require_fields(&req).unwrap_err(), vec!["password"]);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("plumb")), Some("plumb"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }
}
