//! Account models for the Freelancer Marketplace

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of account the marketplace knows about.
///
/// Serialized in lower case; the same value is used as the `type` claim of
/// session tokens and as `userType` in login responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Someone hiring for a service
    Provider,
    /// A skilled worker offering labor, searchable by criteria
    Seeker,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Provider => "provider",
            AccountKind::Seeker => "seeker",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AccountKind::Provider, "\"provider\"")]
    #[case(AccountKind::Seeker, "\"seeker\"")]
    fn test_account_kind_serializes_lowercase(#[case] kind: AccountKind, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&kind).unwrap(), json);
        assert_eq!(serde_json::from_str::<AccountKind>(json).unwrap(), kind);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(AccountKind::Provider.to_string(), AccountKind::Provider.as_str());
    }
}
