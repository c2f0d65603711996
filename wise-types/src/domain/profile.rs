//! Account profiles of the authenticated Wise user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a Wise account profile.
///
/// Wise only accepts invoice creation on business profiles; the API
/// itself rejects personal ones, so this type carries no such rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    // The v2 profiles endpoint reports types in uppercase.
    #[serde(alias = "PERSONAL")]
    Personal,
    #[serde(alias = "BUSINESS")]
    Business,
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileType::Personal => write!(f, "personal"),
            ProfileType::Business => write!(f, "business"),
        }
    }
}

impl FromStr for ProfileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personal" => Ok(ProfileType::Personal),
            "business" => Ok(ProfileType::Business),
            other => Err(format!("Unknown profile type: {}", other)),
        }
    }
}

/// One account identity under the authenticated user, as returned by
/// `GET /v2/profiles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_type_parse() {
        assert_eq!(
            "business".parse::<ProfileType>().unwrap(),
            ProfileType::Business
        );
        assert_eq!(
            "Personal".parse::<ProfileType>().unwrap(),
            ProfileType::Personal
        );
        assert!("corporate".parse::<ProfileType>().is_err());
    }

    #[test]
    fn test_profile_type_display() {
        assert_eq!(ProfileType::Business.to_string(), "business");
    }

    #[test]
    fn test_profile_deserialization() {
        let profile: Profile =
            serde_json::from_str(r#"{"id": 42, "type": "business"}"#).unwrap();
        assert_eq!(profile.id, 42);
        assert_eq!(profile.profile_type, ProfileType::Business);
    }
}
