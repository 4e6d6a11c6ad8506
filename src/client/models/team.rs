//! Team models

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Team visibility within the organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum TeamPrivacy {
    /// Visible to all organization members
    #[default]
    Closed,

    /// Visible only to organization owners and team members
    Secret,
}

impl std::fmt::Display for TeamPrivacy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamPrivacy::Closed => write!(f, "closed"),
            TeamPrivacy::Secret => write!(f, "secret"),
        }
    }
}

/// Team resource
///
/// The slug is derived by the remote API from the team name and is only
/// known after creation succeeds; all membership and repository endpoints
/// key on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team ID
    pub id: u64,

    /// Team name as given at creation
    pub name: String,

    /// URL-safe slug derived by the API
    pub slug: String,

    /// Team description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Team visibility
    #[serde(default)]
    pub privacy: TeamPrivacy,
}

/// Request body for creating a team
#[derive(Debug, Clone, Serialize)]
pub struct CreateTeamRequest {
    /// Team name (must be unique within the organization)
    pub name: String,

    /// Team description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Team visibility
    pub privacy: TeamPrivacy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privacy_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TeamPrivacy::Closed).unwrap(),
            "\"closed\""
        );
        assert_eq!(
            serde_json::to_string(&TeamPrivacy::Secret).unwrap(),
            "\"secret\""
        );
    }

    #[test]
    fn test_team_deserializes_without_privacy() {
        let json = r#"{"id": 1, "name": "Backend", "slug": "backend"}"#;
        let team: Team = serde_json::from_str(json).unwrap();

        assert_eq!(team.slug, "backend");
        assert_eq!(team.privacy, TeamPrivacy::Closed);
    }

    #[test]
    fn test_create_request_omits_missing_description() {
        let request = CreateTeamRequest {
            name: "backend".to_string(),
            description: None,
            privacy: TeamPrivacy::Closed,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("description"));
        assert!(json.contains("\"privacy\":\"closed\""));
    }
}
