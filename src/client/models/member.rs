//! Team membership models

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Role a user holds within a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    /// Regular team member
    #[default]
    Member,

    /// Can add and remove members and change team settings
    Maintainer,
}

impl std::fmt::Display for TeamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamRole::Member => write!(f, "member"),
            TeamRole::Maintainer => write!(f, "maintainer"),
        }
    }
}

impl std::str::FromStr for TeamRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "member" => Ok(TeamRole::Member),
            "maintainer" => Ok(TeamRole::Maintainer),
            other => Err(format!(
                "unknown team role '{}' (expected 'member' or 'maintainer')",
                other
            )),
        }
    }
}

/// Team member as returned by the members listing.
///
/// The listing endpoint returns user records without roles; role changes go
/// through the membership endpoint instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    /// User ID
    pub id: u64,

    /// User login
    pub login: String,

    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}
