//! Repository models

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Permission level granted on a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum RepoPermission {
    /// Read-only access
    Pull,

    /// Read and write access
    #[default]
    Push,

    /// Full administrative access
    Admin,

    /// Manage the repository without destructive actions
    Maintain,

    /// Manage issues and pull requests only
    Triage,
}

impl std::fmt::Display for RepoPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepoPermission::Pull => write!(f, "pull"),
            RepoPermission::Push => write!(f, "push"),
            RepoPermission::Admin => write!(f, "admin"),
            RepoPermission::Maintain => write!(f, "maintain"),
            RepoPermission::Triage => write!(f, "triage"),
        }
    }
}

/// Repository resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository ID
    pub id: u64,

    /// Repository name
    pub name: String,

    /// Full name including the owner (e.g. "acme/api-svc")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Repository description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the repository is private
    pub private: bool,

    /// Web URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// Repository collaborator as returned by the collaborators listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoCollaborator {
    /// User ID
    pub id: u64,

    /// User login
    pub login: String,

    /// Effective role on the repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

/// Request body for creating an organization repository
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepositoryRequest {
    /// Repository name (must be unique within the organization)
    pub name: String,

    /// Repository description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the repository is private
    pub private: bool,

    /// Initialize with an empty commit so the repository is cloneable
    pub auto_init: bool,

    /// Visibility string mirrored from the private flag
    pub visibility: String,
}

impl CreateRepositoryRequest {
    /// Build a create request from name, description, and privacy flag
    pub fn new(name: impl Into<String>, description: Option<String>, private: bool) -> Self {
        Self {
            name: name.into(),
            description,
            private,
            auto_init: true,
            visibility: if private { "private" } else { "public" }.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RepoPermission::Maintain).unwrap(),
            "\"maintain\""
        );
    }

    #[test]
    fn test_create_request_visibility_tracks_private_flag() {
        let private = CreateRepositoryRequest::new("api-svc", None, true);
        assert_eq!(private.visibility, "private");
        assert!(private.auto_init);

        let public = CreateRepositoryRequest::new("api-svc", None, false);
        assert_eq!(public.visibility, "public");
    }

    #[test]
    fn test_repository_deserializes_from_api_payload() {
        let json = r#"{
            "id": 7,
            "name": "api-svc",
            "full_name": "acme/api-svc",
            "private": true,
            "html_url": "https://github.com/acme/api-svc",
            "stargazers_count": 0
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();

        assert_eq!(repo.name, "api-svc");
        assert!(repo.private);
        assert_eq!(repo.full_name.as_deref(), Some("acme/api-svc"));
    }
}
