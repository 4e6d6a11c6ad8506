//! Mock GitHub API client for testing
//!
//! Implements [`GitHubApi`] without network access. Responses are
//! configurable, failures can be injected per operation (and per username
//! for member additions), and every call is counted and captured so tests
//! can assert exactly which remote operations a code path issued.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::models::{
    CreateRepositoryRequest, CreateTeamRequest, Organization, RepoCollaborator, RepoPermission,
    Repository, Team, TeamMember, TeamRole,
};
use super::GitHubApi;
use crate::error::{ApiError, Result};

/// Derive the URL-safe slug the way the remote API does for simple names
fn slugify(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub get_organization: usize,
    pub list_teams: usize,
    pub get_team: usize,
    pub create_team: usize,
    pub list_team_members: usize,
    pub add_team_member: usize,
    pub update_team_member_role: usize,
    pub remove_team_member: usize,
    pub create_repository: usize,
    pub link_team_repository: usize,
    pub list_team_repositories: usize,
    pub list_repo_collaborators: usize,
    pub add_repo_collaborator: usize,
    pub remove_repo_collaborator: usize,
}

impl CallCounts {
    /// Total number of API calls made
    pub fn total(&self) -> usize {
        self.get_organization
            + self.list_teams
            + self.get_team
            + self.create_team
            + self.list_team_members
            + self.add_team_member
            + self.update_team_member_role
            + self.remove_team_member
            + self.create_repository
            + self.link_team_repository
            + self.list_team_repositories
            + self.list_repo_collaborators
            + self.add_repo_collaborator
            + self.remove_repo_collaborator
    }

    /// Calls that would mutate or remove remote state after team creation
    pub fn downstream_of_create_team(&self) -> usize {
        self.add_team_member + self.create_repository + self.link_team_repository
    }
}

/// A captured API call for test assertions
#[derive(Debug, Clone)]
pub struct CapturedCall {
    /// The trait method invoked (e.g. "create_team")
    pub method: String,
    /// Organization login
    pub org: String,
    /// Team slug if the operation keys on one
    pub team_slug: Option<String>,
    /// Username if the operation targets a user
    pub username: Option<String>,
    /// Repository name if the operation targets a repository
    pub repo: Option<String>,
    /// Role or permission string sent with the call
    pub grant: Option<String>,
}

/// Mock API client for testing.
///
/// Configure responses and injected failures via the builder methods, then
/// hand it to the code under test as a `&dyn GitHubApi`.
pub struct MockGitHubClient {
    organization: Arc<Mutex<Option<Organization>>>,
    teams: Arc<Mutex<Vec<Team>>>,
    members: Arc<Mutex<Vec<TeamMember>>>,
    team_repos: Arc<Mutex<Vec<Repository>>>,
    collaborators: Arc<Mutex<Vec<RepoCollaborator>>>,
    /// Injected failures by operation name, consumed on first use
    failures: Arc<Mutex<HashMap<&'static str, ApiError>>>,
    /// Injected member-add failures by username, consumed on first use
    member_add_failures: Arc<Mutex<HashMap<String, ApiError>>>,
    call_counts: Arc<Mutex<CallCounts>>,
    captured: Arc<Mutex<Vec<CapturedCall>>>,
}

impl Default for MockGitHubClient {
    fn default() -> Self {
        Self {
            organization: Arc::new(Mutex::new(None)),
            teams: Arc::new(Mutex::new(Vec::new())),
            members: Arc::new(Mutex::new(Vec::new())),
            team_repos: Arc::new(Mutex::new(Vec::new())),
            collaborators: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
            member_add_failures: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(CallCounts::default())),
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockGitHubClient {
    /// Create a new mock client with default (empty) responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the organization returned from get_organization
    pub async fn with_organization(self, org: Organization) -> Self {
        *self.organization.lock().await = Some(org);
        self
    }

    /// Configure teams returned from list_teams / get_team
    pub async fn with_teams(self, teams: Vec<Team>) -> Self {
        *self.teams.lock().await = teams;
        self
    }

    /// Configure members returned from list_team_members
    pub async fn with_members(self, members: Vec<TeamMember>) -> Self {
        *self.members.lock().await = members;
        self
    }

    /// Configure repositories returned from list_team_repositories
    pub async fn with_team_repos(self, repos: Vec<Repository>) -> Self {
        *self.team_repos.lock().await = repos;
        self
    }

    /// Configure collaborators returned from list_repo_collaborators
    pub async fn with_collaborators(self, collaborators: Vec<RepoCollaborator>) -> Self {
        *self.collaborators.lock().await = collaborators;
        self
    }

    /// Inject a failure for the named operation (consumed on first use)
    pub async fn with_failure(self, operation: &'static str, error: ApiError) -> Self {
        self.failures.lock().await.insert(operation, error);
        self
    }

    /// Inject a failure for adding a specific username to a team
    pub async fn with_member_add_failure(self, username: &str, error: ApiError) -> Self {
        self.member_add_failures
            .lock()
            .await
            .insert(username.to_string(), error);
        self
    }

    /// Get a snapshot of call counts
    pub async fn call_counts(&self) -> CallCounts {
        self.call_counts.lock().await.clone()
    }

    /// Get all captured calls
    pub async fn captured_calls(&self) -> Vec<CapturedCall> {
        self.captured.lock().await.clone()
    }

    async fn take_failure(&self, operation: &'static str) -> Option<ApiError> {
        self.failures.lock().await.remove(operation)
    }

    async fn capture(
        &self,
        method: &str,
        org: &str,
        team_slug: Option<&str>,
        username: Option<&str>,
        repo: Option<&str>,
        grant: Option<String>,
    ) {
        self.captured.lock().await.push(CapturedCall {
            method: method.to_string(),
            org: org.to_string(),
            team_slug: team_slug.map(str::to_string),
            username: username.map(str::to_string),
            repo: repo.map(str::to_string),
            grant,
        });
    }
}

#[async_trait]
impl GitHubApi for MockGitHubClient {
    async fn get_organization(&self, org: &str) -> Result<Organization> {
        self.call_counts.lock().await.get_organization += 1;
        self.capture("get_organization", org, None, None, None, None)
            .await;
        if let Some(err) = self.take_failure("get_organization").await {
            return Err(err.into());
        }

        match self.organization.lock().await.clone() {
            Some(found) => Ok(found),
            None => Ok(Organization {
                id: 1,
                login: org.to_string(),
                name: None,
                description: None,
            }),
        }
    }

    async fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
        self.call_counts.lock().await.list_teams += 1;
        self.capture("list_teams", org, None, None, None, None).await;
        if let Some(err) = self.take_failure("list_teams").await {
            return Err(err.into());
        }
        Ok(self.teams.lock().await.clone())
    }

    async fn get_team(&self, org: &str, team_slug: &str) -> Result<Team> {
        self.call_counts.lock().await.get_team += 1;
        self.capture("get_team", org, Some(team_slug), None, None, None)
            .await;
        if let Some(err) = self.take_failure("get_team").await {
            return Err(err.into());
        }

        self.teams
            .lock()
            .await
            .iter()
            .find(|t| t.slug == team_slug)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("team {}", team_slug)).into())
    }

    async fn create_team(&self, org: &str, request: CreateTeamRequest) -> Result<Team> {
        self.call_counts.lock().await.create_team += 1;
        self.capture("create_team", org, None, None, None, None).await;
        if let Some(err) = self.take_failure("create_team").await {
            return Err(err.into());
        }

        let team = Team {
            id: 100,
            slug: slugify(&request.name),
            name: request.name,
            description: request.description,
            privacy: request.privacy,
        };
        self.teams.lock().await.push(team.clone());
        Ok(team)
    }

    async fn list_team_members(&self, org: &str, team_slug: &str) -> Result<Vec<TeamMember>> {
        self.call_counts.lock().await.list_team_members += 1;
        self.capture("list_team_members", org, Some(team_slug), None, None, None)
            .await;
        if let Some(err) = self.take_failure("list_team_members").await {
            return Err(err.into());
        }
        Ok(self.members.lock().await.clone())
    }

    async fn add_team_member(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
        role: TeamRole,
    ) -> Result<()> {
        self.call_counts.lock().await.add_team_member += 1;
        self.capture(
            "add_team_member",
            org,
            Some(team_slug),
            Some(username),
            None,
            Some(role.to_string()),
        )
        .await;

        if let Some(err) = self.member_add_failures.lock().await.remove(username) {
            return Err(err.into());
        }
        if let Some(err) = self.take_failure("add_team_member").await {
            return Err(err.into());
        }
        Ok(())
    }

    async fn update_team_member_role(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
        role: TeamRole,
    ) -> Result<()> {
        self.call_counts.lock().await.update_team_member_role += 1;
        self.capture(
            "update_team_member_role",
            org,
            Some(team_slug),
            Some(username),
            None,
            Some(role.to_string()),
        )
        .await;
        if let Some(err) = self.take_failure("update_team_member_role").await {
            return Err(err.into());
        }
        Ok(())
    }

    async fn remove_team_member(&self, org: &str, team_slug: &str, username: &str) -> Result<()> {
        self.call_counts.lock().await.remove_team_member += 1;
        self.capture(
            "remove_team_member",
            org,
            Some(team_slug),
            Some(username),
            None,
            None,
        )
        .await;
        if let Some(err) = self.take_failure("remove_team_member").await {
            return Err(err.into());
        }
        Ok(())
    }

    async fn create_repository(
        &self,
        org: &str,
        request: CreateRepositoryRequest,
    ) -> Result<Repository> {
        self.call_counts.lock().await.create_repository += 1;
        self.capture(
            "create_repository",
            org,
            None,
            None,
            Some(request.name.as_str()),
            None,
        )
        .await;
        if let Some(err) = self.take_failure("create_repository").await {
            return Err(err.into());
        }

        Ok(Repository {
            id: 200,
            full_name: Some(format!("{}/{}", org, request.name)),
            name: request.name,
            description: request.description,
            private: request.private,
            html_url: None,
        })
    }

    async fn link_team_to_repository(
        &self,
        org: &str,
        team_slug: &str,
        repo: &str,
        permission: RepoPermission,
    ) -> Result<()> {
        self.call_counts.lock().await.link_team_repository += 1;
        self.capture(
            "link_team_to_repository",
            org,
            Some(team_slug),
            None,
            Some(repo),
            Some(permission.to_string()),
        )
        .await;
        if let Some(err) = self.take_failure("link_team_to_repository").await {
            return Err(err.into());
        }
        Ok(())
    }

    async fn list_team_repositories(&self, org: &str, team_slug: &str) -> Result<Vec<Repository>> {
        self.call_counts.lock().await.list_team_repositories += 1;
        self.capture(
            "list_team_repositories",
            org,
            Some(team_slug),
            None,
            None,
            None,
        )
        .await;
        if let Some(err) = self.take_failure("list_team_repositories").await {
            return Err(err.into());
        }
        Ok(self.team_repos.lock().await.clone())
    }

    async fn list_repo_collaborators(
        &self,
        org: &str,
        repo: &str,
    ) -> Result<Vec<RepoCollaborator>> {
        self.call_counts.lock().await.list_repo_collaborators += 1;
        self.capture("list_repo_collaborators", org, None, None, Some(repo), None)
            .await;
        if let Some(err) = self.take_failure("list_repo_collaborators").await {
            return Err(err.into());
        }
        Ok(self.collaborators.lock().await.clone())
    }

    async fn add_repo_collaborator(
        &self,
        org: &str,
        repo: &str,
        username: &str,
        permission: RepoPermission,
    ) -> Result<()> {
        self.call_counts.lock().await.add_repo_collaborator += 1;
        self.capture(
            "add_repo_collaborator",
            org,
            None,
            Some(username),
            Some(repo),
            Some(permission.to_string()),
        )
        .await;
        if let Some(err) = self.take_failure("add_repo_collaborator").await {
            return Err(err.into());
        }
        Ok(())
    }

    async fn remove_repo_collaborator(&self, org: &str, repo: &str, username: &str) -> Result<()> {
        self.call_counts.lock().await.remove_repo_collaborator += 1;
        self.capture(
            "remove_repo_collaborator",
            org,
            None,
            Some(username),
            Some(repo),
            None,
        )
        .await;
        if let Some(err) = self.take_failure("remove_repo_collaborator").await {
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_team_derives_slug() {
        let mock = MockGitHubClient::new();
        let team = mock
            .create_team(
                "acme",
                CreateTeamRequest {
                    name: "Platform Team".to_string(),
                    description: None,
                    privacy: Default::default(),
                },
            )
            .await
            .unwrap();

        assert_eq!(team.slug, "platform-team");
        assert_eq!(mock.call_counts().await.create_team, 1);
    }

    #[tokio::test]
    async fn test_injected_failure_is_consumed_once() {
        let mock = MockGitHubClient::new()
            .with_failure("list_teams", ApiError::Forbidden)
            .await;

        assert!(mock.list_teams("acme").await.is_err());
        assert!(mock.list_teams("acme").await.is_ok());
        assert_eq!(mock.call_counts().await.list_teams, 2);
    }

    #[tokio::test]
    async fn test_captured_calls_record_targets() {
        let mock = MockGitHubClient::new();
        mock.add_team_member("acme", "backend", "alice", TeamRole::Maintainer)
            .await
            .unwrap();

        let calls = mock.captured_calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "add_team_member");
        assert_eq!(calls[0].team_slug.as_deref(), Some("backend"));
        assert_eq!(calls[0].username.as_deref(), Some("alice"));
        assert_eq!(calls[0].grant.as_deref(), Some("maintainer"));
    }
}
