//! GitHub API client
//!
//! The [`GitHubApi`] trait is the seam between command handlers, the
//! provisioning workflow, and the HTTP implementation; tests substitute the
//! mock client behind the same trait.

use async_trait::async_trait;

use crate::error::Result;

pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use github::GitHubClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockGitHubClient;
pub use models::{
    CreateRepositoryRequest, CreateTeamRequest, Organization, RepoCollaborator, RepoPermission,
    Repository, Team, TeamMember, TeamPrivacy, TeamRole,
};

/// GitHub organization administration operations.
///
/// Every method is a single request/response call against the REST API; no
/// operation retries or paginates (the org/team scale this tool targets fits
/// in a single page).
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Fetch an organization by login.
    ///
    /// Used to verify that an organization exists before storing it as the
    /// default.
    async fn get_organization(&self, org: &str) -> Result<Organization>;

    /// List teams in the organization.
    async fn list_teams(&self, org: &str) -> Result<Vec<Team>>;

    /// Get a team by slug.
    async fn get_team(&self, org: &str, team_slug: &str) -> Result<Team>;

    /// Create a new team in the organization.
    ///
    /// Fails with a conflict error when the name is already taken, and an
    /// authorization error when the token lacks org admin scope.
    async fn create_team(&self, org: &str, request: CreateTeamRequest) -> Result<Team>;

    /// List members of a team.
    async fn list_team_members(&self, org: &str, team_slug: &str) -> Result<Vec<TeamMember>>;

    /// Add a user to a team with the given role, or update an existing
    /// membership to that role.
    ///
    /// Fails with a not-found error when the username is unknown.
    async fn add_team_member(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
        role: TeamRole,
    ) -> Result<()>;

    /// Change the role of an existing team member.
    async fn update_team_member_role(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
        role: TeamRole,
    ) -> Result<()>;

    /// Remove a user from a team.
    ///
    /// The user stays in the organization; only the team membership is
    /// removed.
    async fn remove_team_member(&self, org: &str, team_slug: &str, username: &str) -> Result<()>;

    /// Create a new repository in the organization.
    async fn create_repository(
        &self,
        org: &str,
        request: CreateRepositoryRequest,
    ) -> Result<Repository>;

    /// Grant a team access to a repository at the given permission level.
    ///
    /// The remote endpoint is an idempotent PUT, so the same call also
    /// updates the permission of an existing link.
    async fn link_team_to_repository(
        &self,
        org: &str,
        team_slug: &str,
        repo: &str,
        permission: RepoPermission,
    ) -> Result<()>;

    /// List repositories a team has access to.
    async fn list_team_repositories(&self, org: &str, team_slug: &str) -> Result<Vec<Repository>>;

    /// List direct collaborators on a repository.
    async fn list_repo_collaborators(&self, org: &str, repo: &str)
    -> Result<Vec<RepoCollaborator>>;

    /// Add a collaborator to a repository with the given permission.
    async fn add_repo_collaborator(
        &self,
        org: &str,
        repo: &str,
        username: &str,
        permission: RepoPermission,
    ) -> Result<()>;

    /// Remove a collaborator from a repository.
    async fn remove_repo_collaborator(&self, org: &str, repo: &str, username: &str) -> Result<()>;
}
