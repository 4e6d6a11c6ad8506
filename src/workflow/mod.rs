//! Team and repository provisioning workflow
//!
//! Stands up a team, its initial members, a repository, and the
//! team-repository link with one ordered pass of remote calls:
//! create team, add members, create repository, link team to repository.
//!
//! The sequence is strictly ordered because later steps need identifiers
//! produced by earlier ones (the team slug only exists after creation).
//! Steps are attempted at most once, never retried, and never rolled back:
//! a failure part-way leaves the already-created entities in place for the
//! caller to inspect or clean up. Errors carry the step that produced them
//! and wrap the underlying cause unchanged.

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use crate::client::{
    CreateRepositoryRequest, CreateTeamRequest, GitHubApi, RepoPermission, Repository, Team,
    TeamPrivacy, TeamRole,
};
use crate::error::Error;

/// Team to create
#[derive(Debug, Clone)]
pub struct TeamSpec {
    /// Team name (required, non-empty)
    pub name: String,
    /// Team description
    pub description: Option<String>,
    /// Team visibility
    pub privacy: TeamPrivacy,
}

impl TeamSpec {
    fn to_request(&self) -> CreateTeamRequest {
        CreateTeamRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            privacy: self.privacy,
        }
    }
}

/// Repository to create
#[derive(Debug, Clone)]
pub struct RepoSpec {
    /// Repository name (required, non-empty)
    pub name: String,
    /// Repository description
    pub description: Option<String>,
    /// Whether the repository is private
    pub private: bool,
}

impl RepoSpec {
    fn to_request(&self) -> CreateRepositoryRequest {
        CreateRepositoryRequest::new(self.name.clone(), self.description.clone(), self.private)
    }
}

/// A member to add to the new team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSpec {
    /// GitHub username
    pub username: String,
    /// Role within the team
    pub role: TeamRole,
}

impl std::str::FromStr for MemberSpec {
    type Err = String;

    /// Parse `USER` or `USER:ROLE` (role defaults to `member`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (username, role) = match s.split_once(':') {
            Some((user, role)) => (user, role.parse::<TeamRole>()?),
            None => (s, TeamRole::default()),
        };

        if username.trim().is_empty() {
            return Err("member username must not be empty".to_string());
        }

        Ok(MemberSpec {
            username: username.trim().to_string(),
            role,
        })
    }
}

/// What to do when adding a member fails.
///
/// The policy is explicit because member additions sit between the fatal
/// steps: team and repository creation failures always stop the workflow,
/// while a missing username is often not worth abandoning the rest of the
/// provisioning run over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MemberAddPolicy {
    /// Record the failure, keep adding the remaining members, and continue
    /// with repository creation
    #[default]
    BestEffort,

    /// Stop the workflow at the first member that cannot be added
    Fatal,
}

impl std::fmt::Display for MemberAddPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberAddPolicy::BestEffort => write!(f, "best-effort"),
            MemberAddPolicy::Fatal => write!(f, "fatal"),
        }
    }
}

/// Everything needed for one provisioning run
#[derive(Debug, Clone)]
pub struct ProvisionRequest {
    /// Organization login (required, non-empty)
    pub org: String,
    /// Team to create
    pub team: TeamSpec,
    /// Members to add, in order
    pub members: Vec<MemberSpec>,
    /// Repository to create
    pub repo: RepoSpec,
    /// Permission the team receives on the repository
    pub permission: RepoPermission,
    /// Member-add failure policy
    pub member_policy: MemberAddPolicy,
}

impl ProvisionRequest {
    /// Check required inputs before any network call is made
    fn validate(&self) -> Result<(), ProvisionError> {
        if self.org.trim().is_empty() {
            return Err(ProvisionError::Validation(
                "organization is required".to_string(),
            ));
        }
        if self.team.name.trim().is_empty() {
            return Err(ProvisionError::Validation(
                "team name is required".to_string(),
            ));
        }
        if self.repo.name.trim().is_empty() {
            return Err(ProvisionError::Validation(
                "repository name is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// The workflow step an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    CreateTeam,
    AddMember,
    CreateRepository,
    LinkTeamRepository,
}

impl Step {
    /// Stable machine-readable step name
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::CreateTeam => "create_team",
            Step::AddMember => "add_member",
            Step::CreateRepository => "create_repository",
            Step::LinkTeamRepository => "link_team_repository",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow failure: either bad local input, or a step that failed remotely
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Invalid provisioning request: {0}")]
    Validation(String),

    #[error("Provisioning failed at step '{step}': {source}")]
    Step {
        step: Step,
        #[source]
        source: Error,
    },
}

impl ProvisionError {
    /// The failed step, if the error came from one
    pub fn step(&self) -> Option<Step> {
        match self {
            ProvisionError::Step { step, .. } => Some(*step),
            ProvisionError::Validation(_) => None,
        }
    }
}

/// A member that could not be added during a best-effort run
#[derive(Debug, Clone, Serialize)]
pub struct MemberFailure {
    /// Username that failed
    pub username: String,
    /// Cause, as reported by the API
    pub reason: String,
}

/// Result of a fully successful provisioning run
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionSummary {
    /// The created team, with the slug resolved by the remote API
    pub team: Team,
    /// The created repository
    pub repository: Repository,
    /// Number of members successfully added
    pub members_added: usize,
    /// Members skipped under the best-effort policy
    pub member_failures: Vec<MemberFailure>,
}

/// Run the provisioning workflow.
///
/// Issues the remote calls sequentially, one outstanding call at a time,
/// stopping at the first fatal failure. Nothing already created is deleted
/// on failure; the returned error names the step so the caller can report
/// what exists and what does not.
pub async fn run(
    client: &dyn GitHubApi,
    request: &ProvisionRequest,
) -> Result<ProvisionSummary, ProvisionError> {
    request.validate()?;

    debug!(
        "provisioning team '{}' and repository '{}' in org '{}'",
        request.team.name, request.repo.name, request.org
    );

    let team = client
        .create_team(&request.org, request.team.to_request())
        .await
        .map_err(|source| ProvisionError::Step {
            step: Step::CreateTeam,
            source,
        })?;
    debug!("created team '{}' (slug '{}')", team.name, team.slug);

    let mut members_added = 0;
    let mut member_failures = Vec::new();
    for member in &request.members {
        match client
            .add_team_member(&request.org, &team.slug, &member.username, member.role)
            .await
        {
            Ok(()) => {
                debug!("added {} as {}", member.username, member.role);
                members_added += 1;
            }
            Err(source) => match request.member_policy {
                MemberAddPolicy::Fatal => {
                    return Err(ProvisionError::Step {
                        step: Step::AddMember,
                        source,
                    });
                }
                MemberAddPolicy::BestEffort => {
                    warn!("could not add {}: {}", member.username, source);
                    member_failures.push(MemberFailure {
                        username: member.username.clone(),
                        reason: source.to_string(),
                    });
                }
            },
        }
    }

    let repository = client
        .create_repository(&request.org, request.repo.to_request())
        .await
        .map_err(|source| ProvisionError::Step {
            step: Step::CreateRepository,
            source,
        })?;
    debug!("created repository '{}'", repository.name);

    client
        .link_team_to_repository(&request.org, &team.slug, &repository.name, request.permission)
        .await
        .map_err(|source| ProvisionError::Step {
            step: Step::LinkTeamRepository,
            source,
        })?;
    debug!(
        "linked team '{}' to '{}' with {} permission",
        team.slug, repository.name, request.permission
    );

    Ok(ProvisionSummary {
        team,
        repository,
        members_added,
        member_failures,
    })
}
