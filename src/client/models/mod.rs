//! Typed models for GitHub REST API resources

pub mod member;
pub mod org;
pub mod repo;
pub mod team;

pub use member::{TeamMember, TeamRole};
pub use org::Organization;
pub use repo::{CreateRepositoryRequest, RepoCollaborator, RepoPermission, Repository};
pub use team::{CreateTeamRequest, Team, TeamPrivacy};
