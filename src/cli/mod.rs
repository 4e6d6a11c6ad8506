//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand, ValueEnum};
pub use clap_complete::Shell;

pub mod completions;
pub mod context;
pub mod init;
pub mod org;
pub mod provision;
pub mod repo;
pub mod status;
pub mod team;

pub use context::CommandContext;

use crate::client::models::{RepoPermission, TeamPrivacy, TeamRole};
use crate::workflow::{MemberAddPolicy, MemberSpec};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON with metadata envelope
    Json,
}

/// orgkit - CLI companion for GitHub organization administration
#[derive(Parser, Debug)]
#[command(name = "orgkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "ORGKIT_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override default organization
    #[arg(long, global = true, env = "ORGKIT_ORG", hide_env = true)]
    pub org: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "ORGKIT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ORGKIT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize orgkit configuration
    Init,

    /// Show authentication and configuration status
    Status,

    /// Manage the default organization
    #[command(subcommand)]
    Org(OrgCommands),

    /// Manage teams and their membership
    #[command(subcommand)]
    Team(TeamCommands),

    /// Manage repositories and collaborators
    #[command(subcommand)]
    Repo(RepoCommands),

    /// Provision a team and repository in one run
    #[command(after_help = "\
EXAMPLES:
  orgkit provision --team backend --repo api-svc
  orgkit provision --team backend --member alice:maintainer --member bob \\
      --repo api-svc --permission push
  orgkit provision --team backend --repo api-svc --public --dry-run

The steps run in order: create team, add members, create repository, link
team to repository. A failed step stops the run and nothing already created
is deleted; re-running with the same names reports a conflict at the
corresponding step.")]
    Provision(ProvisionArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Organization management subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// Set the default organization (verified against the API)
    Set {
        /// Organization login to set as default
        login: String,
    },

    /// Show the current default organization
    Get,
}

/// Team management subcommands
#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// List teams in the organization
    #[command(visible_alias = "ls")]
    List,

    /// Get team details
    Get {
        /// Team slug
        team: String,
    },

    /// List team members
    Members {
        /// Team slug
        team: String,
    },

    /// Add a user to a team (or update their role)
    AddMember {
        /// Team slug
        team: String,
        /// GitHub username
        username: String,
        /// Role within the team
        #[arg(long, value_enum, default_value_t)]
        role: TeamRole,
    },

    /// Remove a user from a team
    RemoveMember {
        /// Team slug
        team: String,
        /// GitHub username
        username: String,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Change the role of an existing team member
    SetRole {
        /// Team slug
        team: String,
        /// GitHub username
        username: String,
        /// New role
        #[arg(value_enum)]
        role: TeamRole,
    },

    /// List repositories the team has access to
    Repos {
        /// Team slug
        team: String,
    },

    /// Grant the team access to a repository (or update the permission)
    GrantRepo {
        /// Team slug
        team: String,
        /// Repository name
        repo: String,
        /// Permission level
        #[arg(long, value_enum, default_value_t)]
        permission: RepoPermission,
    },
}

/// Repository management subcommands
#[derive(Subcommand, Debug)]
pub enum RepoCommands {
    /// Create a repository in the organization
    Create {
        /// Repository name
        name: String,
        /// Repository description
        #[arg(long, short = 'd')]
        description: Option<String>,
        /// Create a public repository (private is the default)
        #[arg(long)]
        public: bool,
    },

    /// List direct collaborators on a repository
    Collaborators {
        /// Repository name
        repo: String,
    },

    /// Add a collaborator to a repository
    AddCollaborator {
        /// Repository name
        repo: String,
        /// GitHub username
        username: String,
        /// Permission level
        #[arg(long, value_enum, default_value_t)]
        permission: RepoPermission,
    },

    /// Remove a collaborator from a repository
    RemoveCollaborator {
        /// Repository name
        repo: String,
        /// GitHub username
        username: String,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Arguments for the provision command
#[derive(Debug, Args)]
pub struct ProvisionArgs {
    /// Team name to create
    #[arg(long)]
    pub team: String,

    /// Team description
    #[arg(long)]
    pub team_description: Option<String>,

    /// Team visibility
    #[arg(long, value_enum, default_value_t)]
    pub privacy: TeamPrivacy,

    /// Member to add, as USER or USER:ROLE (repeatable)
    #[arg(long = "member", value_name = "USER[:ROLE]")]
    pub members: Vec<MemberSpec>,

    /// Repository name to create
    #[arg(long)]
    pub repo: String,

    /// Repository description
    #[arg(long)]
    pub repo_description: Option<String>,

    /// Create a public repository (private is the default)
    #[arg(long)]
    pub public: bool,

    /// Permission the team receives on the repository
    #[arg(long, value_enum, default_value_t)]
    pub permission: RepoPermission,

    /// What to do when a member cannot be added
    #[arg(long, value_enum, default_value_t)]
    pub on_member_error: MemberAddPolicy,

    /// Preview the steps without calling the API
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}
