//! orgkit - CLI companion for GitHub organization administration

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod workflow;

use cli::{Cli, Commands, OrgCommands, RepoCommands, TeamCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let format = cli.format;
    let org = cli.org.as_deref();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Init => cli::init::run(config).await,
        Commands::Status => cli::status::run(config),
        Commands::Completion { shell } => cli::completions::run(shell),
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::Set { login } => cli::org::set(login, config).await,
            OrgCommands::Get => cli::org::get(format, org, config).await,
        },
        Commands::Team(team_cmd) => match team_cmd {
            TeamCommands::List => cli::team::list(format, org, config).await,
            TeamCommands::Get { team } => cli::team::get(team, format, org, config).await,
            TeamCommands::Members { team } => cli::team::members(team, format, org, config).await,
            TeamCommands::AddMember {
                team,
                username,
                role,
            } => cli::team::add_member(team, username, role, org, config).await,
            TeamCommands::RemoveMember {
                team,
                username,
                yes,
            } => cli::team::remove_member(team, username, yes, org, config).await,
            TeamCommands::SetRole {
                team,
                username,
                role,
            } => cli::team::set_role(team, username, role, org, config).await,
            TeamCommands::Repos { team } => cli::team::repos(team, format, org, config).await,
            TeamCommands::GrantRepo {
                team,
                repo,
                permission,
            } => cli::team::grant_repo(team, repo, permission, org, config).await,
        },
        Commands::Repo(repo_cmd) => match repo_cmd {
            RepoCommands::Create {
                name,
                description,
                public,
            } => cli::repo::create(name, description, public, format, org, config).await,
            RepoCommands::Collaborators { repo } => {
                cli::repo::collaborators(repo, format, org, config).await
            }
            RepoCommands::AddCollaborator {
                repo,
                username,
                permission,
            } => cli::repo::add_collaborator(repo, username, permission, org, config).await,
            RepoCommands::RemoveCollaborator {
                repo,
                username,
                yes,
            } => cli::repo::remove_collaborator(repo, username, yes, org, config).await,
        },
        Commands::Provision(args) => cli::provision::run(args, format, org, config).await,
    }
}
