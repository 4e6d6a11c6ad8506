//! Team management commands

use colored::Colorize;
use dialoguer::Confirm;
use tabled::Tabled;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::{GitHubApi, RepoPermission, Repository, Team, TeamMember, TeamRole};
use crate::error::Result;
use crate::output::{json, table};

/// Team row for table display
#[derive(Tabled)]
struct TeamDisplay {
    #[tabled(rename = "SLUG")]
    slug: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PRIVACY")]
    privacy: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
}

impl From<Team> for TeamDisplay {
    fn from(team: Team) -> Self {
        Self {
            slug: team.slug,
            name: team.name,
            privacy: team.privacy.to_string(),
            description: team.description.unwrap_or_default(),
        }
    }
}

/// Member row for table display
#[derive(Tabled)]
struct MemberDisplay {
    #[tabled(rename = "LOGIN")]
    login: String,
    #[tabled(rename = "ID")]
    id: u64,
}

impl From<TeamMember> for MemberDisplay {
    fn from(member: TeamMember) -> Self {
        Self {
            login: member.login,
            id: member.id,
        }
    }
}

/// Repository row for table display
#[derive(Tabled)]
struct RepoDisplay {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "VISIBILITY")]
    visibility: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
}

impl From<Repository> for RepoDisplay {
    fn from(repo: Repository) -> Self {
        Self {
            name: repo.name,
            visibility: if repo.private { "private" } else { "public" }.to_string(),
            description: repo.description.unwrap_or_default(),
        }
    }
}

/// Run the team list command
pub async fn list(
    format: OutputFormat,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(format, org_override, config_path)?;
    let org = ctx.require_org()?;

    let teams = ctx.client.list_teams(org).await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<TeamDisplay> = teams.into_iter().map(TeamDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&teams)?);
        }
    }

    Ok(())
}

/// Run the team get command
pub async fn get(
    team: String,
    format: OutputFormat,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(format, org_override, config_path)?;
    let org = ctx.require_org()?;

    let team = ctx.client.get_team(org, &team).await?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", team.name.bold());
            println!();
            println!("  Slug:    {}", team.slug);
            println!("  Privacy: {}", team.privacy);
            if let Some(description) = &team.description {
                println!("  About:   {}", description);
            }
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&team)?);
        }
    }

    Ok(())
}

/// Run the team members command
pub async fn members(
    team: String,
    format: OutputFormat,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(format, org_override, config_path)?;
    let org = ctx.require_org()?;

    let members = ctx.client.list_team_members(org, &team).await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<MemberDisplay> = members.into_iter().map(MemberDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&members)?);
        }
    }

    Ok(())
}

/// Run the team add-member command
pub async fn add_member(
    team: String,
    username: String,
    role: TeamRole,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(OutputFormat::Table, org_override, config_path)?;
    let org = ctx.require_org()?;

    ctx.client
        .add_team_member(org, &team, &username, role)
        .await?;

    println!(
        "{} Added {} to {} as {}",
        "✓".green(),
        username.bold(),
        team,
        role
    );

    Ok(())
}

/// Run the team remove-member command
pub async fn remove_member(
    team: String,
    username: String,
    yes: bool,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(OutputFormat::Table, org_override, config_path)?;
    let org = ctx.require_org()?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {} from team {}?", username, team))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    ctx.client.remove_team_member(org, &team, &username).await?;

    println!("{} Removed {} from {}", "✓".green(), username.bold(), team);

    Ok(())
}

/// Run the team set-role command
pub async fn set_role(
    team: String,
    username: String,
    role: TeamRole,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(OutputFormat::Table, org_override, config_path)?;
    let org = ctx.require_org()?;

    ctx.client
        .update_team_member_role(org, &team, &username, role)
        .await?;

    println!(
        "{} {} is now a {} of {}",
        "✓".green(),
        username.bold(),
        role,
        team
    );

    Ok(())
}

/// Run the team repos command
pub async fn repos(
    team: String,
    format: OutputFormat,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(format, org_override, config_path)?;
    let org = ctx.require_org()?;

    let repos = ctx.client.list_team_repositories(org, &team).await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<RepoDisplay> = repos.into_iter().map(RepoDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&repos)?);
        }
    }

    Ok(())
}

/// Run the team grant-repo command
pub async fn grant_repo(
    team: String,
    repo: String,
    permission: RepoPermission,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(OutputFormat::Table, org_override, config_path)?;
    let org = ctx.require_org()?;

    ctx.client
        .link_team_to_repository(org, &team, &repo, permission)
        .await?;

    println!(
        "{} Granted {} {} access to {}",
        "✓".green(),
        team.bold(),
        permission,
        repo
    );

    Ok(())
}
