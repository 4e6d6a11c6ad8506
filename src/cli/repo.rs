//! Repository management commands

use colored::Colorize;
use dialoguer::Confirm;
use tabled::Tabled;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::{CreateRepositoryRequest, GitHubApi, RepoCollaborator, RepoPermission};
use crate::error::Result;
use crate::output::{json, table};

/// Collaborator row for table display
#[derive(Tabled)]
struct CollaboratorDisplay {
    #[tabled(rename = "LOGIN")]
    login: String,
    #[tabled(rename = "ROLE")]
    role: String,
}

impl From<RepoCollaborator> for CollaboratorDisplay {
    fn from(collaborator: RepoCollaborator) -> Self {
        Self {
            login: collaborator.login,
            role: collaborator.role_name.unwrap_or_default(),
        }
    }
}

/// Run the repo create command
pub async fn create(
    name: String,
    description: Option<String>,
    public: bool,
    format: OutputFormat,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(format, org_override, config_path)?;
    let org = ctx.require_org()?;

    let request = CreateRepositoryRequest::new(name, description, !public);
    let repo = ctx.client.create_repository(org, request).await?;

    match ctx.format {
        OutputFormat::Table => {
            println!(
                "{} Created {} repository {}",
                "✓".green(),
                if repo.private { "private" } else { "public" },
                repo.full_name.as_deref().unwrap_or(&repo.name).bold()
            );
            if let Some(url) = &repo.html_url {
                println!("  {}", url.cyan());
            }
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&repo)?);
        }
    }

    Ok(())
}

/// Run the repo collaborators command
pub async fn collaborators(
    repo: String,
    format: OutputFormat,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(format, org_override, config_path)?;
    let org = ctx.require_org()?;

    let collaborators = ctx.client.list_repo_collaborators(org, &repo).await?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<CollaboratorDisplay> = collaborators
                .into_iter()
                .map(CollaboratorDisplay::from)
                .collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&collaborators)?);
        }
    }

    Ok(())
}

/// Run the repo add-collaborator command
pub async fn add_collaborator(
    repo: String,
    username: String,
    permission: RepoPermission,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(OutputFormat::Table, org_override, config_path)?;
    let org = ctx.require_org()?;

    ctx.client
        .add_repo_collaborator(org, &repo, &username, permission)
        .await?;

    println!(
        "{} Added {} to {} with {} access",
        "✓".green(),
        username.bold(),
        repo,
        permission
    );

    Ok(())
}

/// Run the repo remove-collaborator command
pub async fn remove_collaborator(
    repo: String,
    username: String,
    yes: bool,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(OutputFormat::Table, org_override, config_path)?;
    let org = ctx.require_org()?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {} from {}?", username, repo))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    ctx.client
        .remove_repo_collaborator(org, &repo, &username)
        .await?;

    println!("{} Removed {} from {}", "✓".green(), username.bold(), repo);

    Ok(())
}
