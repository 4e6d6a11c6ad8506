//! Organization command implementations

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::GitHubApi;
use crate::config::ConfigUpdate;
use crate::error::Result;
use crate::output::json;

/// Run the org set command
pub async fn set(login: String, config_path: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(OutputFormat::Table, None, config_path)?;

    println!("Verifying organization...");
    let org = ctx.client.get_organization(&login).await?;

    let config = ctx.config.apply(ConfigUpdate {
        org: Some(org.login.clone()),
        ..Default::default()
    });
    config.save_at(config_path)?;

    println!(
        "{} Set default organization to: {} ({})",
        "✓".green(),
        org.name.as_deref().unwrap_or(&org.login).bold(),
        org.login
    );

    Ok(())
}

/// Run the org get command
pub async fn get(
    format: OutputFormat,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(format, org_override, config_path)?;
    let login = ctx.require_org()?;

    let org = ctx.client.get_organization(login).await?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", "Current Default Organization".bold());
            println!();
            println!("  Login: {}", org.login);
            if let Some(name) = &org.name {
                println!("  Name:  {}", name);
            }
            if let Some(description) = &org.description {
                println!("  About: {}", description);
            }
        }
        OutputFormat::Json => {
            let output = json::format_json(&org)?;
            println!("{}", output);
        }
    }

    Ok(())
}
