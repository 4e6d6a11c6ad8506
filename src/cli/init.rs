//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};

use crate::client::{GitHubApi, GitHubClient};
use crate::config::{Config, ConfigUpdate};
use crate::error::Result;

/// Run the init command.
///
/// Prompts for a GitHub access token and (optionally) a default
/// organization, verifies the organization against the API, and saves the
/// configuration.
pub async fn run(config_path: Option<&str>) -> Result<()> {
    println!("{}", "Welcome to orgkit!".bold().green());
    println!("Let's set up your GitHub configuration.\n");

    let token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your GitHub access token")
        .interact()?;

    let set_org = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Set a default organization now?")
        .default(true)
        .interact()?;

    let org = if set_org {
        let login: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Organization login")
            .interact_text()?;

        // Verify the token and the org in one call
        println!("\n{}", "Verifying organization access...".cyan());
        let host = std::env::var("ORGKIT_API_HOST").ok();
        let client = GitHubClient::with_host(Some(token.clone()), host)?;
        let organization = client.get_organization(&login).await?;

        println!(
            "{} Found organization: {}",
            "✓".green(),
            organization
                .name
                .as_deref()
                .unwrap_or(&organization.login)
                .bold()
        );
        Some(organization.login)
    } else {
        None
    };

    let existing = Config::load_at(config_path).unwrap_or_default();
    let config = existing.apply(ConfigUpdate {
        token: Some(token),
        org,
        ..Default::default()
    });
    config.save_at(config_path)?;

    let path = Config::resolve_path(config_path)?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        path.display()
    );

    if let Some(org) = &config.org {
        println!("  Default organization: {}", org.bold());
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "orgkit status".cyan());
    println!("  {} - List teams", "orgkit team list".cyan());
    println!(
        "  {} - Create a team and repository",
        "orgkit provision --help".cyan()
    );

    Ok(())
}
