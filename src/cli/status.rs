//! Status command implementation

use colored::Colorize;

use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(config_path: Option<&str>) -> Result<()> {
    println!("{}\n", "orgkit Configuration Status".bold());

    match Config::load_at(config_path) {
        Ok(config) => {
            let path = Config::resolve_path(config_path)?;
            println!("Config file: {}", path.display().to_string().cyan());
            println!();

            if config.token.is_some() {
                println!("{} Access token configured", "✓".green());
            } else {
                println!("{} Access token not configured", "✗".red());
                println!("  → Run 'orgkit init' to configure");
            }

            if let Some(ref org) = config.org {
                println!("{} Default organization: {}", "✓".green(), org);
            } else {
                println!("{} No default organization set", "○".dimmed());
                println!("  → Run 'orgkit org set <LOGIN>' to set one");
            }

            if let Some(ref format) = config.preferences.format {
                println!("{} Default output format: {}", "○".dimmed(), format);
            }

            println!();
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "orgkit init".cyan()
            );
            println!();
        }
    }

    Ok(())
}
