//! Provision command implementation
//!
//! Drives the provisioning workflow and renders its outcome: the failed
//! step name and cause on error, or the created team, repository, and
//! member tally on success.

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat, ProvisionArgs};
use crate::error::Result;
use crate::output::json;
use crate::workflow::{self, ProvisionRequest, RepoSpec, TeamSpec};

/// Build the workflow request from CLI arguments
fn to_request(args: &ProvisionArgs, org: &str) -> ProvisionRequest {
    ProvisionRequest {
        org: org.to_string(),
        team: TeamSpec {
            name: args.team.clone(),
            description: args.team_description.clone(),
            privacy: args.privacy,
        },
        members: args.members.clone(),
        repo: RepoSpec {
            name: args.repo.clone(),
            description: args.repo_description.clone(),
            private: !args.public,
        },
        permission: args.permission,
        member_policy: args.on_member_error,
    }
}

/// Print the steps a run would take, without calling the API
fn print_plan(request: &ProvisionRequest) {
    println!("{}", "Provisioning plan (dry run):".bold());
    println!(
        "  1. Create {} team '{}' in org '{}'",
        request.team.privacy, request.team.name, request.org
    );
    if request.members.is_empty() {
        println!("  2. (no members to add)");
    } else {
        for (i, member) in request.members.iter().enumerate() {
            println!(
                "  2.{} Add {} as {}",
                i + 1,
                member.username,
                member.role
            );
        }
    }
    println!(
        "  3. Create {} repository '{}'",
        if request.repo.private {
            "private"
        } else {
            "public"
        },
        request.repo.name
    );
    println!(
        "  4. Link team '{}' to '{}' with {} permission",
        request.team.name, request.repo.name, request.permission
    );
    println!("\nNo changes made.");
}

/// Run the provision command
pub async fn run(
    args: ProvisionArgs,
    format: OutputFormat,
    org_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(format, org_override, config_path)?;
    let org = ctx.require_org()?;
    let request = to_request(&args, org);

    if args.dry_run {
        print_plan(&request);
        return Ok(());
    }

    let summary = workflow::run(ctx.client.as_ref(), &request).await?;

    match ctx.format {
        OutputFormat::Table => {
            println!(
                "{} Created team {} (slug: {})",
                "✓".green(),
                summary.team.name.bold(),
                summary.team.slug
            );
            println!(
                "{} Created repository {}",
                "✓".green(),
                summary
                    .repository
                    .full_name
                    .as_deref()
                    .unwrap_or(&summary.repository.name)
                    .bold()
            );
            println!(
                "{} Linked team with {} permission",
                "✓".green(),
                request.permission
            );

            if summary.members_added > 0 {
                println!("{} Added {} member(s)", "✓".green(), summary.members_added);
            }
            for failure in &summary.member_failures {
                println!(
                    "{} Could not add {}: {}",
                    "⚠".yellow(),
                    failure.username.bold(),
                    failure.reason
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&summary)?);
        }
    }

    Ok(())
}
