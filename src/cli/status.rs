//! Status and whoami commands

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::Principal;
use crate::config::Config;
use crate::error::Result;
use crate::output::json::format_json;
use crate::session::{Portal, SessionSnapshot};

/// Machine-readable session/config summary
#[derive(Debug, Serialize)]
struct StatusReport {
    config_file: String,
    config_found: bool,
    api_host: String,
    portal: Portal,
    state_dir: String,
    authenticated: bool,
    verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    principal: Option<Principal>,
}

impl StatusReport {
    fn new(ctx: &CommandContext, opts: &GlobalOptions, snapshot: &SessionSnapshot) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        Ok(Self {
            config_found: config_path.exists(),
            config_file: config_path.display().to_string(),
            api_host: ctx.api_host.clone(),
            portal: ctx.portal,
            state_dir: ctx.config.state_dir()?.display().to_string(),
            authenticated: snapshot.is_authenticated(),
            verified: snapshot.verified,
            principal: snapshot.principal.clone(),
        })
    }
}

/// Run the status command to display session and configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let report = StatusReport::new(&ctx, opts, &ctx.session.snapshot())?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&report)?);
        return Ok(());
    }

    println!("{}\n", "transitctl Status".bold());

    if report.config_found {
        println!("Config file: {}", report.config_file.cyan());
    } else {
        println!(
            "Config file: {} {}",
            report.config_file.cyan(),
            "(not found, using defaults)".dimmed()
        );
    }
    println!("API host: {}", report.api_host.cyan());
    println!("Portal: {}", report.portal.to_string().bold());
    println!("State dir: {}", report.state_dir.dimmed());
    println!();

    if report.authenticated {
        if report.verified {
            println!("{} Signed in", "✓".green());
        } else {
            println!(
                "{} Signed in {}",
                "✓".green(),
                "(stored session, not yet used)".dimmed()
            );
        }
    } else {
        println!("{} Not signed in", "✗".red());
        println!("  → Run 'transitctl login' to start a session");
    }

    println!();
    Ok(())
}

/// Run the whoami command
///
/// The principal is only known in the process that logged in; a session
/// restored from storage reports just the portal.
pub fn whoami(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let snapshot = ctx.session.snapshot();

    if ctx.format == OutputFormat::Json {
        let report = StatusReport::new(&ctx, opts, &snapshot)?;
        println!("{}", format_json(&report)?);
        return Ok(());
    }

    match (&snapshot.credential, &snapshot.principal) {
        (Some(_), Some(principal)) => println!(
            "{} ({} portal)",
            principal.username.bold(),
            ctx.portal
        ),
        (Some(_), None) => println!(
            "Signed in to the {} portal {}",
            ctx.portal,
            "(identity is not stored between runs)".dimmed()
        ),
        (None, _) => println!("{} Not signed in", "✗".red()),
    }
    Ok(())
}
