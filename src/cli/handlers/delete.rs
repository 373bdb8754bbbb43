//! Generic delete command handler

use std::future::Future;
use std::sync::Arc;

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use log::debug;

use crate::cli::args::{ConfirmArgs, GlobalOptions};
use crate::cli::CommandContext;
use crate::client::TransitClient;
use crate::error::Result;
use crate::session::Portal;

/// Confirm, then delete one admin resource by id.
///
/// A declined prompt is not an error; nothing is sent.
pub async fn run_delete_command<Fut, F>(
    opts: &GlobalOptions,
    confirm: &ConfirmArgs,
    label: &str,
    id: i64,
    deleter: F,
) -> Result<()>
where
    Fut: Future<Output = Result<()>>,
    F: FnOnce(Arc<TransitClient>, i64) -> Fut,
{
    let ctx = CommandContext::new(opts)?;
    ctx.authorize(Portal::Admin)?;

    if !confirm.yes {
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete {} {}?", label, id))
            .default(false)
            .interact()?;

        if !proceed {
            println!("{}", "Cancelled.".dimmed());
            return Ok(());
        }
    }

    debug!("Deleting {} {}", label, id);
    deleter(ctx.client.clone(), id).await?;

    println!("{} Deleted {} {}", "✓".green(), label, id);
    Ok(())
}
