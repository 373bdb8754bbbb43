//! Dashboard command
//!
//! Admins get platform totals. Owners get fleet revenue by period plus a
//! per-bus breakdown, fetched concurrently.

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::{BusAnalytics, OwnerAnalytics};
use crate::client::{AdminApi, OwnerApi};
use crate::error::Result;
use crate::models::{BusRevenueDisplay, PeriodDisplay, StatDisplay};
use crate::output::Formattable;
use crate::output::json::format_json;
use crate::session::Portal;

/// Combined owner dashboard payload for JSON output
#[derive(Debug, Serialize)]
struct OwnerDashboard {
    analytics: OwnerAnalytics,
    per_bus: Vec<BusAnalytics>,
}

/// Run the dashboard command for whichever portal is selected
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.authorize(ctx.portal)?;

    match ctx.portal {
        Portal::Admin => admin(&ctx).await,
        Portal::Owner => owner(&ctx).await,
    }
}

async fn admin(ctx: &CommandContext) -> Result<()> {
    let stats = ctx.client.dashboard_stats().await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&stats)?);
        return Ok(());
    }

    StatDisplay::rows(&stats).print(ctx.format)
}

async fn owner(ctx: &CommandContext) -> Result<()> {
    let (analytics, per_bus) =
        futures::try_join!(ctx.client.analytics(), ctx.client.per_bus_analytics())?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&OwnerDashboard { analytics, per_bus })?);
        return Ok(());
    }

    println!("{}", "Revenue".bold());
    PeriodDisplay::rows(&analytics).print(ctx.format)?;

    println!("\n{}", "Per bus".bold());
    if per_bus.is_empty() {
        println!("{}", "No buses have sold tickets yet.".dimmed());
        return Ok(());
    }
    BusRevenueDisplay::rows(per_bus).print(ctx.format)
}
