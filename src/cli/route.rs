//! Route commands
//!
//! Admins see the paged route catalogue; owners see the routes they may
//! assign buses to.

use crate::cli::args::{ConfirmArgs, GlobalOptions};
use crate::cli::handlers::run_delete_command;
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::{AdminApi, OwnerApi};
use crate::error::Result;
use crate::models::RouteDisplay;
use crate::output::Formattable;
use crate::session::Portal;

/// Run the route list command for whichever portal is selected
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.authorize(ctx.portal)?;

    match ctx.portal {
        Portal::Admin => {
            let page = ctx.client.list_routes(&ctx.pagination(pagination)).await?;
            page.map(RouteDisplay::from).print(ctx.format)
        }
        Portal::Owner => {
            let routes = ctx.client.available_routes().await?;
            let display: Vec<RouteDisplay> = routes.into_iter().map(RouteDisplay::from).collect();
            display.print(ctx.format)
        }
    }
}

/// Run the route delete command
pub async fn delete(opts: &GlobalOptions, id: i64, confirm: &ConfirmArgs) -> Result<()> {
    run_delete_command(opts, confirm, "route", id, |client, id| async move {
        client.delete_route(id).await
    })
    .await
}
