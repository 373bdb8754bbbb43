//! Bus owner account commands (admin)

use colored::Colorize;

use crate::cli::args::{ConfirmArgs, GlobalOptions, PasswordArgs};
use crate::cli::handlers::{run_delete_command, run_page_command};
use crate::cli::{CommandContext, PaginationArgs, prompt};
use crate::client::AdminApi;
use crate::client::models::{BusOwner, CreateBusOwnerRequest, UpdateBusOwnerRequest};
use crate::error::Result;
use crate::models::BusOwnerDisplay;
use crate::session::Portal;

/// Run the owner list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_page_command::<BusOwner, BusOwnerDisplay, _, _>(
        opts,
        pagination,
        "bus owners",
        |client, params| async move { client.list_bus_owners(&params).await },
    )
    .await
}

/// Run the owner create command
pub async fn create(
    opts: &GlobalOptions,
    username: Option<String>,
    password: &PasswordArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.authorize(Portal::Admin)?;

    let request = CreateBusOwnerRequest {
        username: prompt::text_or_prompt(username, "Owner username")?,
        password: prompt::password(password, "Owner password")?,
    };

    ctx.client.create_bus_owner(&request).await?;

    println!(
        "{} Created bus owner {}",
        "✓".green(),
        request.username.bold()
    );
    Ok(())
}

/// Run the owner update command
///
/// The password is only sent when `--reset-password` or `--password-stdin`
/// is given; otherwise the server keeps the current one.
pub async fn update(
    opts: &GlobalOptions,
    id: i64,
    username: Option<String>,
    reset_password: bool,
    password: &PasswordArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.authorize(Portal::Admin)?;

    let username = prompt::text_or_prompt(username, "Owner username")?;
    let password = if reset_password || password.password_stdin {
        Some(prompt::password(password, "New password")?)
    } else {
        None
    };

    let request = UpdateBusOwnerRequest { username, password };
    ctx.client.update_bus_owner(id, &request).await?;

    println!(
        "{} Updated bus owner {} ({})",
        "✓".green(),
        id,
        request.username.bold()
    );
    Ok(())
}

/// Run the owner delete command
pub async fn delete(opts: &GlobalOptions, id: i64, confirm: &ConfirmArgs) -> Result<()> {
    run_delete_command(opts, confirm, "bus owner", id, |client, id| async move {
        client.delete_bus_owner(id).await
    })
    .await
}
