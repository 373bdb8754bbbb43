//! Fleet commands (owner)

use colored::Colorize;

use crate::cli::args::{GlobalOptions, PasswordArgs};
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, prompt};
use crate::client::OwnerApi;
use crate::client::models::{OwnerBus, RegisterBusRequest};
use crate::error::Result;
use crate::models::FleetBusDisplay;
use crate::session::Portal;

/// Run the fleet list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<OwnerBus, FleetBusDisplay, _, _>(
        opts,
        Portal::Owner,
        "fleet buses",
        |client| async move { client.list_fleet().await },
    )
    .await
}

/// Run the fleet register command
pub async fn register(
    opts: &GlobalOptions,
    registration_number: String,
    route_up: i64,
    route_down: i64,
    password: &PasswordArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.authorize(Portal::Owner)?;

    let request = RegisterBusRequest {
        registration_number,
        password: prompt::password(password, "Bus login password")?,
        route_id_up: route_up,
        route_id_down: route_down,
    };

    ctx.client.register_bus(&request).await?;

    println!(
        "{} Registered bus {}",
        "✓".green(),
        request.registration_number.bold()
    );
    Ok(())
}
