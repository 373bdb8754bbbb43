//! Bus commands (admin)

use crate::cli::PaginationArgs;
use crate::cli::args::{ConfirmArgs, GlobalOptions};
use crate::cli::handlers::{run_delete_command, run_page_command};
use crate::client::AdminApi;
use crate::client::models::Bus;
use crate::error::Result;
use crate::models::BusDisplay;

/// Run the bus list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_page_command::<Bus, BusDisplay, _, _>(
        opts,
        pagination,
        "buses",
        |client, params| async move { client.list_buses(&params).await },
    )
    .await
}

/// Run the bus delete command
pub async fn delete(opts: &GlobalOptions, id: i64, confirm: &ConfirmArgs) -> Result<()> {
    run_delete_command(opts, confirm, "bus", id, |client, id| async move {
        client.delete_bus(id).await
    })
    .await
}
