//! Passenger account commands (admin)

use crate::cli::PaginationArgs;
use crate::cli::args::{ConfirmArgs, GlobalOptions};
use crate::cli::handlers::{run_delete_command, run_page_command};
use crate::client::AdminApi;
use crate::client::models::User;
use crate::error::Result;
use crate::models::UserDisplay;

/// Run the user list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_page_command::<User, UserDisplay, _, _>(
        opts,
        pagination,
        "users",
        |client, params| async move { client.list_users(&params).await },
    )
    .await
}

/// Run the user delete command
pub async fn delete(opts: &GlobalOptions, id: i64, confirm: &ConfirmArgs) -> Result<()> {
    run_delete_command(opts, confirm, "user", id, |client, id| async move {
        client.delete_user(id).await
    })
    .await
}
