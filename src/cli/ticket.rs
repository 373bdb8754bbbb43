//! Ticket and transaction commands (admin)

use crate::cli::PaginationArgs;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_page_command;
use crate::client::AdminApi;
use crate::client::models::{Ticket, Transaction};
use crate::error::Result;
use crate::models::{TicketDisplay, TransactionDisplay};

/// Run the ticket list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_page_command::<Ticket, TicketDisplay, _, _>(
        opts,
        pagination,
        "tickets",
        |client, params| async move { client.list_tickets(&params).await },
    )
    .await
}

/// Run the transaction list command
pub async fn list_transactions(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_page_command::<Transaction, TransactionDisplay, _, _>(
        opts,
        pagination,
        "transactions",
        |client, params| async move { client.list_transactions(&params).await },
    )
    .await
}
