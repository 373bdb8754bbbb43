//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::PaginationParams;

/// Shared pagination arguments for paged list commands.
///
/// Flatten this into any command that supports pagination:
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Page number (1-indexed)
    #[arg(long, short = 'p')]
    pub page: Option<usize>,

    /// Results per page
    #[arg(long, short = 'n')]
    pub page_size: Option<usize>,
}

impl PaginationArgs {
    /// Convert CLI args to API pagination params, falling back to the
    /// configured page size.
    pub fn to_params(&self, default_page_size: usize) -> PaginationParams {
        PaginationParams::new()
            .page(self.page.unwrap_or(1))
            .page_size(self.page_size.unwrap_or(default_page_size))
    }
}
