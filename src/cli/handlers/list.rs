//! Generic list command handlers
//!
//! Both handlers follow the same flow:
//! 1. Create command context
//! 2. Check portal and session
//! 3. Fetch data
//! 4. Convert to display type
//! 5. Print output

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::{Page, PaginationParams, TransitClient};
use crate::error::Result;
use crate::output::Formattable;
use crate::session::Portal;

/// Run a paged list command (admin resources).
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `User`, `Bus`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, and `Serialize`
///
/// # Example
///
/// ```ignore
/// run_page_command::<User, UserDisplay, _, _>(
///     opts,
///     pagination,
///     "users",
///     |client, params| async move { client.list_users(&params).await },
/// ).await
/// ```
pub async fn run_page_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    pagination: &PaginationArgs,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Page<T>>>,
    F: FnOnce(Arc<TransitClient>, PaginationParams) -> Fut,
{
    let ctx = CommandContext::new(opts)?;
    ctx.authorize(Portal::Admin)?;

    let params = ctx.pagination(pagination);
    debug!("Fetching {} page {:?}", resource_name, params.page);

    let page = fetcher(ctx.client.clone(), params).await?;

    debug!(
        "Fetched {} of {} {}",
        page.items.len(),
        page.total,
        resource_name
    );

    page.map(D::from).print(ctx.format)
}

/// Run an unpaged list command for the given portal.
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    portal: Portal,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(Arc<TransitClient>) -> Fut,
{
    let ctx = CommandContext::new(opts)?;
    ctx.authorize(portal)?;

    debug!("Fetching {}", resource_name);
    let items = fetcher(ctx.client.clone()).await?;
    debug!("Fetched {} {}", items.len(), resource_name);

    let display_items: Vec<D> = items.into_iter().map(D::from).collect();
    display_items.print(ctx.format)
}
