//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Local, Utc};

use crate::client::Page;

/// Placeholder for values the API did not provide
pub const MISSING: &str = "--";

/// Format a taka amount with two decimals.
///
/// # Example output
/// `৳1250.00`
pub fn format_taka(amount: f64) -> String {
    format!("৳{:.2}", amount)
}

/// Format a UTC timestamp in local time, or `--` when absent.
///
/// # Example output
/// `2025-01-15 14:30`
pub fn format_datetime(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => MISSING.to_string(),
    }
}

/// Format an optional displayable value, or `--` when absent
pub fn or_missing<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Paging summary printed under list tables
pub fn page_footer<T>(page: &Page<T>) -> String {
    let mut footer = format!(
        "Page {} of {} ({} total)",
        page.page, page.total_pages, page.total
    );
    if page.has_next_page() {
        footer.push_str(&format!(" - next: --page {}", page.page + 1));
    }
    footer
}
