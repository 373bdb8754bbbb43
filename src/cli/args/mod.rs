//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod global;
mod pagination;

pub use common::{ConfirmArgs, OutputFormat, PasswordArgs};
pub use global::GlobalOptions;
pub use pagination::PaginationArgs;
