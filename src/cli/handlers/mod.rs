//! Reusable command handlers

mod delete;
mod list;

pub use delete::run_delete_command;
pub use list::{run_list_command, run_page_command};
