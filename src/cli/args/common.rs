//! Common CLI types shared across commands

use clap::{Args, ValueEnum};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - borderless, for reading
    Pretty,
    /// Table format - one row per entry (global default)
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file. Unknown names yield `None`.
    pub fn from_preference(name: &str) -> Option<Self> {
        Self::from_str(name, true).ok()
    }
}

/// Secret input for commands that send a password
#[derive(Args, Debug, Default, Clone)]
pub struct PasswordArgs {
    /// Read the password from stdin instead of prompting
    #[arg(long)]
    pub password_stdin: bool,
}

/// Skip the confirmation prompt on destructive commands
#[derive(Args, Debug, Default, Clone)]
pub struct ConfirmArgs {
    /// Do not ask for confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}
