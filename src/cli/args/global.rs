//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};
use crate::session::Portal;

/// Global CLI options passed to all command handlers.
///
/// Precedence for every option: CLI flag > environment variable > config
/// file > default. This struct captures the CLI/env layer; config file
/// values are applied in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format, when given on the command line
    pub format: Option<OutputFormat>,

    /// Portal override (bypasses the config file)
    pub portal: Option<Portal>,

    /// Custom config file path (defaults to ~/.transitctl/config.yaml)
    pub config: Option<String>,

    /// API base URL override
    pub api_host: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            portal: cli.portal,
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
