//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use crate::session::Portal;

pub mod args;
pub mod bus;
pub mod bus_owner;
pub mod completions;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod fleet;
pub mod handlers;
pub mod login;
pub mod prompt;
pub mod route;
pub mod status;
pub mod ticket;
pub mod user;

pub use args::{ConfirmArgs, OutputFormat, PaginationArgs, PasswordArgs};
pub use context::CommandContext;

/// transitctl - terminal client for the Swift Transit admin and bus-owner portals
#[derive(Parser, Debug)]
#[command(name = "transitctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Portal to act on (admin, owner)
    #[arg(
        long,
        global = true,
        value_enum,
        env = "TRANSITCTL_PORTAL",
        hide_env = true
    )]
    pub portal: Option<Portal>,

    /// Override the API base URL
    #[arg(long, global = true, env = "TRANSITCTL_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "TRANSITCTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Output format (table, pretty, json)
    #[arg(
        long,
        global = true,
        value_enum,
        env = "TRANSITCTL_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, global = true, env = "TRANSITCTL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in to the selected portal
    Login {
        /// Username (prompted when omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        #[command(flatten)]
        password: PasswordArgs,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show session and configuration status
    Status,

    /// Show who is signed in
    Whoami,

    /// Display version information
    Version,

    /// Show dashboard figures (admin stats or owner revenue)
    Dashboard,

    /// Manage passenger accounts (admin)
    #[command(subcommand)]
    User(UserCommands),

    /// Manage bus owner accounts (admin)
    #[command(subcommand)]
    Owner(OwnerCommands),

    /// Manage buses (admin)
    #[command(subcommand)]
    Bus(BusCommands),

    /// List and manage routes
    #[command(subcommand)]
    Route(RouteCommands),

    /// View sold tickets (admin)
    #[command(subcommand)]
    Ticket(TicketCommands),

    /// View wallet transactions (admin)
    #[command(subcommand)]
    Transaction(TransactionCommands),

    /// Manage your fleet (owner)
    #[command(subcommand)]
    Fleet(FleetCommands),

    /// Show or change the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   transitctl completion bash > /etc/bash_completion.d/transitctl
  zsh:    transitctl completion zsh > \"${fpath[1]}/_transitctl\"
  fish:   transitctl completion fish > ~/.config/fish/completions/transitctl.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config file subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Set a config value and save the file
    Set {
        /// Key to change
        #[arg(value_enum)]
        key: config::ConfigKey,

        /// New value
        value: String,
    },
}

/// Passenger account subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List passengers
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Delete a passenger account
    Delete {
        /// User ID
        id: i64,

        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

/// Bus owner account subcommands
#[derive(Subcommand, Debug)]
pub enum OwnerCommands {
    /// List bus owners
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Create a bus owner account
    Create {
        /// Username for the new owner (prompted when omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        #[command(flatten)]
        password: PasswordArgs,
    },

    /// Rename a bus owner and optionally reset their password
    Update {
        /// Bus owner ID
        id: i64,

        /// New username (prompted when omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Prompt for a new password
        #[arg(long, conflicts_with = "password_stdin")]
        reset_password: bool,

        #[command(flatten)]
        password: PasswordArgs,
    },

    /// Delete a bus owner account
    Delete {
        /// Bus owner ID
        id: i64,

        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

/// Bus subcommands
#[derive(Subcommand, Debug)]
pub enum BusCommands {
    /// List all registered buses
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Delete a bus
    Delete {
        /// Bus ID
        id: i64,

        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

/// Route subcommands
#[derive(Subcommand, Debug)]
pub enum RouteCommands {
    /// List routes (paged for admins)
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Delete a route (admin)
    Delete {
        /// Route ID
        id: i64,

        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

/// Ticket subcommands
#[derive(Subcommand, Debug)]
pub enum TicketCommands {
    /// List sold tickets
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// List wallet transactions
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// Fleet subcommands
#[derive(Subcommand, Debug)]
pub enum FleetCommands {
    /// List buses in your fleet
    List,

    /// Register a new bus
    Register {
        /// Registration number, e.g. DHK-METRO-11-1234
        registration_number: String,

        /// Route ID for the up direction
        #[arg(long)]
        route_up: i64,

        /// Route ID for the down direction
        #[arg(long)]
        route_down: i64,

        #[command(flatten)]
        password: PasswordArgs,
    },
}
