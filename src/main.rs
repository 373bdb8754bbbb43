//! transitctl - terminal client for the Swift Transit admin and bus-owner portals

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;
mod storage;

use cli::args::GlobalOptions;
use cli::{
    BusCommands, Cli, Commands, ConfigCommands, FleetCommands, OwnerCommands, RouteCommands,
    TicketCommands, TransactionCommands, UserCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { username, password } => {
            cli::login::login(&opts, username, &password).await
        }
        Commands::Logout => cli::login::logout(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Whoami => cli::status::whoami(&opts),
        Commands::Version => {
            println!("transitctl version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Dashboard => cli::dashboard::run(&opts).await,
        Commands::User(cmd) => match cmd {
            UserCommands::List { pagination } => cli::user::list(&opts, &pagination).await,
            UserCommands::Delete { id, confirm } => cli::user::delete(&opts, id, &confirm).await,
        },
        Commands::Owner(cmd) => match cmd {
            OwnerCommands::List { pagination } => cli::bus_owner::list(&opts, &pagination).await,
            OwnerCommands::Create { username, password } => {
                cli::bus_owner::create(&opts, username, &password).await
            }
            OwnerCommands::Update {
                id,
                username,
                reset_password,
                password,
            } => cli::bus_owner::update(&opts, id, username, reset_password, &password).await,
            OwnerCommands::Delete { id, confirm } => {
                cli::bus_owner::delete(&opts, id, &confirm).await
            }
        },
        Commands::Bus(cmd) => match cmd {
            BusCommands::List { pagination } => cli::bus::list(&opts, &pagination).await,
            BusCommands::Delete { id, confirm } => cli::bus::delete(&opts, id, &confirm).await,
        },
        Commands::Route(cmd) => match cmd {
            RouteCommands::List { pagination } => cli::route::list(&opts, &pagination).await,
            RouteCommands::Delete { id, confirm } => {
                cli::route::delete(&opts, id, &confirm).await
            }
        },
        Commands::Ticket(TicketCommands::List { pagination }) => {
            cli::ticket::list(&opts, &pagination).await
        }
        Commands::Transaction(TransactionCommands::List { pagination }) => {
            cli::ticket::list_transactions(&opts, &pagination).await
        }
        Commands::Fleet(cmd) => match cmd {
            FleetCommands::List => cli::fleet::list(&opts).await,
            FleetCommands::Register {
                registration_number,
                route_up,
                route_down,
                password,
            } => {
                cli::fleet::register(&opts, registration_number, route_up, route_down, &password)
                    .await
            }
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => cli::config::show(&opts),
            ConfigCommands::Set { key, value } => cli::config::set(&opts, key, &value),
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}

/// `--debug` raises the default filter; `RUST_LOG` still wins.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
