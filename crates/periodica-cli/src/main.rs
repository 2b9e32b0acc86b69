mod cli;
mod commands;
mod config;
mod data;
mod display;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::data::DataManager;
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run_app().await {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("Periodica CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = dispatch(cli).await;
    if let Err(e) = &result {
        error!("Command failed: {}", e);
    }
    result
}

async fn dispatch(cli: Cli) -> Result<()> {
    if let Commands::Data(args) = cli.command {
        info!("Dispatching to 'data' command.");
        return commands::data::run(args).await;
    }

    let data_manager = DataManager::new()?;
    let app_config = config::build_config(&cli, &data_manager)?;

    match cli.command {
        Commands::Element(args) => commands::element::run(args, &app_config).await,
        Commands::List(args) => commands::list::run(args, &app_config).await,
        Commands::Search(args) => commands::search::run(args, &app_config).await,
        Commands::Mix(args) => commands::mix::run(args, &app_config).await,
        Commands::Lab => commands::lab::run(&app_config).await,
        Commands::Quiz(args) => commands::quiz::run(args, &app_config).await,
        Commands::Compound(args) => commands::compound::run(args, &app_config).await,
        Commands::Data(args) => commands::data::run(args).await,
    }
}
