//! mapfetch CLI - Command-line interface
//!
//! Fetches map tiles and static maps through the mapfetch library, caching
//! downloads on disk.
//!
//! # Commands
//!
//! - `providers` - List the built-in tile providers
//! - `tile` - Fetch one tile by zoom and tile coordinates
//! - `static` - Fetch one static map by center and zoom

mod commands;
mod error;

use clap::{Parser, Subcommand};
use mapfetch::logging::init_logging;
use mapfetch::provider::ProviderRegistry;

use commands::common::GlobalOptions;
use commands::static_map::StaticArgs;
use commands::tile::TileArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "mapfetch")]
#[command(version = mapfetch::VERSION)]
#[command(about = "Fetch map tiles and static maps, with a local cache", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in tile providers
    Providers,

    /// Fetch one tile and save it as an image
    Tile(TileArgs),

    /// Fetch one static map and save it as an image
    Static(StaticArgs),
}

fn main() {
    let cli = Cli::parse();

    // Guard must live until main returns so the log file is flushed.
    let _guard = match init_logging(&cli.global.log_config()) {
        Ok(guard) => guard,
        Err(e) => CliError::LoggingInit(e.to_string()).exit(),
    };

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let registry = ProviderRegistry::builtin();

    match cli.command {
        Commands::Providers => {
            commands::providers::run(&registry);
            Ok(())
        }
        Commands::Tile(args) => {
            let config = cli.global.load_config()?;
            commands::tile::run(args, config, &registry)
        }
        Commands::Static(args) => {
            let config = cli.global.load_config()?;
            commands::static_map::run(args, config)
        }
    }
}
