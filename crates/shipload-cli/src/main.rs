mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use shipload_cli::output::OutputFormat;

use crate::commands::demo::DemoVessels;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cargo container and vessel loading tools")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Vessel catalog CSV (overrides SHIPLOAD_VESSEL_DATA).
    #[arg(long, global = true)]
    vessels: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a two-vessel loading session and print both vessels.
    Demo {
        /// Vessel that receives the containers first.
        #[arg(long, default_value = "Atlantic Express")]
        first: String,
        /// Vessel that takes transfers and leftovers.
        #[arg(long, default_value = "Pacific Runner")]
        second: String,
    },
    /// List refrigerated product categories and their minimum temperatures.
    Products,
    /// List the vessel catalog.
    Vessels,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Demo { first, second } => {
            let catalog = commands::load_vessel_catalog(cli.vessels.as_deref())?;
            commands::demo::handle_demo(&catalog, &DemoVessels { first, second }, cli.format)
        }
        Command::Products => commands::products::handle_list_products(cli.format),
        Command::Vessels => {
            let catalog = commands::load_vessel_catalog(cli.vessels.as_deref())?;
            commands::vessels::handle_list_vessels(&catalog, cli.format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
