use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use farepath_lib::{find_cheapest_route, Error as LibError, RouteStore};

#[derive(Parser, Debug)]
#[command(author, version, about = "Farepath travel-route utilities")]
struct Cli {
    /// CSV file holding the stored routes (from,to,cost).
    #[arg(long)]
    routes: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest travel route between two airport codes.
    Cheapest {
        /// Origin airport code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code.
        #[arg(long = "to")]
        to: String,
    },
    /// List the stored routes.
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let store = RouteStore::from_csv_path(&cli.routes)
        .with_context(|| format!("failed to load routes from {}", cli.routes.display()))?;

    match cli.command {
        Command::Cheapest { from, to } => handle_cheapest(&store, cli.format, &from, &to),
        Command::List => handle_list(&store, cli.format),
    }
}

fn handle_cheapest(store: &RouteStore, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    let travel = match find_cheapest_route(store, from, to) {
        Ok(travel) => travel,
        Err(err @ LibError::NoTravelRoute { .. }) => {
            return Err(anyhow::anyhow!(
                "{err}. Check the loaded routes file or try different codes."
            ));
        }
        Err(err) => return Err(err.into()),
    };

    match format {
        OutputFormat::Text => {
            println!("Cheapest travel route:");
            for leg in &travel.routes {
                println!("- {} -> {} ({})", leg.from, leg.to, leg.cost);
            }
            println!("Total cost: {}", travel.total_cost);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&travel)?);
        }
    }
    Ok(())
}

fn handle_list(store: &RouteStore, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Stored routes:");
            for route in store.routes() {
                println!("- {} -> {} ({})", route.from, route.to, route.cost);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&store.routes())?);
        }
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
