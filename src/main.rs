//! Sodor command line.
//!
//! ```text
//!   sodor routes --config routes.toml [--json]
//!       manifest → classes → derived route table → stdout
//!
//!   sodor serve --config routes.toml [--bind 0.0.0.0:3000]
//!       manifest → classes → axum router → HTTP server (echo controllers)
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use sodor::config::{load_config, RoutingConfig};
use sodor::lifecycle::{startup, Shutdown};
use sodor::observability::init_logging;
use sodor::routing::RouteSummary;

#[derive(Parser)]
#[command(name = "sodor")]
#[command(about = "Derive and serve HTTP routes from a controller manifest", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the routes derived from a manifest
    Routes {
        #[arg(short, long)]
        config: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Serve the manifest's controllers over HTTP
    Serve {
        #[arg(short, long)]
        config: PathBuf,

        /// Override `server.bind_address`
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Routes { config, json } => {
            let config = load_config(&config)?;
            init_logging(&config.observability)?;
            print_routes(&config, json)?;
        }
        Commands::Serve { config, bind } => {
            let mut config = load_config(&config)?;
            if let Some(bind) = bind {
                config.server.bind_address = bind;
            }
            init_logging(&config.observability)?;
            serve(config).await?;
        }
    }

    Ok(())
}

fn print_routes(config: &RoutingConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let table = startup::route_table(config)?;
    let summaries: Vec<RouteSummary> = table.routes().iter().map(|r| r.summary()).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for route in &summaries {
        println!(
            "{:<8} {:<40} {}#{}",
            route.verb.as_str().to_uppercase(),
            route.path,
            route.controller,
            route.action
        );
    }
    Ok(())
}

async fn serve(config: RoutingConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("sodor v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.server.bind_address,
        request_timeout_secs = config.server.request_timeout_secs,
        max_body_size = config.server.max_body_size,
        controllers = config.controllers.len(),
        "Configuration loaded"
    );

    let server = startup::build_server(&config)?;

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
