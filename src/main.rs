//! EasyPanel MCP server binary entry point.

use clap::Parser;
use easypanel_mcp::cli::{commands, Cli, Commands, ServeArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "easypanel_mcp=info,tower_http=info";

#[tokio::main]
async fn main() {
    // stdout carries the MCP stdio transport; logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::handle_serve(&ServeArgs::default()).await,
        Some(Commands::Serve(args)) => commands::handle_serve(&args).await,
        Some(Commands::Tools(args)) => commands::handle_tools(&args),
        Some(Commands::Call(args)) => commands::handle_call(&args).await,
    };

    if let Err(e) = result {
        tracing::debug!(category = ?e.category(), "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
