use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use loco_mcp_server::config::{Config, DEFAULT_ENDPOINT};
use loco_mcp_server::errors::ServerError;
use loco_mcp_server::server::LocoServer;
use loco_mcp_server::transport::Transport;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Clap styling
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Arguments to the MCP server
#[derive(Debug, clap::Parser)]
#[command(
    styles = STYLES,
    about = "Loco MCP Server - invoke Loco GraphQL operations from an AI agent",
)]
struct Args {
    /// The Loco GraphQL endpoint the server will invoke
    #[clap(long, short = 'e', env = "LOCO_API_BASE", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// The log level for the MCP server
    #[clap(long = "log", short = 'l', default_value_t = Level::INFO)]
    log_level: Level,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Send output to stderr since stdout is used for MCP messages
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(args.log_level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .init();

    let endpoint = Url::parse(&args.endpoint).map_err(ServerError::UrlParse)?;
    let config = Config::from_env(endpoint)?;

    info!(
        "Loco MCP Server v{} running on stdio",
        std::env!("CARGO_PKG_VERSION")
    );

    let server = LocoServer::new(Transport::new(config));
    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {:?}", e);
    })?;
    service.waiting().await?;

    Ok(())
}
