//! MCP server for the Storyblok Management API.
//!
//! Run with `STORYBLOK_MANAGEMENT_TOKEN=... storyblok-mcp --space-id 123456`.

use clap::Parser;
use storyblok_mcp::{Config, HttpClient, McpServer, McpSession, Region};
use tracing_subscriber::EnvFilter;

/// MCP server for the Storyblok Management API.
///
/// Exposes Storyblok stories, components and assets as MCP tools for AI agents.
/// Communicates via JSON-RPC 2.0 over stdin/stdout.
#[derive(Parser)]
#[command(name = "storyblok-mcp")]
#[command(version, about, long_about = None)]
struct Args {
    /// Management API token.
    #[arg(long, env = "STORYBLOK_MANAGEMENT_TOKEN", hide_env_values = true)]
    token: String,

    /// Space queried until `set-space-id` is called.
    #[arg(long, value_name = "ID", env = "STORYBLOK_SPACE_ID")]
    space_id: Option<String>,

    /// Force an API region (eu, us, ap, ca, cn) instead of detecting it.
    #[arg(long, env = "STORYBLOK_REGION")]
    region: Option<Region>,

    /// Enable debug logging to stderr.
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Set up logging; stdout carries the protocol
    let filter = if args.verbose {
        EnvFilter::from_default_env().add_directive("storyblok_mcp=debug".parse().expect("static directive"))
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::new(args.token);
    config.space_id = args.space_id;
    config.region = args.region;

    let config = match config.validate() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let client = match HttpClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: Failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        space_id = config.space_id.as_deref().unwrap_or("<unset>"),
        "starting storyblok-mcp"
    );

    // Create session and server
    let session = McpSession::new(Box::new(client), config);
    let mut server = McpServer::new(session);

    // Run the server
    if let Err(e) = runtime.block_on(server.run()) {
        tracing::error!(error = %e, "server error");
        eprintln!("Error: Server error: {}", e);
        std::process::exit(1);
    }
}
