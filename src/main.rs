use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use hazmat_triage::connector::adapter::mcp::TriageMcpServer;
use hazmat_triage::connector::api::{Container, ContainerConfig, Router};
use hazmat_triage::connector::web;
use hazmat_triage::Commands;

#[derive(Parser)]
#[command(name = "hazmat-triage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use the offline keyword mock instead of calling a model endpoint
    #[arg(long, global = true)]
    mock_llm: bool,

    /// Override OPENAI_MODEL
    #[arg(long, global = true)]
    model: Option<String>,

    /// Override OPENAI_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Keep TLS certificate verification enabled for the model endpoint
    #[arg(long, global = true)]
    verify_tls: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // Logs go to stderr so stdout stays clean for command output and MCP stdio.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ContainerConfig::from_env();
    config.mock_llm = cli.mock_llm;
    config.verify_tls = cli.verify_tls;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let container = Arc::new(Container::new(config));

    match cli.command {
        Commands::Serve { port, public } => {
            let ip = if public {
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            } else {
                IpAddr::V4(Ipv4Addr::LOCALHOST)
            };
            web::serve(container, SocketAddr::new(ip, port)).await?;
        }
        Commands::Mcp => {
            info!("Starting MCP server on stdio");
            let service = TriageMcpServer::new(container).serve(stdio()).await?;
            service.waiting().await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
