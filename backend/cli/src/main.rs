use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use vocagate_config::Config;
use vocagate_gateway::{start_server, GatewayState};
use vocagate_speech::GoogleSpeechClient;

#[derive(Parser)]
#[command(name = "vocagate")]
#[command(about = "Vocagate — speech-to-text HTTP gateway")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the vocagate HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show health of a running vocagate instance
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Status => {
            println!("vocagate status: checking...");
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/api/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("vocagate is not running on port {}", config.port);
                }
            }
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    info!(
        port = config.port,
        bind = %config.bind_address,
        "Starting vocagate"
    );

    // Credentials must decode before anything is served; a broken blob is
    // a startup failure, not a first-request failure.
    let credentials = config.load_credentials()?;
    if let Some(project) = &credentials.project_id {
        info!(project = %project, "Loaded recognition credentials");
    }

    let client = GoogleSpeechClient::from_credentials(&credentials)?;
    let client = match &config.recognition_base_url {
        Some(url) => client.with_base_url(url.clone()),
        None => client,
    };

    let state = GatewayState::new(Arc::new(client));

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port)
        .parse()
        .context("invalid bind address")?;

    start_server(addr, state).await
}
