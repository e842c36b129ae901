// src/main.rs
// pricel - persona construct relay for the Gemini API

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "pricel")]
#[command(about = "Persona construct relay for the Gemini API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP relay (default)
    Serve {
        /// Credential file holding the Gemini api_key
        #[arg(long, default_value = "token.json")]
        token: PathBuf,

        /// Optional server config (host/port)
        #[arg(long, default_value = "config.json")]
        config: PathBuf,

        /// Root directory holding constructs/ and response_formats/
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Interactive client against a running relay
    Chat {
        /// Relay base URL
        #[arg(long, env = "PRICEL_URL", default_value = "http://127.0.0.1:8000")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so it can set RUST_LOG before the subscriber reads it
    let _ = dotenvy::dotenv();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve {
        token: PathBuf::from("token.json"),
        config: PathBuf::from("config.json"),
        root: PathBuf::from("."),
    }) {
        Commands::Serve { token, config, root } => {
            pricel::cli::serve::run(&token, &config, &root).await?;
        }
        Commands::Chat { url } => {
            pricel::cli::client::run(&url).await?;
        }
    }

    Ok(())
}
