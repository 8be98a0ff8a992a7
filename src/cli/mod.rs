use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::{router, AppState};
use crate::application::LedgerService;
use crate::domain::seed_customers;
use crate::storage::Repository;

/// Cashbook - in-memory bank account ledger
#[derive(Parser)]
#[command(name = "cashbook")]
#[command(about = "A small bank account ledger served over HTTP")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 3333)]
        port: u16,

        /// Start with an empty ledger instead of the demo customer
        #[arg(long)]
        no_seed: bool,
    },
}

impl Cli {
    fn init_tracing(&self) {
        let default_level = if self.verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},tower_http={default_level}")));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    pub async fn run(self) -> Result<()> {
        self.init_tracing();

        match self.command {
            Commands::Serve {
                host,
                port,
                no_seed,
            } => run_serve_command(&host, port, no_seed).await?,
        }

        Ok(())
    }
}

async fn run_serve_command(host: &str, port: u16, no_seed: bool) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", host, port))?;

    let repo = if no_seed {
        Repository::new()
    } else {
        Repository::with_customers(seed_customers())
    };
    info!("Ledger ready with {} account(s)", repo.len().await);

    let app = router(AppState::new(LedgerService::new(repo)));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    // If the handler cannot be installed, run until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["cashbook", "serve"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Serve {
                host,
                port,
                no_seed,
            } => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 3333);
                assert!(!no_seed);
            }
        }
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "cashbook", "serve", "--port", "8080", "--host", "127.0.0.1", "--no-seed", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Serve {
            host,
            port,
            no_seed,
        } = cli.command;
        assert_eq!(host, "127.0.0.1");
        assert_eq!(port, 8080);
        assert!(no_seed);
    }
}
