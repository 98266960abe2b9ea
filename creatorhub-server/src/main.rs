//! creatorhub - creator content-management backend
//!
//! `serve` (the default) runs the HTTP API. The remaining subcommands are
//! operator tooling for managing creators and session tokens directly in
//! the database.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use creatorhub_common::config::{ConfigResolver, ResolvedConfig, RootFolderInitializer, TomlConfig};
use creatorhub_common::db::{creators, init_database, sessions};
use creatorhub_server::logging::init_logging;
use creatorhub_server::security::{LogMailTransport, TwoFactorSender};
use creatorhub_server::{build_router, AppState};
use sqlx::SqlitePool;
use tokio::signal;
use tracing::{info, warn};

/// Command-line arguments for creatorhub
#[derive(Parser, Debug)]
#[command(name = "creatorhub")]
#[command(about = "Creator content-management backend")]
#[command(version)]
struct Cli {
    /// Root folder holding the database
    #[arg(long, global = true)]
    root_folder: Option<PathBuf>,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:5780
        #[arg(long)]
        bind: Option<String>,
    },
    /// Create a creator and print a session token
    CreateCreator {
        #[arg(long)]
        username: String,
        #[arg(long, default_value = "")]
        email: String,
        /// Grant the elevated (admin) role
        #[arg(long)]
        elevated: bool,
    },
    /// Print a fresh session token for an existing creator
    IssueToken {
        #[arg(long)]
        username: String,
    },
    /// Delete a creator and all of their records
    DeleteCreator {
        #[arg(long)]
        username: String,
    },
    /// Send a two-factor verification code and print it
    SendCode {
        #[arg(long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (toml, config_fallback) = TomlConfig::load_or_default(cli.config.as_deref());
    let bind = match &cli.command {
        Some(Command::Serve { bind }) => bind.clone(),
        _ => None,
    };
    let config = ConfigResolver::new(toml)
        .with_cli_root_folder(cli.root_folder.clone())
        .with_cli_bind(bind)
        .resolve()
        .context("Failed to resolve configuration")?;

    init_logging(&config.log_level, config.log_file.as_deref())?;

    if let Some(fallback) = &config_fallback {
        warn!("{}", fallback);
    }

    info!(
        "Starting CreatorHub v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { .. } => serve(&config).await,
        Command::CreateCreator {
            username,
            email,
            elevated,
        } => {
            let pool = open_database(&config).await?;
            let creator = creators::create_creator(&pool, &username, &email, elevated)
                .await
                .with_context(|| format!("Failed to create creator {}", username))?;
            let token = sessions::issue_session(&pool, creator.id, config.session_ttl_hours).await?;
            info!("Created creator {} (id {}, {:?})", creator.username, creator.id, creator.role());
            println!("{}", token);
            Ok(())
        }
        Command::IssueToken { username } => {
            let pool = open_database(&config).await?;
            let creator = find_by_username(&pool, &username).await?;
            let token = sessions::issue_session(&pool, creator.id, config.session_ttl_hours).await?;
            println!("{}", token);
            Ok(())
        }
        Command::DeleteCreator { username } => {
            let pool = open_database(&config).await?;
            let creator = find_by_username(&pool, &username).await?;
            creators::delete_creator(&pool, creator.id).await?;
            println!("Deleted creator {}", username);
            Ok(())
        }
        Command::SendCode { email } => {
            let sender = TwoFactorSender::new(Arc::new(LogMailTransport), config.mail_from.clone());
            let code = sender.send_verification_code(&email)?;
            println!("{}", code);
            Ok(())
        }
    }
}

async fn open_database(config: &ResolvedConfig) -> Result<SqlitePool> {
    let initializer = RootFolderInitializer::new(config.root_folder.clone());
    initializer.ensure_directory_exists()?;

    let db_path = initializer.database_path();
    info!("Database path: {}", db_path.display());

    init_database(&db_path)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))
}

async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<creatorhub_common::db::Creator> {
    creators::find_creator_by_username(pool, username)
        .await?
        .ok_or_else(|| anyhow!("No creator named {}", username))
}

async fn serve(config: &ResolvedConfig) -> Result<()> {
    let pool = open_database(config).await?;

    let purged = sessions::purge_expired_sessions(&pool).await?;
    if purged > 0 {
        info!("Purged {} expired sessions", purged);
    }

    let app = build_router(AppState::new(pool));

    let addr: SocketAddr = config.bind;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("creatorhub listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
