use anyhow::Context;
use burrow_gateway::cli::{StorageBackendArg, CLI};
use burrow_gateway::{App, AppState, GatewaySettings};
use burrow_session::AdminCredentials;
use burrow_storage::{InMemoryRepository, RedbRepository};
use clap::Parser;
use jiff::SignedDuration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    burrow_telemetry::init(config.log_format)?;

    let settings = GatewaySettings::builder()
        .base_url(config.base_url.clone())
        .session_ttl(SignedDuration::from_secs(i64::from(config.session_ttl_secs)))
        .build();
    let credentials = AdminCredentials::new(config.admin_username, config.admin_password);

    let state = match config.storage {
        StorageBackendArg::Redb => {
            let repository = RedbRepository::open(&config.db_path)
                .with_context(|| format!("failed to open {}", config.db_path.display()))?;
            AppState::with_repository(repository, credentials, settings)
        }
        StorageBackendArg::InMemory => {
            AppState::with_repository(InMemoryRepository::new(), credentials, settings)
        }
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        base_url = %config.base_url,
        storage_backend = %config.storage,
        "starting burrow gateway"
    );

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received shutdown signal");
    }
}
