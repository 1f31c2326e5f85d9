//! Assignment Desk - Application Entry Point

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assignment_desk::{
    config::Config,
    db,
    handlers,
    services::{AuthService, UserService},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Assignment Desk server...");
    tracing::info!(policy = ?config.policy, "Access policy");

    let stores = db::open_stores(&config.database).await?;
    let auth = AuthService::new(&config.jwt.secret, config.hashing)?;

    if let Some(admin) = &config.bootstrap_admin {
        let created = UserService::ensure_admin(stores.users.as_ref(), &auth, admin).await?;
        if created {
            tracing::info!(username = %admin.username, "Bootstrap admin created");
        }
    }

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let state = AppState::new(stores, auth, config);
    let app = handlers::app(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
