use std::sync::Arc;
use tokio::signal;
use tracing::info;

use game_persistence::{
    KeyValueStore, MemoryStore, Repositories, SqlStore, connection::connect_and_migrate,
};
use game_server::{
    auth::AdminAuth,
    config::{Config, StoreBackend},
    create_routes,
};

async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            info!("Using in-memory store; data is lost on shutdown");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Sqlite => {
            let db = connect_and_migrate(&config.database_url).await?;
            Ok(Arc::new(SqlStore::new(db)))
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting LexiLeap server...");

    let config = Config::new();

    let store = match build_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open {:?} store: {}", config.store_backend, e);
            std::process::exit(1);
        }
    };
    let repositories = Arc::new(Repositories::new(store));

    match repositories.games.ensure_seed().await {
        Ok(true) => info!("Seeded the game catalogue"),
        Ok(false) => info!("Game catalogue already present"),
        Err(e) => {
            tracing::error!("Failed to seed the game catalogue: {}", e);
            std::process::exit(1);
        }
    }

    let admin_auth = Arc::new(AdminAuth::new(&config.admin_secret));
    let routes = create_routes(repositories, admin_auth);

    let ip = match config.host.parse::<std::net::IpAddr>() {
        Ok(ip) => ip,
        Err(e) => {
            tracing::error!("Invalid HOST '{}': {}", config.host, e);
            std::process::exit(1);
        }
    };

    info!("Server starting on {}:{}", config.host, config.port);

    let (addr, server) =
        warp::serve(routes).bind_with_graceful_shutdown((ip, config.port), async {
            // Wait for SIGINT (Ctrl+C) or SIGTERM
            #[cfg(unix)]
            {
                let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt())
                    .expect("Failed to listen for SIGINT");
                let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
                    .expect("Failed to listen for SIGTERM");

                tokio::select! {
                    _ = sigint.recv() => {
                        info!("Received SIGINT, shutting down gracefully...");
                    }
                    _ = sigterm.recv() => {
                        info!("Received SIGTERM, shutting down gracefully...");
                    }
                }
            }

            #[cfg(not(unix))]
            {
                signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
                info!("Received Ctrl+C, shutting down gracefully...");
            }
        });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
