// Site server binary entry point
//
// Usage: cargo run --bin site_server
// Settings come from the environment, see `rehlatours_site::config`.

use rehlatours_site::{create_router, AppState, SiteConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // Default log level: info for our crate, warn for others
                "rehlatours_site=info,tower_http=debug,axum=debug,warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting site server...");

    let config = SiteConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  STATIC_DIR: {}", config.static_dir);
    tracing::info!("  WHATSAPP_NUMBER: {}", config.whatsapp_number);
    tracing::info!("  CONTACT_PHONE: {}", config.contact_phone);
    tracing::info!(
        "  PAGE_CACHE: {} entries, {:?} ttl",
        config.page_cache_capacity,
        config.page_cache_ttl
    );

    let port = config.port;
    let state = AppState::new(config)?;
    tracing::info!("Catalog loaded: {} packages", state.catalog.len());

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
