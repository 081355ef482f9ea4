//! Axum Site Server
//!
//! Router, shared state, JSON endpoints and error responses. HTML pages and
//! HTMX fragments live in `web::handlers`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use moka::future::Cache;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::browse::{BrowseQuery, BrowseState};
use crate::catalog::{Catalog, Package};
use crate::config::SiteConfig;
use crate::web::handlers::{fragments, pages};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: &'static Catalog,
    pub config: Arc<SiteConfig>,
    /// Rendered HTML keyed by request URI
    pub page_cache: Cache<String, String>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> anyhow::Result<Self> {
        Self::with_catalog(Catalog::bundled(), config)
    }

    /// Validates the catalog before serving anything from it
    pub fn with_catalog(catalog: &'static Catalog, config: SiteConfig) -> anyhow::Result<Self> {
        tracing::info!("Validating catalog ({} packages)...", catalog.len());
        catalog.validate()?;

        tracing::info!(
            "Initializing page cache (capacity {}, ttl {:?})...",
            config.page_cache_capacity,
            config.page_cache_ttl
        );
        let page_cache = Cache::builder()
            .max_capacity(config.page_cache_capacity)
            .time_to_live(config.page_cache_ttl)
            .build();

        Ok(Self {
            catalog,
            config: Arc::new(config),
            page_cache,
        })
    }

    /// Return the cached HTML for `key`, rendering and caching it on a miss
    pub async fn cached_html<F>(&self, key: String, render: F) -> Result<String, AppError>
    where
        F: FnOnce() -> Result<String, askama::Error>,
    {
        if let Some(cached) = self.page_cache.get(&key).await {
            tracing::debug!("Cache hit for {}", key);
            return Ok(cached);
        }

        let html = render()?;
        self.page_cache.insert(key, html.clone()).await;
        Ok(html)
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML pages
        .route("/", get(pages::home_page))
        .route("/packages", get(pages::packages_page))
        .route("/packages/:id", get(pages::package_detail_page))

        // HTMX fragments
        .route("/fragments/testimonials", get(fragments::testimonial_slide))
        .route("/fragments/faq", get(fragments::faq_list))

        // Catalog endpoints (JSON)
        .route("/api/packages", get(list_packages))
        .route("/api/packages/ids", get(get_package_ids))
        .route("/api/packages/:id", get(get_package))

        // Images, logos and other bundled assets
        .nest_service("/static", static_files)
        .fallback(pages::not_found_page)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Same filter and sort query as `/packages`
async fn list_packages(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Json<serde_json::Value> {
    let browse = BrowseState::from_query(&query);
    let packages: Vec<&Package> = browse.apply(state.catalog.all());

    tracing::debug!(
        "Package list '{}' returned {} of {}",
        browse.to_query_string(),
        packages.len(),
        state.catalog.len()
    );

    Json(serde_json::json!({
        "rows": packages.len(),
        "total": state.catalog.len(),
        "data": packages,
    }))
}

/// All package ids, for prerendering detail pages
async fn get_package_ids(State(state): State<AppState>) -> Json<serde_json::Value> {
    let ids: Vec<&str> = state.catalog.ids().collect();
    Json(serde_json::json!({
        "rows": ids.len(),
        "data": ids,
    }))
}

async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<&'static Package>, AppError> {
    state
        .catalog
        .by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Package {} not found", id)))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::Template(e) => {
                tracing::error!("Template render failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
