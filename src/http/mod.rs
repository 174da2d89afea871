//! HTTP server: REST API plus the MCP streamable-HTTP endpoint.
//!
//! Both surfaces share one [`CatalogHandle`], so a rescan through either is
//! visible to the other.

pub mod routes;

use axum::Router;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;

use crate::Settings;
use crate::catalog::CatalogHandle;
use crate::indexing::IconIndexer;

pub use routes::ApiError;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub handle: CatalogHandle,
    pub indexer: IconIndexer,
    pub default_limit: usize,
}

impl AppState {
    pub fn new(handle: CatalogHandle, indexer: IconIndexer, default_limit: usize) -> Self {
        Self {
            handle,
            indexer,
            default_limit,
        }
    }
}

/// REST router without the MCP endpoint.
pub fn router(state: AppState) -> Router {
    routes::api_routes()
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve REST and MCP until Ctrl+C.
pub async fn serve_http(settings: Settings, bind: String) -> anyhow::Result<()> {
    use crate::mcp::IconCatalogServer;
    use rmcp::transport::streamable_http_server::{
        StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
    };

    crate::log_event!("http", "starting", "{bind}");

    let indexer = IconIndexer::from_settings(&settings);
    let build_indexer = indexer.clone();
    let catalog = tokio::task::spawn_blocking(move || build_indexer.build()).await?;
    crate::log_event!(
        "http",
        "catalog ready",
        "{} icons ({:?}) from {}",
        catalog.len(),
        catalog.source(),
        indexer.location().display()
    );
    let handle = CatalogHandle::new(catalog);

    let ct = CancellationToken::new();

    let mcp_handle = handle.clone();
    let mcp_indexer = indexer.clone();
    let default_limit = settings.icons.default_limit;
    let mcp_service = StreamableHttpService::new(
        move || {
            crate::debug_event!("mcp", "creating server instance");
            Ok(IconCatalogServer::new(
                mcp_handle.clone(),
                mcp_indexer.clone(),
                default_limit,
            ))
        },
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default()
            .with_cancellation_token(ct.child_token())
            .with_sse_keep_alive(Some(Duration::from_secs(15)))
            .with_stateful_mode(true),
    );

    let state = AppState::new(handle, indexer, settings.icons.default_limit);
    let app = router(state).nest_service("/mcp", mcp_service);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    eprintln!("HTTP server listening on http://{bind}");
    eprintln!("REST API:     http://{bind}/api/icons");
    eprintln!("MCP endpoint: http://{bind}/mcp");
    eprintln!("Press Ctrl+C to stop the server");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Shutting down HTTP server...");
            ct.cancel();
        }
    }

    Ok(())
}
