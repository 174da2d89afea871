//! REST routes over the current catalog snapshot.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::AppState;
use crate::catalog::{Category, IconSummary, SearchQuery, Variation, resolve_icons, search};
use crate::error::IndexError;
use crate::manifest::Manifest;

/// Error body: `{ "error": "..." }`.
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl From<IndexError> for ApiError {
    fn from(e: IndexError) -> Self {
        if e.is_not_found() {
            ApiError::NotFound(e.to_string())
        } else {
            tracing::error!("[http] {e}");
            ApiError::Internal(e.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/icons", get(list_icons))
        .route("/api/icons/{name}", get(get_icon))
        .route("/api/icons/{name}/svg", get(get_icon_svg))
        .route("/api/categories", get(list_categories))
        .route("/api/manifest", get(get_manifest))
        .route("/api/rescan", post(rescan))
        .route("/api/resolve", post(resolve))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
struct ListParams {
    q: Option<String>,
    category: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

async fn list_icons(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<serde_json::Value> {
    let catalog = state.handle.snapshot();
    let limit = params.limit.unwrap_or(state.default_limit);
    let offset = params.offset.unwrap_or(0);

    let query = SearchQuery {
        query: params.q.unwrap_or_default(),
        category: params.category,
        limit: Some(limit),
        offset,
    };
    let results = search(&catalog, &query);

    Json(json!({
        "icons": results.items,
        "total": results.total,
        "limit": limit,
        "offset": offset,
    }))
}

async fn get_icon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let catalog = state.handle.snapshot();
    let entry = catalog.get(&name).ok_or_else(|| IndexError::IconNotFound {
        name: name.clone(),
        variation: None,
    })?;
    Ok(Json(json!(entry)))
}

#[derive(Debug, Deserialize)]
struct SvgParams {
    variation: Option<String>,
}

async fn get_icon_svg(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<SvgParams>,
) -> Result<Response, ApiError> {
    let variation = params
        .variation
        .as_deref()
        .map(str::parse::<Variation>)
        .transpose()
        .map_err(ApiError::BadRequest)?;

    let catalog = state.handle.snapshot();
    let (_, bytes) = state.indexer.read_icon(&catalog, &name, variation)?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], bytes).into_response())
}

#[derive(Debug, Serialize)]
struct CategoryCount {
    category: Category,
    count: usize,
}

async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryCount>> {
    let catalog = state.handle.snapshot();
    Json(
        catalog
            .category_counts()
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect(),
    )
}

async fn get_manifest(State(state): State<AppState>) -> Json<Manifest> {
    Json(Manifest::from_catalog(&state.handle.snapshot()))
}

async fn rescan(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let indexer = state.indexer.clone();
    let catalog = tokio::task::spawn_blocking(move || indexer.build())
        .await
        .map_err(|e| ApiError::Internal(format!("rescan task failed: {e}")))?;

    let snapshot = state.handle.replace(catalog);
    crate::log_event!("http", "rescan", "{} icons", snapshot.len());

    Ok(Json(json!({
        "total": snapshot.len(),
        "source": snapshot.source(),
    })))
}

#[derive(Debug, Deserialize)]
struct ResolveRequest {
    icons: Vec<String>,
}

async fn resolve(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> Json<Vec<IconSummary>> {
    let catalog = state.handle.snapshot();
    Json(
        resolve_icons(&catalog, &request.icons)
            .into_iter()
            .map(IconSummary::from)
            .collect(),
    )
}
