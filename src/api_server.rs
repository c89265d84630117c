// Axum API Server Module
//
// Serves the legend, the monster index and the three rated views of a
// monster. Rendered views are cached per (slug, view, format).

#[cfg(feature = "api")]
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use moka::future::Cache;

#[cfg(feature = "api")]
use serde::Deserialize;

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use anyhow::Context;

#[cfg(feature = "api")]
use crate::config::ServerConfig;

#[cfg(feature = "api")]
use crate::data::Dataset;

#[cfg(feature = "api")]
use crate::hitzones::formatters::{render_monster, OutputFormat, Rendered, ViewKind};

#[cfg(feature = "api")]
use crate::hitzones::legend::build_legend;

#[cfg(feature = "api")]
use crate::search_index::{SearchIndex, DEFAULT_LIMIT};

#[cfg(feature = "api")]
use crate::utils::lookup_tables::RatingConfig;

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub search_index: Arc<SearchIndex>,
    pub ratings: Arc<RatingConfig>,
    /// Rendered monster views keyed by "slug|view|format"
    pub cache: Cache<String, Rendered>,
}

#[cfg(feature = "api")]
impl AppState {
    pub async fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading hitzone dataset...");
        let dataset = Dataset::load(&config.data_path)
            .with_context(|| format!("loading dataset from {}", config.data_path))?;

        Ok(Self::from_dataset(dataset, config))
    }

    /// Build state around an already-loaded dataset
    pub fn from_dataset(dataset: Dataset, config: &ServerConfig) -> Self {
        tracing::info!("Building monster index...");
        let search_index = Arc::new(SearchIndex::build(&dataset));

        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            dataset: Arc::new(dataset),
            search_index,
            ratings: Arc::new(RatingConfig::default()),
            cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/api/v1/health", get(health_check))

        // Rating tables
        .route("/legend", get(get_legend))

        // Monster endpoints
        .route("/monsters", get(list_monsters))
        .route("/monster", get(get_monster))

        .fallback(not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Query Parameters
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug, Default, Deserialize)]
pub struct IndexParams {
    pub q: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[cfg(feature = "api")]
#[derive(Debug, Default, Deserialize)]
pub struct MonsterParams {
    pub name: Option<String>,
    pub stars: Option<String>,
    pub format: Option<String>,
}

/// Lenient integer parse: optional sign then leading digits, anything else
/// ends the number. No digits gives 0, an absent parameter gives `default`.
#[cfg(feature = "api")]
fn parse_int_param(raw: Option<&str>, default: i64) -> i64 {
    let Some(raw) = raw else {
        return default;
    };

    let raw = raw.trim();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));

    if negative { -magnitude } else { magnitude }
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "ok": true,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn get_legend(State(state): State<AppState>) -> impl IntoResponse {
    Json(build_legend(&state.ratings))
}

#[cfg(feature = "api")]
async fn list_monsters(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> impl IntoResponse {
    let query = params.q.as_deref().unwrap_or("");
    let limit = parse_int_param(params.limit.as_deref(), DEFAULT_LIMIT);
    let offset = parse_int_param(params.offset.as_deref(), 0);

    let page = state.search_index.search(query, offset, limit);
    tracing::debug!("Monster search '{}': {} of {}", query, page.count, page.total);

    Json(page).into_response()
}

#[cfg(feature = "api")]
async fn get_monster(
    State(state): State<AppState>,
    Query(params): Query<MonsterParams>,
) -> Result<Response, AppError> {
    let name = params.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        return Err(AppError::BadRequest("missing ?name=".to_string()));
    }

    let monster = state
        .dataset
        .find(name)
        .ok_or_else(|| AppError::NotFound(format!("monster not found: {}", name.to_lowercase())))?;

    let view = ViewKind::from_stars_param(params.stars.as_deref());
    let format = OutputFormat::from_param(params.format.as_deref());

    let cache_key = format!("{}|{:?}|{:?}", monster.slug, view, format);
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit: {}", cache_key);
        return Ok(rendered_response(cached));
    }

    let rendered = render_monster(monster, view, format, &state.ratings)
        .map_err(|e| AppError::Internal(format!("failed to render {}: {}", monster.slug, e)))?;

    state.cache.insert(cache_key, rendered.clone()).await;

    Ok(rendered_response(rendered))
}

#[cfg(feature = "api")]
async fn not_found() -> AppError {
    AppError::NotFound("not found".to_string())
}

#[cfg(feature = "api")]
fn rendered_response(rendered: Rendered) -> Response {
    (
        [(header::CONTENT_TYPE, rendered.format.content_type())],
        rendered.body,
    )
        .into_response()
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// ============================================================================
// Tests
// ============================================================================
