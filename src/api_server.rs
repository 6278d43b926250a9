// Axum API Server Module
//
// Purpose: REST API over the crop catalog, suitability engine, climate helpers
// and disease lookup
// Routes are mounted under /api to match the browser client

#[cfg(feature = "api")]
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
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
use std::sync::Arc;

#[cfg(feature = "api")]
use crate::catalog::CropCatalog;

#[cfg(feature = "api")]
use crate::climate::{classify_zone, zone_table, FarmingSeason};

#[cfg(feature = "api")]
use crate::config::ServerConfig;

#[cfg(feature = "api")]
use crate::disease::{self, DiseaseCatalog};

#[cfg(feature = "api")]
use crate::error::AdvisorError;

#[cfg(feature = "api")]
use crate::suitability::{recommend, ObservedConditions, RawConditions};

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CropCatalog>,
    pub diseases: Arc<DiseaseCatalog>,
    /// Recommendation responses keyed by normalized conditions
    pub cache: Cache<String, serde_json::Value>,
    pub top_n: usize,
}

#[cfg(feature = "api")]
impl AppState {
    /// Load the catalogs named by the config and set up the response cache
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        use anyhow::Context;

        tracing::info!("Loading crop catalog from {}...", config.catalog_path.display());
        let catalog = CropCatalog::load(&config.catalog_path)
            .with_context(|| format!("loading catalog {}", config.catalog_path.display()))?;

        tracing::info!("Loading disease catalog from {}...", config.disease_catalog_path.display());
        let diseases = DiseaseCatalog::load(&config.disease_catalog_path).with_context(|| {
            format!("loading disease catalog {}", config.disease_catalog_path.display())
        })?;

        Ok(Self::from_catalogs(catalog, diseases, config))
    }

    /// Wrap already-loaded catalogs
    pub fn from_catalogs(catalog: CropCatalog, diseases: DiseaseCatalog, config: &ServerConfig) -> Self {
        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            catalog: Arc::new(catalog),
            diseases: Arc::new(diseases),
            cache,
            top_n: config.top_n,
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
        .route("/api/health", get(health_check))

        // Crop catalog + recommendation
        // recommend is POST-only; GET on it falls through to 405
        .route("/api/crops", get(list_crops))
        .route("/api/crops/recommend", post(recommend_crops))
        .route("/api/crops/:name", get(get_crop))

        // Climate classification
        .route("/api/climate/classify", post(classify_climate))
        .route("/api/climate/zones", get(list_climate_zones))

        // Disease catalog + lookup
        .route("/api/disease", get(list_diseases))
        .route("/api/disease/detect", post(detect_disease))
        .route("/api/disease/:id", get(get_disease))

        .fallback(route_not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "message": "Smart Agriculture API is running",
        "time": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn list_crops(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "total_crops": state.catalog.len(),
        "crops": state.catalog.records(),
    }))
}

#[cfg(feature = "api")]
async fn get_crop(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let crop = state
        .catalog
        .find_by_name(&name)
        .ok_or_else(|| AppError::NotFound(format!("Crop '{}' not found in database", name)))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "crop": crop,
    })))
}

/// POST /api/crops/recommend
/// Body: { temperature, humidity, rainfall?, season?, soil_type?, area? }
#[cfg(feature = "api")]
async fn recommend_crops(
    State(state): State<AppState>,
    payload: Result<Json<RawConditions>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(raw) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let conditions = ObservedConditions::from_raw(raw)?;

    let cache_key = format!("recommend:{}:{:?}", state.top_n, conditions);
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for recommendation");
        return Ok(Json(cached));
    }

    let result = recommend(state.catalog.records(), &conditions, state.top_n);
    tracing::info!(
        "Recommended {} of {} suitable crops",
        result.recommendations.len(),
        result.total_suitable_crops
    );

    let response = success_body(&result)?;

    state.cache.insert(cache_key, response.clone()).await;

    Ok(Json(response))
}

/// POST /api/climate/classify
/// Body: { temperature, humidity, area? }
#[cfg(feature = "api")]
async fn classify_climate(
    payload: Result<Json<RawConditions>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(raw) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let conditions = ObservedConditions::from_raw(raw)?;

    let zone = classify_zone(conditions.temperature, conditions.humidity);
    let season = FarmingSeason::current();

    Ok(Json(serde_json::json!({
        "success": true,
        "location": conditions.area,
        "climate_zone": zone,
        "season": season.info(),
        "suitable_for_farming": zone.suitable_for_farming,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}

#[cfg(feature = "api")]
async fn list_climate_zones() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "zones": zone_table(),
    }))
}

#[cfg(feature = "api")]
async fn list_diseases(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "total_diseases": state.diseases.len(),
        "diseases": state.diseases.records(),
    }))
}

/// GET /api/disease/:id
/// Non-numeric ids are treated as unknown ids
#[cfg(feature = "api")]
async fn get_disease(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let disease = id
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(|id| state.diseases.find_by_id(id))
        .ok_or_else(|| AppError::NotFound("Disease not found".to_string()))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "disease": disease,
    })))
}

#[cfg(feature = "api")]
#[derive(Debug, Default, serde::Deserialize)]
struct DetectRequest {
    #[serde(default)]
    crop_name: Option<String>,
}

/// POST /api/disease/detect
/// Body: { crop_name? }
#[cfg(feature = "api")]
async fn detect_disease(
    State(state): State<AppState>,
    payload: Result<Json<DetectRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let report = disease::detect(&state.diseases, request.crop_name.as_deref());
    tracing::info!(
        "Disease lookup: {} on {}",
        report.detection.disease_name,
        report.detection.crop
    );

    let mut response = success_body(&report)?;
    if let Some(detection) = response
        .get_mut("detection")
        .and_then(|d| d.as_object_mut())
    {
        detection.insert(
            "detected_at".to_string(),
            serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
        );
    }

    Ok(Json(response))
}

/// Serialize `payload` as an object and mark it successful
#[cfg(feature = "api")]
fn success_body<T: serde::Serialize>(payload: &T) -> Result<serde_json::Value, AppError> {
    let mut body = serde_json::to_value(payload)
        .map_err(|e| AppError::Internal(format!("JSON serialization error: {}", e)))?;

    match body.as_object_mut() {
        Some(fields) => {
            fields.insert("success".to_string(), serde_json::Value::Bool(true));
            Ok(body)
        }
        None => Err(AppError::Internal("response payload is not a JSON object".to_string())),
    }
}

#[cfg(feature = "api")]
async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
pub enum AppError {
    InvalidInput(String),
    NotFound(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl From<AdvisorError> for AppError {
    fn from(err: AdvisorError) -> Self {
        match err {
            AdvisorError::InvalidInput(msg) => AppError::InvalidInput(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::warn!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "success": false,
            "message": message
        }));

        (status, body).into_response()
    }
}

#[cfg(all(test, feature = "api"))]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    struct Unserializable;

    impl serde::Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refused"))
        }
    }

    #[tokio::test]
    async fn test_serialization_failure_is_internal_error() {
        let err = success_body(&Unserializable).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("refused"));
    }

    #[test]
    fn test_non_object_payload_rejected() {
        assert!(matches!(success_body(&42), Err(AppError::Internal(_))));

        let body = success_body(&serde_json::json!({ "total": 1 })).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["total"], 1);
    }
}
