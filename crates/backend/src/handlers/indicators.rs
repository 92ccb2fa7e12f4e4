use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_locality::IndicatorMap;
use contracts::shared::indicators::*;

use crate::routes::AppState;
use crate::shared::indicators::{fetch_indicator_map, metadata, IndicatorFetchError};

/// GET /api/indicator?indicator=Total_PerCapita
///
/// `{locality name: value}` for one allow-listed indicator.
/// `400` when the key is missing or not allow-listed, `500` when the store fails.
pub async fn get_indicator_map(
    State(state): State<AppState>,
    Query(query): Query<IndicatorQuery>,
) -> Result<Json<IndicatorMap>, StatusCode> {
    match fetch_indicator_map(state.store.as_ref(), query.indicator.as_deref()).await {
        Ok(map) => {
            tracing::info!("Indicators: returning {} localities", map.len());
            Ok(Json(map))
        }
        Err(IndicatorFetchError::InvalidIndicatorKey(e)) => {
            tracing::warn!("Indicators: rejected request: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
        Err(e @ IndicatorFetchError::DataFetch(_)) => {
            tracing::error!("Indicators: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/indicators/meta
///
/// Returns the catalogue of allow-listed indicators and the sector list.
pub async fn get_indicator_catalog() -> Json<IndicatorCatalogResponse> {
    Json(metadata::build_catalog())
}
