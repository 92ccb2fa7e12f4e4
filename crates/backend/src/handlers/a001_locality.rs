use axum::{extract::State, http::StatusCode, Json};
use contracts::domain::a001_locality::Locality;

use crate::domain::a001_locality::repository;
use crate::routes::AppState;

/// GET /api/localities
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Locality>>, StatusCode> {
    match repository::list_all(state.store.as_ref()).await {
        Ok(items) => {
            tracing::info!("Localities: returning {} records", items.len());
            Ok(Json(items))
        }
        Err(e) => {
            tracing::error!("Localities: failed to load roster: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
