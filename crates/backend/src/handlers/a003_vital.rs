use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::a003_vital;
use contracts::domain::a003_vital::{Vital, VitalSnapshot};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub patient_id: Option<String>,
}

/// GET /api/vitals
pub async fn list(Query(query): Query<ListQuery>) -> Result<Json<Vec<Vital>>, StatusCode> {
    match a003_vital::service::list(query.patient_id.as_deref()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list vitals: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/vitals/trend
pub async fn trend() -> Result<Json<Vec<VitalSnapshot>>, StatusCode> {
    match a003_vital::service::trend().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to load vital trend: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
